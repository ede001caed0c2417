use super::QuestionContainer;

const ERROR_HEADING: &str = "Error loading stimuli:";

/// Plain-text error body shown to the respondent
pub fn render_error_text(message: &str) -> String {
    format!("{}\n{}", ERROR_HEADING, message)
}

/// Error body as the styled fragment injected into the question region.
/// The message is escaped; it is shown as text, never as markup.
pub fn render_error_html(message: &str) -> String {
    format!(
        "<div style='color:#b00020;font-family:monospace;white-space:pre-wrap'>{}</div>",
        escape_html(&render_error_text(message))
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prints errors to stderr and keeps the rendered fragment
#[derive(Debug, Default)]
pub struct ConsoleQuestion {
    pub visible: bool,
    pub html: Option<String>,
}

impl QuestionContainer for ConsoleQuestion {
    fn hide(&mut self) {
        self.visible = false;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn render_error(&mut self, message: &str) {
        eprintln!("{}", render_error_text(message));
        self.html = Some(render_error_html(message));
    }
}

/// Test double remembering visibility changes and rendered errors
#[derive(Debug, Default)]
pub struct RecordingQuestion {
    pub visible: bool,
    pub hidden_count: usize,
    pub errors: Vec<String>,
}

impl QuestionContainer for RecordingQuestion {
    fn hide(&mut self) {
        self.visible = false;
        self.hidden_count += 1;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn render_error(&mut self, message: &str) {
        self.errors.push(render_error_text(message));
    }
}
