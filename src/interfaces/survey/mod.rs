// ============================================================
// SURVEY HOST SURFACES
// ============================================================
// What a load cycle needs from the survey platform, as injected traits

mod embedded_data;
mod navigator;
mod question;

pub use embedded_data::MemoryEmbeddedData;
pub use navigator::{ConsoleNavigator, CountingNavigator};
pub use question::{render_error_html, render_error_text, ConsoleQuestion, RecordingQuestion};

/// Per-session key-value store later survey steps read from
pub trait EmbeddedDataStore: Send {
    fn set(&mut self, key: &str, value: &str);
}

/// The question region the loader is attached to
pub trait QuestionContainer: Send {
    fn hide(&mut self);
    fn show(&mut self);
    /// Replace the region's content with a plain-text error
    fn render_error(&mut self, message: &str);
}

/// Moves the respondent to the next survey step
pub trait SurveyNavigator: Send {
    fn advance(&mut self);
}

/// The three host collaborators of one load cycle
pub struct SurveyHost<D, Q, N> {
    pub data: D,
    pub question: Q,
    pub navigator: N,
}

impl<D, Q, N> SurveyHost<D, Q, N>
where
    D: EmbeddedDataStore,
    Q: QuestionContainer,
    N: SurveyNavigator,
{
    pub fn new(data: D, question: Q, navigator: N) -> Self {
        Self {
            data,
            question,
            navigator,
        }
    }
}

impl SurveyHost<MemoryEmbeddedData, RecordingQuestion, CountingNavigator> {
    /// In-memory host that records everything it is asked to do
    pub fn recording() -> Self {
        Self::new(
            MemoryEmbeddedData::new(),
            RecordingQuestion::default(),
            CountingNavigator::default(),
        )
    }
}
