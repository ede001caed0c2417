// ============================================================
// CSV PARSER
// ============================================================
// Quote-aware splitting of raw text into rows of fields

/// Character-level CSV state machine.
///
/// Malformed quoting never errors: a stray `"` toggles quote state, and an
/// unterminated quote runs to the end of the input.
pub struct CsvParser {
    /// Field separator (default: comma)
    delimiter: char,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse CSV content into rows. Rows made only of blank fields are dropped.
    pub fn parse_content(&self, content: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = content.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    // Escaped quote ("")
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = !in_quotes,
                c if c == self.delimiter && !in_quotes => {
                    row.push(std::mem::take(&mut field));
                }
                '\n' | '\r' if !in_quotes => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row.push(std::mem::take(&mut field));
                    push_row(&mut rows, std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }

        if !field.is_empty() || !row.is_empty() {
            row.push(field);
            push_row(&mut rows, row);
        }

        rows
    }
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    if row.iter().any(|f| !f.trim().is_empty()) {
        rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<Vec<String>> {
        CsvParser::new().parse_content(content)
    }

    #[test]
    fn test_parse_simple_csv() {
        let rows = parse("title,dimension,cue_no\nA,neutral,1\nB,credible,2");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["A", "neutral", "1"]);
        assert_eq!(rows[2][1], "credible");
    }

    #[test]
    fn test_quoted_comma_is_one_field() {
        let rows = parse("\"a,b\",c\n");
        assert_eq!(rows, vec![vec!["a,b", "c"]]);
    }

    #[test]
    fn test_escaped_quote() {
        let rows = parse("\"a\"\"b\",x");
        assert_eq!(rows[0][0], "a\"b");
    }

    #[test]
    fn test_newline_inside_quotes() {
        let rows = parse("\"line one\nline two\",x\r\ny,z");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "line one\nline two");
        assert_eq!(rows[1], vec!["y", "z"]);
    }

    #[test]
    fn test_all_line_endings() {
        let rows = parse("a,1\r\nb,2\rc,3\nd,4");
        let firsts: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(firsts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_blank_rows_elided() {
        let rows = parse("a,b\n,,\n  , \t\n\nc,d\n\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_trailing_delimiter_keeps_empty_field() {
        let rows = parse("a,b,");
        assert_eq!(rows, vec![vec!["a", "b", ""]]);
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let rows = parse(" a , b ");
        assert_eq!(rows, vec![vec![" a ", " b "]]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest() {
        let rows = parse("a,\"b\nc,d");
        assert_eq!(rows, vec![vec!["a", "b\nc,d"]]);
    }

    #[test]
    fn test_stray_quote_toggles() {
        let rows = parse("ab\"c,d\"e,f");
        assert_eq!(rows, vec![vec!["abc,de", "f"]]);
    }

    #[test]
    fn test_custom_delimiter() {
        let rows = CsvParser::new().with_delimiter(';').parse_content("a;b,c");
        assert_eq!(rows, vec![vec!["a", "b,c"]]);
    }

    #[test]
    fn test_round_trip_through_csv_writer() {
        let records = vec![
            vec!["title", "dimension", "cue_no"],
            vec!["Rates, again, rise", "neutral", "N1"],
            vec!["Plain headline", "credible", "C2"],
            vec!["Multi\nline", " engaging ", ""],
        ];

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());
        for record in &records {
            writer.write_record(record).unwrap();
        }
        writer.flush().unwrap();
        let text = String::from_utf8(writer.get_ref().clone()).unwrap();

        let rows = parse(&text);
        assert_eq!(rows, records);
    }
}
