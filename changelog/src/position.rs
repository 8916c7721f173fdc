/// Lines at the top of the document kept ahead of the new section
pub const HEADER_LINES: usize = 2;

/// Index of the original line replaced by the new section
pub const DROPPED_LINE_INDEX: usize = 2;

/// Splits a document on `\n` exactly, keeping a trailing empty segment.
pub fn split_document(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

pub fn dropped_line<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines.get(DROPPED_LINE_INDEX).copied()
}

/// Inserts `section` after the header, dropping the line at index 2.
///
/// Documents shorter than three lines keep whatever header they have.
pub fn splice_section<S: AsRef<str>>(content: &str, section: &[S]) -> String {
    let lines = split_document(content);
    let header_end = HEADER_LINES.min(lines.len());
    let rest_start = (DROPPED_LINE_INDEX + 1).min(lines.len());

    let mut output: Vec<&str> = Vec::with_capacity(lines.len() + section.len());
    output.extend_from_slice(&lines[..header_end]);
    output.extend(section.iter().map(|line| <S as AsRef<str>>::as_ref(line)));
    output.extend_from_slice(&lines[rest_start..]);

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_header_and_drops_third_line() {
        let result = splice_section("H1\nH2\nDROP\nkeep 1\nkeep 2", &["NEW"]);
        assert_eq!(result, "H1\nH2\nNEW\nkeep 1\nkeep 2");
    }

    #[test]
    fn trailing_newline_survives() {
        let result = splice_section("H1\nH2\n\nold\n", &["NEW"]);
        assert_eq!(result, "H1\nH2\nNEW\nold\n");
    }

    #[test]
    fn carriage_returns_are_untouched() {
        let result = splice_section("H1\r\nH2\r\n\r\nold\r\n", &["NEW"]);
        assert_eq!(result, "H1\r\nH2\r\nNEW\nold\r\n");
    }

    #[test]
    fn empty_document_yields_section_only() {
        let result = splice_section("", &["A", "B"]);
        assert_eq!(result, "\nA\nB");
    }

    #[test]
    fn two_line_document_keeps_both_lines() {
        let result = splice_section("H1\nH2", &["NEW"]);
        assert_eq!(result, "H1\nH2\nNEW");
    }

    #[test]
    fn three_line_document_has_no_remainder() {
        let result = splice_section("H1\nH2\nDROP", &["NEW"]);
        assert_eq!(result, "H1\nH2\nNEW");
    }

    #[test]
    fn dropped_line_is_reported() {
        let lines = split_document("H1\nH2\nthird\nfourth");
        assert_eq!(dropped_line(&lines), Some("third"));
        assert_eq!(dropped_line(&split_document("H1\nH2")), None);
    }
}
