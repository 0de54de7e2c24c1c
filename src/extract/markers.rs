//! Marker-bounded section lookup
//!
//! A section is whatever sits between a literal start marker and a literal
//! end marker. Nothing here fails: a missing marker yields an empty section.

/// Text strictly between `start` and the first `end` after it, trimmed.
///
/// With no end marker the section runs to the end of the text. Returns an
/// empty string when the start marker is missing, or when an end marker is
/// given but does not occur after the start.
pub fn between(text: &str, start: &str, end: Option<&str>) -> String {
    let Some(start_pos) = text.find(start) else {
        return String::new();
    };
    let rest = &text[start_pos + start.len()..];

    match end {
        Some(end) => match rest.find(end) {
            Some(end_pos) => rest[..end_pos].trim().to_string(),
            None => String::new(),
        },
        None => rest.trim().to_string(),
    }
}

/// Byte range of the span that starts at `start` and stops right before the
/// next `end` found after it, or at the end of the text.
pub fn span(text: &str, start: &str, end: &str) -> Option<std::ops::Range<usize>> {
    let start_pos = text.find(start)?;
    let search_from = start_pos + start.len();
    let end_pos = text[search_from..]
        .find(end)
        .map(|pos| pos + search_from)
        .unwrap_or(text.len());
    Some(start_pos..end_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_markers() {
        let text = "Intro\nStart\n  body line  \nEnd\nTail";
        assert_eq!(between(text, "Start", Some("End")), "body line");
    }

    #[test]
    fn test_missing_start_marker_is_empty() {
        assert_eq!(between("nothing to see", "Absent", Some("End")), "");
        assert_eq!(between("nothing to see", "Absent", None), "");
        assert_eq!(between("", "", None), "");
    }

    #[test]
    fn test_missing_end_marker_is_empty() {
        assert_eq!(between("Start body", "Start", Some("End")), "");
        // An end marker before the start does not count
        assert_eq!(between("End Start body", "Start", Some("End")), "");
    }

    #[test]
    fn test_open_ended_section() {
        assert_eq!(between("a\nStart\nrest\n", "Start", None), "rest");
    }

    #[test]
    fn test_first_end_after_start_wins() {
        assert_eq!(between("S one E two E", "S", Some("E")), "one");
    }

    #[test]
    fn test_markers_with_blank_lines() {
        let text = "Service, Professional\n\nAward. 2020\n\nEXTERNAL LETTERS";
        assert_eq!(
            between(text, "Service, Professional\n\n", Some("EXTERNAL LETTERS")),
            "Award. 2020"
        );
    }

    #[test]
    fn test_span_runs_to_end_without_end_marker() {
        let text = "head \\subsection{A} body";
        let range = span(text, "\\subsection{A}", "\\subsection{").expect("span");
        assert_eq!(&text[range], "\\subsection{A} body");
    }
}
