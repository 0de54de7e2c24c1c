//! Clean-up passes over a pandoc-generated LaTeX CV
//!
//! Every pass works inside one `\subsection` span located by literal
//! headings. A pass that cannot find its span, or finds nothing to rewrite
//! in it, logs a warning and returns the text unchanged.

pub mod courses;
pub mod publications;
pub mod service;
pub mod students;

pub use courses::process_courses;
pub use publications::{bold_author, reorder_publications, underline_mentored_authors};
pub use service::clean_service_section;
pub use students::{add_titles, reformat_section, reorder_student_sections};

/// Regex source for a heading title as pandoc may wrap it: any whitespace
/// run may become a line break and apostrophes may be typographic.
pub(crate) fn heading_pattern(title: &str) -> String {
    title
        .split_whitespace()
        .map(|word| regex::escape(word).replace('\'', "['’]"))
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Splice `replacement` over `range` of `text`
pub(crate) fn splice(text: &str, range: std::ops::Range<usize>, replacement: &str) -> String {
    format!("{}{}{}", &text[..range.start], replacement, &text[range.end..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_heading_pattern_tolerates_wrapping() {
        let pattern = Regex::new(&heading_pattern("Undergraduate Honors Thesis")).expect("valid");
        assert!(pattern.is_match("Undergraduate Honors\nThesis"));

        let pattern = Regex::new(&heading_pattern("Master's Thesis")).expect("valid");
        assert!(pattern.is_match("Master’s Thesis"));
        assert!(pattern.is_match("Master's Thesis"));
    }

    #[test]
    fn test_splice() {
        assert_eq!(splice("abcdef", 2..4, "XY"), "abXYef");
    }
}
