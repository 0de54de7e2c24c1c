//! Section and entry extraction from dossier text

pub mod entries;
pub mod markers;
pub mod students;

use tracing::warn;

pub use entries::{blocks, first_line, parse_entries};
pub use markers::between;

/// A named dossier section bounded by two literal markers
#[derive(Debug, Clone, Copy)]
pub struct SectionMarkers {
    pub name: &'static str,
    pub start: &'static str,
    pub end: Option<&'static str>,
}

impl SectionMarkers {
    pub const fn new(name: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            name,
            start,
            end: Some(end),
        }
    }

    /// Section text, or an empty string with a warning when it is missing
    pub fn extract(&self, text: &str) -> String {
        let section = between(text, self.start, self.end);
        if section.is_empty() {
            warn!(section = self.name, "section not found in dossier");
        }
        section
    }
}
