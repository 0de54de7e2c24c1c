//! Directed student learning sections
//!
//! The four advising sections share one shape: a dossier section with one
//! advisee per line (`Name, Degree. Title. (Period).`), and a matching
//! `\subsubsection` in the LaTeX CV. `STUDENT_SECTIONS` drives both the
//! build renderer and the clean-up rewriters.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::SectionMarkers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StudentKind {
    PhD,
    Masters,
    Postdoc,
    Undergraduate,
}

#[derive(Debug, Clone, Copy)]
pub struct StudentSection {
    pub kind: StudentKind,
    /// Where the advisees are listed in the dossier
    pub markers: SectionMarkers,
    /// Entry pattern with `name`, `title` and optional `period` groups
    pub pattern: &'static str,
    /// Heading used in the CV, also the `\subsubsection` title pandoc emits
    pub heading: &'static str,
}

/// Advising sections in the order they appear in the CV
pub static STUDENT_SECTIONS: [StudentSection; 4] = [
    StudentSection {
        kind: StudentKind::PhD,
        markers: SectionMarkers::new(
            "Ph.D. Dissertation Advisor",
            "Ph.D. Dissertation Advisor",
            "Ph.D. Dissertation Committee Member",
        ),
        pattern: r"(?m)^(?P<name>[^,\n]+,[^,\n]*?),\s*Ph\.D\.\s+(?P<title>.+?)(?:\s+\((?P<period>[^()\n]*)\))?\.?[ \t]*$",
        heading: "Ph.D. Dissertation",
    },
    StudentSection {
        kind: StudentKind::Masters,
        markers: SectionMarkers::new(
            "Master's Thesis Advisor",
            "Master's Thesis Advisor",
            "Master's Thesis Committee Member",
        ),
        pattern: r"(?m)^(?P<name>[^,\n]+,[^,\n]*?),\s*M\.?S\.\s+(?P<title>.+?)(?:\s+\((?P<period>[^()\n]*)\))?\.?[ \t]*$",
        heading: "Master's Thesis",
    },
    StudentSection {
        kind: StudentKind::Postdoc,
        markers: SectionMarkers::new(
            "Postdoctoral Mentorship Advisor",
            "Postdoctoral Mentorship Advisor",
            "Research Activity Advisor",
        ),
        pattern: r"(?m)^(?P<name>[^,\n]+,\s*[A-Z]\.(?:\s?[A-Z]\.)*)\s+(?P<title>.+?)(?:\s+\((?P<period>[^()\n]*)\))?\.?[ \t]*$",
        heading: "Postdoctoral Mentorship",
    },
    StudentSection {
        kind: StudentKind::Undergraduate,
        markers: SectionMarkers::new(
            "Undergraduate Honors Thesis Advisor",
            "Undergraduate Honors Thesis Advisor",
            "THE SCHOLARSHIP OF Research and",
        ),
        pattern: r"(?m)^(?P<name>[^,\n]+,[^,\n]*?),\s*Undergraduate\.\s+(?P<title>.+?)(?:\s+\((?P<period>[^()\n]*)\))?\.?[ \t]*$",
        heading: "Undergraduate Honors Thesis",
    },
];

static ENTRY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    STUDENT_SECTIONS
        .iter()
        .map(|section| Regex::new(section.pattern).expect("valid student entry regex"))
        .collect()
});

static DATE_GRADUATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.?\s*Date Graduated:.*$").expect("valid date graduated regex"));

/// One advisee parsed from the dossier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentEntry {
    pub name: String,
    pub title: String,
    pub period: String,
}

impl StudentKind {
    fn index(self) -> usize {
        match self {
            StudentKind::PhD => 0,
            StudentKind::Masters => 1,
            StudentKind::Postdoc => 2,
            StudentKind::Undergraduate => 3,
        }
    }
}

impl StudentSection {
    pub fn for_kind(kind: StudentKind) -> &'static StudentSection {
        &STUDENT_SECTIONS[kind.index()]
    }

    fn entry_regex(&self) -> &'static Regex {
        &ENTRY_PATTERNS[self.kind.index()]
    }

    /// Parse every advisee line of this section out of the dossier text
    pub fn entries(&self, text: &str) -> Vec<StudentEntry> {
        let section = self.markers.extract(text);
        let entries: Vec<StudentEntry> = self
            .entry_regex()
            .captures_iter(&section)
            .map(|caps| {
                // A trailing `Date Graduated:` keeps the period group from
                // matching, leaving `Title. (period)` inside the title
                let raw = &caps["title"];
                let (title, period) = match raw.split_once(". (") {
                    Some((title, rest)) => (title, rest.split(')').next().unwrap_or_default()),
                    None => (raw, caps.name("period").map_or("", |m| m.as_str())),
                };
                StudentEntry {
                    name: caps["name"].trim().to_string(),
                    title: clean_title(title),
                    period: period.trim().to_string(),
                }
            })
            .collect();

        debug!(section = self.heading, count = entries.len(), "parsed advisees");
        entries
    }
}

fn clean_title(raw: &str) -> String {
    let title = DATE_GRADUATED.replace(raw.trim(), "");
    title
        .trim()
        .trim_end_matches('.')
        .trim()
        .replace('\u{2013}', "--")
}

/// Advisee name to thesis title for one section. A missing section logs a
/// warning and yields an empty map.
pub fn extract_titles(text: &str, section: &StudentSection) -> BTreeMap<String, String> {
    section
        .entries(text)
        .into_iter()
        .map(|entry| (entry.name, entry.title))
        .collect()
}

/// Titles for each advising section, keyed by the section heading. The same
/// advisee may appear under several headings with different titles.
pub fn extract_all_titles(text: &str) -> BTreeMap<&'static str, BTreeMap<String, String>> {
    STUDENT_SECTIONS
        .iter()
        .map(|section| (section.heading, extract_titles(text, section)))
        .collect()
}
