//! Teaching experience grouped by year

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::{RenderContext, section_heading};
use crate::config::CourseCatalogue;
use crate::extract::SectionMarkers;

pub(crate) const COURSES: SectionMarkers = SectionMarkers::new(
    "Credit Courses Taught",
    "List of Credit Courses Taught at Penn State for Each Semester with Enrollments in Each Course",
    "Concise Compilation of Results of Student Feedback from Multiple Sources",
);

static SEMESTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:Spring|Summer|Fall) (\d{4})").expect("valid semester regex"));

static COURSE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^M\s*E\s*(\d{3})").expect("valid course code regex"));

/// A taught course: numbered ones sort by number, free-text ones after them
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Course {
    Uncoded(String),
    Numbered(String),
}

/// Courses per year from the dossier's semester listing. Semester lines set
/// the current year; course lines before the first semester are ignored.
pub fn courses_by_year(section: &str, catalogue: &CourseCatalogue) -> BTreeMap<String, BTreeSet<Course>> {
    let mut by_year: BTreeMap<String, BTreeSet<Course>> = BTreeMap::new();
    let mut current_year: Option<String> = None;

    for line in section.lines().map(str::trim) {
        if let Some(caps) = SEMESTER.captures(line) {
            current_year = Some(caps[1].to_string());
            continue;
        }
        let Some(year) = &current_year else {
            continue;
        };

        let course = match COURSE_CODE.captures(line) {
            Some(caps) if catalogue.is_excluded(&caps[1]) => continue,
            Some(caps) => Course::Numbered(caps[1].to_string()),
            None if line.to_lowercase().contains("course") => Course::Uncoded(line.to_string()),
            None => continue,
        };
        by_year.entry(year.clone()).or_default().insert(course);
    }

    by_year
}

pub fn render(ctx: &RenderContext) -> String {
    let section = COURSES.extract(&ctx.text);
    let catalogue = &ctx.config.courses;
    let by_year = courses_by_year(&section, catalogue);
    if by_year.is_empty() {
        return String::new();
    }
    debug!(years = by_year.len(), "rendering teaching experience");

    let mut out = section_heading("TEACHING EXPERIENCE");
    for (year, courses) in by_year.iter().rev() {
        let labels: Vec<String> = courses
            .iter()
            .rev()
            .map(|course| match course {
                Course::Numbered(number) => catalogue.label(number),
                Course::Uncoded(text) => text.clone(),
            })
            .collect();
        out.push_str(&format!("\\textbf{{{year}}}\\\\\n{}\n\n", labels.join(", ")));
    }
    out
}
