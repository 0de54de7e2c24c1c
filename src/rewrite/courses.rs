//! Teaching experience: per-year course lists

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::{debug, warn};

use super::splice;
use crate::config::CourseCatalogue;

const TEACHING: &str = r"\subsection{Teaching Experience}\label{teaching-experience}";
const SERVICE: &str = r"\subsection{Service}\label{service}";

static YEAR_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\subsubsection\{(\d{4})\}").expect("valid year heading regex"));

static COURSE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:ME|M\s?E) (\d{3})").expect("valid course number regex"));

/// Labels for the course numbers in one year's listing: de-duplicated,
/// excluded numbers dropped, highest number first.
pub fn year_courses(listing: &str, catalogue: &CourseCatalogue) -> Vec<String> {
    let numbers: BTreeSet<&str> = COURSE_NUMBER
        .captures_iter(listing)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|number| !catalogue.is_excluded(number))
        .collect();

    numbers.iter().rev().map(|number| catalogue.label(number)).collect()
}

/// Replace pandoc's per-year course tables with one bold year and a
/// comma-separated course line per year.
pub fn process_courses(text: &str, catalogue: &CourseCatalogue) -> String {
    let (Some(start), Some(end)) = (text.find(TEACHING), text.find(SERVICE)) else {
        warn!("teaching experience or service subsection not found, courses left unchanged");
        return text.to_string();
    };
    if end < start {
        warn!("service subsection precedes teaching experience, courses left unchanged");
        return text.to_string();
    }

    let section = &text[start..end];
    let headings: Vec<(std::ops::Range<usize>, &str)> = YEAR_HEADING
        .captures_iter(section)
        .filter_map(|caps| Some((caps.get(0)?.range(), caps.get(1)?.as_str())))
        .collect();
    if headings.is_empty() {
        warn!("no year groups in teaching experience, courses left unchanged");
        return text.to_string();
    }

    let mut rewritten = format!("{TEACHING}\n\n");
    for (i, (heading, year)) in headings.iter().enumerate() {
        let listing_end = headings
            .get(i + 1)
            .map(|(next, _)| next.start)
            .unwrap_or(section.len());
        let courses = year_courses(&section[heading.end..listing_end], catalogue);
        debug!(year, count = courses.len(), "courses taught");

        rewritten.push_str(&format!("\\textbf{{{year}}}\n\\\\{}\n\n", courses.join(", ")));
    }

    splice(text, start..end, &rewritten)
}
