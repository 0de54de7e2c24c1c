//! Directed student learning

use super::{RenderContext, enumerate, section_heading, subsection_heading};
use crate::extract::students::{STUDENT_SECTIONS, StudentEntry};
use crate::latex::escape::{accents_to_latex, escape_specials};

/// `Name, ``Title'', Period`
pub fn format_student(entry: &StudentEntry) -> String {
    let mut line = format!("{}, ``{}''", entry.name, entry.title);
    if !entry.period.is_empty() {
        line.push_str(", ");
        line.push_str(&entry.period);
    }
    accents_to_latex(&escape_specials(&line))
}

pub fn render(ctx: &RenderContext) -> String {
    let mut body = String::new();

    for section in &STUDENT_SECTIONS {
        let items: Vec<String> = section
            .entries(&ctx.text)
            .iter()
            .map(format_student)
            .collect();
        if items.is_empty() {
            continue;
        }
        body.push_str(&subsection_heading(section.heading));
        body.push_str(&enumerate(&items));
    }

    if body.is_empty() {
        return String::new();
    }
    section_heading("DIRECTED STUDENT LEARNING") + &body
}
