//! Awards and honors

use tracing::debug;

use super::{RenderContext, dated_line, section_heading};
use crate::extract::{SectionMarkers, blocks, first_line};
use crate::latex::dates::first_year;
use crate::latex::escape::{accents_to_latex, escape_specials};

pub(crate) const AWARD_SECTIONS: [SectionMarkers; 2] = [
    SectionMarkers::new(
        "Honors or Awards for Scholarship",
        "Honors or Awards for Scholarship, Research, or Creative Activities\n\nScholarship/Research",
        "Technology Transferred or Adapted in the Field",
    ),
    SectionMarkers::new(
        "Honors or Awards for Service",
        "Service, Professional\n\n",
        "EXTERNAL LETTERS OF ASSESSMENT",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    pub title: String,
    pub year: String,
}

/// `Title. Month Year. Details` on the first line of a block. Blocks without
/// a year are dropped.
pub fn parse_award(block: &str) -> Option<Award> {
    let line = first_line(block);
    let mut parts = line.split('.');
    let title = parts.next()?.trim();
    let date = parts.next()?;
    let year = first_year(date)?;

    Some(Award {
        title: title.to_string(),
        year: year.to_string(),
    })
}

pub fn render(ctx: &RenderContext) -> String {
    let mut awards: Vec<Award> = AWARD_SECTIONS
        .iter()
        .flat_map(|section| {
            let text = section.extract(&ctx.text);
            blocks(&text).filter_map(parse_award).collect::<Vec<_>>()
        })
        .collect();

    if awards.is_empty() {
        return String::new();
    }
    debug!(count = awards.len(), "rendering awards");

    // Stable, so awards from the same year keep dossier order
    awards.sort_by(|a, b| b.year.cmp(&a.year));

    let mut out = section_heading("AWARDS AND HONORS");
    for award in &awards {
        let title = accents_to_latex(&escape_specials(&award.title));
        out.push_str(&dated_line(&title, &award.year));
    }
    out
}
