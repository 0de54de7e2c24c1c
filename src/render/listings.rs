//! Sections that are a plain list of dossier blocks

use super::{RenderContext, noindent_line, section_heading};
use crate::extract::{SectionMarkers, blocks};
use crate::latex::escape::{accents_to_latex, escape_specials};

pub(crate) const EDITORIAL: SectionMarkers = SectionMarkers::new(
    "Editorial Responsibilities",
    "Outreach - Editorial Responsibilities",
    "Outreach - Peer Review of Grant Proposals",
);
pub(crate) const MEMBERSHIPS: SectionMarkers = SectionMarkers::new(
    "Professional Memberships",
    "Record of Membership in Professional and Learned Societies",
    "Description of New Courses and/or Programs Developed, Including Service Learning and Outreach Courses",
);
pub(crate) const IMPACT: SectionMarkers = SectionMarkers::new(
    "Impact in Society",
    "Impact in Society of Research Scholarship and Creative Accomplishment",
    "Record of Membership in Professional and Learned Societies",
);

/// Blocks that are sub-headings inside a listing rather than entries
const LISTING_HEADINGS: [&str; 1] = ["National"];

fn render_listing(ctx: &RenderContext, markers: &SectionMarkers, heading: &str) -> String {
    let text = markers.extract(&ctx.text);
    let entries: Vec<&str> = blocks(&text)
        .filter(|block| !LISTING_HEADINGS.contains(block))
        .collect();
    if entries.is_empty() {
        return String::new();
    }

    let mut out = section_heading(heading);
    for entry in entries {
        out.push_str(&noindent_line(&accents_to_latex(&escape_specials(entry))));
    }
    out
}

pub fn render_editorial(ctx: &RenderContext) -> String {
    render_listing(ctx, &EDITORIAL, "EDITORIAL BOARD POSITIONS")
}

pub fn render_memberships(ctx: &RenderContext) -> String {
    render_listing(ctx, &MEMBERSHIPS, "PROFESSIONAL MEMBERSHIPS")
}

pub fn render_impact(ctx: &RenderContext) -> String {
    render_listing(
        ctx,
        &IMPACT,
        "IMPACT IN SOCIETY OF RESEARCH, SCHOLARSHIP, AND CREATIVE ACCOMPLISHMENT",
    )
}
