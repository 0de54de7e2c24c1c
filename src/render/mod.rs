//! Rendering of CV sections from dossier data
//!
//! Every renderer reads what it needs from a [`RenderContext`] and returns
//! the LaTeX for one template placeholder. A renderer whose section is
//! missing from the dossier returns an empty string; the warning has already
//! been logged by the extractor.

pub mod awards;
pub mod education;
pub mod grants;
pub mod listings;
pub mod positions;
pub mod property;
pub mod publications;
pub mod service;
pub mod students;
pub mod teaching;

use chrono::NaiveDate;

use crate::config::Config;
use crate::dossier::Dossier;
use crate::extract::SectionMarkers;
use crate::extract::students::STUDENT_SECTIONS;
use crate::latex::{AuthorMatcher, Placeholder};

/// Everything a section renderer may look at
pub struct RenderContext<'a> {
    pub dossier: &'a Dossier,
    /// `dossier.text()`, computed once
    pub text: String,
    pub config: &'a Config,
    pub today: NaiveDate,
    pub author: Option<AuthorMatcher>,
}

impl<'a> RenderContext<'a> {
    pub fn new(dossier: &'a Dossier, config: &'a Config, today: NaiveDate) -> Self {
        Self {
            dossier,
            text: dossier.text(),
            config,
            today,
            author: AuthorMatcher::resolve(&config.person, Some(dossier)),
        }
    }
}

pub type Renderer = fn(&RenderContext) -> String;

/// Placeholder to renderer, in template order
pub const RENDERERS: [(Placeholder, Renderer); 13] = [
    (Placeholder::Positions, positions::render),
    (Placeholder::Education, education::render),
    (Placeholder::Awards, awards::render),
    (Placeholder::Publications, publications::render),
    (Placeholder::Presentations, publications::render_presentations),
    (Placeholder::Grants, grants::render),
    (Placeholder::Property, property::render),
    (Placeholder::Students, students::render),
    (Placeholder::Teaching, teaching::render),
    (Placeholder::Service, service::render),
    (Placeholder::Editorial, listings::render_editorial),
    (Placeholder::Memberships, listings::render_memberships),
    (Placeholder::Impact, listings::render_impact),
];

/// Every marker-bounded dossier section the renderers read
pub fn dossier_sections() -> Vec<SectionMarkers> {
    let mut sections = awards::AWARD_SECTIONS.to_vec();
    sections.extend([
        publications::JOURNAL,
        publications::CONFERENCE,
        publications::PREPRINT,
    ]);
    sections.extend(publications::PRESENTATION_SECTIONS);
    sections.extend([grants::GRANTS, property::PROPERTY]);
    sections.extend(STUDENT_SECTIONS.iter().map(|section| section.markers));
    sections.extend([
        teaching::COURSES,
        service::COMMITTEE,
        service::ACADEMIC,
        service::PARTICIPATION,
        service::PROFESSION,
        service::SOCIETY,
        listings::EDITORIAL,
        listings::MEMBERSHIPS,
        listings::IMPACT,
    ]);
    sections
}

pub(crate) fn section_heading(title: &str) -> String {
    format!("\n\\section*{{{title}}}\n")
}

pub(crate) fn subsection_heading(title: &str) -> String {
    format!("\n\\subsection*{{{title}}}\n")
}

/// A free-standing paragraph followed by a small gap
pub(crate) fn noindent_line(text: &str) -> String {
    format!("\\noindent {text}\\par\\vspace{{0.25cm}}\n")
}

/// Left text and right-aligned date on one line
pub(crate) fn dated_line(left: &str, right: &str) -> String {
    format!(
        "\\noindent \\parbox[t]{{0.8\\linewidth}}{{\\raggedright {left}}} \\hfill \\parbox[t]{{0.2\\linewidth}}{{\\raggedleft {right}}} \\\\\n"
    )
}

/// An enumerate environment, or nothing when there are no items
pub(crate) fn enumerate(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = String::from("\\begin{enumerate}\n");
    for item in items {
        out.push_str("  \\item ");
        out.push_str(item);
        out.push('\n');
    }
    out.push_str("\\end{enumerate}\n");
    out
}
