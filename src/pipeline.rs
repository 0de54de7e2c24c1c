//! The two CV pipelines and the dossier summary
//!
//! `build_cv` starts from the built-in template and fills it from a dossier.
//! `clean_cv` takes a CV that pandoc produced from the same dossier and
//! tidies it in place. Both are pure text transforms; reading and writing
//! files is left to the caller.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::config::Config;
use crate::dossier::Dossier;
use crate::extract::between;
use crate::extract::students::{STUDENT_SECTIONS, StudentEntry, extract_all_titles};
use crate::latex::AuthorMatcher;
use crate::latex::dates::month_year;
use crate::latex::document::{
    add_custom_package, add_date_to_header, capitalize_subsections, format_header, remove_block,
    rename_sections, replace_section_colors, set_section_colors, update_documentclass_font_size,
};
use crate::latex::escape::latex_quotes;
use crate::latex::template::{clear_unfilled, cv_template, fill};
use crate::render::{RENDERERS, RenderContext, dossier_sections};
use crate::rewrite;

/// Friendlier titles for pandoc's publication and presentation headings
pub const CUSTOM_TITLES: [(&str, &str); 6] = [
    (
        r"\subsubsection{Journal Article}\label{journal-article}",
        r"\subsubsection{Journal Articles}\label{journal-article}",
    ),
    (
        r"\subsubsection{Conference Proceeding}\label{conference-proceeding}",
        r"\subsubsection{Conference Proceedings}\label{conference-proceeding}",
    ),
    (
        r"\subsubsection{Book Chapter}\label{book-chapter}",
        r"\subsubsection{Book Chapters}\label{book-chapter}",
    ),
    (
        r"\subsubsection{Other}\label{other}",
        r"\subsubsection{Preprints and Technical Reports}\label{other}",
    ),
    (
        r"\subsubsection{Invited}\label{invited}",
        r"\subsubsection{Invited Talks and Seminars}\label{invited}",
    ),
    (
        r"\subsubsection{Uncategorized}\label{uncategorized}",
        r"\subsubsection{Conferences and Workshops}\label{uncategorized-presentations}",
    ),
];

fn display_name(config: &Config, dossier: Option<&Dossier>) -> Option<String> {
    config
        .person
        .display_name
        .clone()
        .or_else(|| dossier.and_then(Dossier::full_name))
}

/// Generate a complete LaTeX CV from a dossier
pub fn build_cv(dossier: &Dossier, config: &Config, today: NaiveDate) -> String {
    let style = &config.style;

    let mut text = cv_template();
    text = add_custom_package(&text, &style.package);
    text = set_section_colors(&text, &style.subsection_color, &style.subsubsection_color);

    match display_name(config, Some(dossier)) {
        Some(name) => text = format_header(&text, &name, "2pt"),
        None => warn!("no name in config or dossier profile, header skipped"),
    }
    text = add_date_to_header(&text, &month_year(today));

    let ctx = RenderContext::new(dossier, config, today);
    for (placeholder, render) in RENDERERS {
        let content = render(&ctx);
        info!(section = placeholder.token(), bytes = content.len(), "rendered");
        text = fill(&text, placeholder, &content);
    }

    if let Some(size) = style.font_size {
        text = update_documentclass_font_size(&text, size);
    }
    clear_unfilled(&text)
}

/// Tidy a pandoc-generated CV. The dossier, when given, supplies the name
/// for the header and the thesis titles of advised students.
pub fn clean_cv(tex: &str, dossier: Option<&Dossier>, config: &Config, today: NaiveDate) -> String {
    let style = &config.style;

    info!("adding package and heading colours");
    let mut text = add_custom_package(tex, &style.package);
    text = set_section_colors(&text, "blue", "red");

    if let Some(block) = &config.person.contact_block {
        text = remove_block(&text, block);
    }
    let title = match display_name(config, dossier) {
        Some(name) => format!("{name} - Curriculum Vita"),
        None => "Curriculum Vita".to_string(),
    };
    text = format_header(&text, &title, "0.4pt");
    text = add_date_to_header(&text, &month_year(today));

    info!("rewriting teaching experience");
    text = rewrite::process_courses(&text, &config.courses);

    info!("rewriting publications");
    text = rewrite::reorder_publications(&text);
    match AuthorMatcher::resolve(&config.person, dossier) {
        Some(author) => text = rewrite::bold_author(&text, &author),
        None => warn!("no author name configured or found in dossier, names not bolded"),
    }

    info!("rewriting directed student learning");
    text = rewrite::reorder_student_sections(&text);
    match dossier {
        Some(dossier) => {
            let titles = extract_all_titles(&dossier.text());
            for section in &STUDENT_SECTIONS {
                if let Some(section_titles) = titles.get(section.heading) {
                    text = rewrite::add_titles(&text, section, section_titles);
                }
            }
        }
        None => warn!("no dossier given, thesis titles not added"),
    }
    for section in &STUDENT_SECTIONS {
        text = rewrite::reformat_section(&text, section);
    }

    info!("rewriting service");
    text = rewrite::clean_service_section(&text);

    info!("final touches");
    text = latex_quotes(&text);
    text = rewrite::underline_mentored_authors(&text);
    text = rename_sections(&text, &CUSTOM_TITLES);
    text = replace_section_colors(&text, &style.subsection_color, &style.subsubsection_color);
    text = capitalize_subsections(&text);

    if let Some(size) = style.font_size {
        text = update_documentclass_font_size(&text, size);
    }
    text
}

/// Whether a dossier section was found, and how much text it holds
#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    pub name: &'static str,
    pub found: bool,
    pub chars: usize,
}

/// What the extractors see in a dossier, for checking a new dossier layout
#[derive(Debug, Clone, Serialize)]
pub struct DossierSummary {
    pub name: Option<String>,
    pub paragraphs: usize,
    pub tables: usize,
    pub sections: Vec<SectionSummary>,
    pub advisees: BTreeMap<&'static str, Vec<StudentEntry>>,
}

pub fn summarize(dossier: &Dossier) -> DossierSummary {
    let text = dossier.text();

    let sections = dossier_sections()
        .into_iter()
        .map(|markers| {
            let body = between(&text, markers.start, markers.end);
            SectionSummary {
                name: markers.name,
                found: !body.is_empty(),
                chars: body.chars().count(),
            }
        })
        .collect();

    let advisees = STUDENT_SECTIONS
        .iter()
        .map(|section| (section.heading, section.entries(&text)))
        .collect();

    DossierSummary {
        name: dossier.full_name(),
        paragraphs: dossier.paragraphs.len(),
        tables: dossier.tables.len(),
        sections,
        advisees,
    }
}

impl DossierSummary {
    /// Plain-text report, one line per section and advisee
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "Name: {}\nParagraphs: {}\nTables: {}\n\nSections:\n",
            self.name.as_deref().unwrap_or("(unknown)"),
            self.paragraphs,
            self.tables
        );
        for section in &self.sections {
            let status = if section.found { "found" } else { "missing" };
            out.push_str(&format!("  {:<55} {:>7} {:>6} chars\n", section.name, status, section.chars));
        }
        for (heading, entries) in &self.advisees {
            out.push_str(&format!("\n{heading} ({}):\n", entries.len()));
            for entry in entries {
                out.push_str(&format!("  {}: {} ({})\n", entry.name, entry.title, entry.period));
            }
        }
        out
    }
}
