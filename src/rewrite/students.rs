//! Directed student learning: section order, thesis titles, item layout
//!
//! pandoc renders each advisee as
//!
//! ```text
//! \item
//!   Ph.D. Dissertation. (2016 - 2020).\\
//!   Advised: Alice Roe
//! ```
//!
//! [`add_titles`] appends the thesis title from the dossier after the name,
//! and [`reformat_section`] rewrites each item to `\item Name, "Title", period`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::{heading_pattern, splice};
use crate::extract::students::{STUDENT_SECTIONS, StudentKind, StudentSection};
use crate::latex::escape::escape_specials;

const DIRECTED_LEARNING: &str = r"\subsection{Directed Student Learning}";

static SECTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\\label\{[^}]*\}").expect("valid label regex"));

/// Compiled patterns for one advising sub-section
struct StudentLayout {
    /// `\subsubsection{Heading}` through the end of its enumerate
    block: Regex,
    /// The heading and its optional `\label{}`
    heading: Regex,
    item: Regex,
}

static LAYOUTS: Lazy<Vec<StudentLayout>> = Lazy::new(|| {
    STUDENT_SECTIONS
        .iter()
        .map(|section| {
            let heading = heading_pattern(section.heading);
            StudentLayout {
                block: Regex::new(&format!(r"(?s)\\subsubsection\{{{heading}\}}.*?\\end\{{enumerate\}}"))
                    .expect("valid student block regex"),
                heading: Regex::new(&format!(r"^\\subsubsection\{{{heading}\}}(?:\\label\{{[^}}]*\}})?"))
                    .expect("valid student heading regex"),
                item: Regex::new(&format!(
                    r#"(?s){heading}\.\s+\((?P<period>[^)]*)\)\.?\\\\\s+Advised:\s+(?P<name>[^,\n]+),\s+"(?P<title>[^"]*)""#
                ))
                .expect("valid student item regex"),
            }
        })
        .collect()
});

fn layout(kind: StudentKind) -> &'static StudentLayout {
    let index = STUDENT_SECTIONS
        .iter()
        .position(|section| section.kind == kind)
        .unwrap_or_default();
    &LAYOUTS[index]
}

/// Span from the Directed Student Learning heading to the next `\subsection`
fn directed_learning_span(text: &str) -> Option<std::ops::Range<usize>> {
    let start = text.find(DIRECTED_LEARNING)?;
    let search_from = start + DIRECTED_LEARNING.len();
    let end = text[search_from..]
        .find(r"\subsection")
        .map(|pos| pos + search_from)
        .unwrap_or(text.len());
    Some(start..end)
}

/// Put the advising sub-sections in Ph.D., Master's, Postdoctoral,
/// Undergraduate order, keeping the subsection heading and label.
pub fn reorder_student_sections(text: &str) -> String {
    let Some(range) = directed_learning_span(text) else {
        warn!("directed student learning subsection not found, order left unchanged");
        return text.to_string();
    };
    let section = &text[range.clone()];

    let blocks: Vec<&str> = LAYOUTS
        .iter()
        .filter_map(|layout| layout.block.find(section))
        .map(|m| m.as_str())
        .collect();
    if blocks.is_empty() {
        warn!("no advising sub-sections found, order left unchanged");
        return text.to_string();
    }

    let after_heading = &section[DIRECTED_LEARNING.len()..];
    let label = SECTION_LABEL.find(after_heading).map_or("", |m| m.as_str());
    let rewritten = format!("{DIRECTED_LEARNING}{label}\n\n{}\n\n", blocks.join("\n\n"));

    splice(text, range, &rewritten)
}

/// Append `, "Title"` after `Advised: <name>` for every advisee of one
/// advising sub-section whose last name appears in its list. `titles` maps
/// dossier names (`Roe, A.`) to thesis titles from the matching dossier
/// section, so an advisee listed under two headings keeps both titles.
pub fn add_titles(text: &str, section: &StudentSection, titles: &BTreeMap<String, String>) -> String {
    let Some(block) = layout(section.kind).block.find(text) else {
        debug!(section = section.heading, "advising sub-section not found, titles not added");
        return text.to_string();
    };

    let mut rewritten = block.as_str().to_string();
    for (name, title) in titles {
        let last_name = name.split(',').next().unwrap_or(name).trim();
        if last_name.is_empty() {
            continue;
        }
        let Ok(pattern) = Regex::new(&format!(
            r#"(Advised:\s+[^,\n]*?\b{}\b)(,\s*")?"#,
            regex::escape(last_name)
        )) else {
            continue;
        };

        if !pattern.is_match(&rewritten) {
            debug!(advisee = name.as_str(), section = section.heading, "advisee not listed in the CV");
            continue;
        }
        // Straight quotes would end the title early when the item is reformatted
        let title = escape_specials(title).replace('"', "'");
        rewritten = pattern
            .replace_all(&rewritten, |caps: &Captures| {
                if caps.get(2).is_some() {
                    caps[0].to_string()
                } else {
                    format!("{}, \"{}\"", &caps[1], title)
                }
            })
            .into_owned();
    }

    splice(text, block.range(), &rewritten)
}

/// Rewrite one advising sub-section to `\item Name, "Title", period` items.
///
/// Items still lacking a title do not match and are dropped from the list.
/// When no item matches the sub-section is left alone, so running this on
/// already rewritten text changes nothing.
pub fn reformat_section(text: &str, section: &StudentSection) -> String {
    let layout = layout(section.kind);
    let Some(block) = layout.block.find(text) else {
        warn!(section = section.heading, "advising sub-section not found");
        return text.to_string();
    };

    let items: Vec<String> = layout
        .item
        .captures_iter(block.as_str())
        .map(|caps| {
            format!(
                "\\item {}, \"{}\", {}",
                caps["name"].trim(),
                caps["title"].trim(),
                caps["period"].trim()
            )
        })
        .collect();
    if items.is_empty() {
        warn!(section = section.heading, "no advisee items matched, sub-section left unchanged");
        return text.to_string();
    }

    let heading = layout
        .heading
        .find(block.as_str())
        .map_or(format!("\\subsubsection{{{}}}", section.heading), |m| {
            m.as_str().to_string()
        });
    let rewritten = format!(
        "{heading}\n\\begin{{enumerate}}\n\\def\\labelenumi{{\\arabic{{enumi}}.}}\n{}\n\\end{{enumerate}}",
        items.join("\n")
    );

    splice(text, block.range(), &rewritten)
}
