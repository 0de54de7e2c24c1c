//! Publications: ordering, the owner's name in bold, mentored co-authors

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use tracing::{debug, warn};

use super::{heading_pattern, splice};
use crate::extract::markers::span;
use crate::extract::students::STUDENT_SECTIONS;
use crate::latex::AuthorMatcher;

const PUBLICATIONS: &str = r"\subsection{Publications}";
const PRESENTATIONS: &str = r"\subsection{Presentations}";
const PUBLICATIONS_LABELLED: &str = r"\subsection{Publications}\label{publications}";
const PRESENTATIONS_LABELLED: &str = r"\subsection{Presentations}\label{presentations}";
const JOURNAL_HEADING: &str = r"\subsubsection{Journal Article}\label{journal-article}";
const SUBSUBSECTION: &str = r"\subsubsection{";

/// Publication kinds in CV order; anything else follows in its original order
pub const PUBLICATION_ORDER: [&str; 4] = [
    "Journal Article",
    "Conference Proceeding",
    "Book Chapters",
    "Other",
];

pub const MENTORED_NOTE: &str = "\n\\textit{Mentored student and postdoc co-authors are underlined.}\n";

static SUBSUBSECTION_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\\subsubsection\{([^}]*)\}").expect("valid subsubsection regex"));

static ADVISEE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\item\s+(.*?),\s+``").expect("valid advisee name regex"));

/// Student sub-section headings with pandoc's line wrapping allowed
static STUDENT_HEADINGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    STUDENT_SECTIONS
        .iter()
        .map(|section| {
            Regex::new(&format!(r"\\subsubsection\{{{}\}}", heading_pattern(section.heading)))
                .expect("valid student heading regex")
        })
        .collect()
});

/// `\subsubsection` chunks of a span: each runs to the next heading or the span end
fn subsubsections(section: &str) -> Vec<std::ops::Range<usize>> {
    let starts: Vec<usize> = section.match_indices(SUBSUBSECTION).map(|(pos, _)| pos).collect();
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| start..starts.get(i + 1).copied().unwrap_or(section.len()))
        .collect()
}

/// Put the publication sub-sections in the order of [`PUBLICATION_ORDER`]
pub fn reorder_publications(text: &str) -> String {
    let Some(start) = text.find(PUBLICATIONS) else {
        warn!("publications subsection not found, order left unchanged");
        return text.to_string();
    };
    let Some(end) = text[start..].find(PRESENTATIONS).map(|pos| pos + start) else {
        warn!("presentations subsection not found, order left unchanged");
        return text.to_string();
    };

    let section = &text[start..end];
    let chunks = subsubsections(section);
    let (Some(first), Some(last)) = (chunks.first(), chunks.last()) else {
        return text.to_string();
    };
    let body = first.start..last.end;

    let titled: Vec<(&str, &str)> = chunks
        .iter()
        .map(|range| {
            let chunk = &section[range.clone()];
            let title = SUBSUBSECTION_TITLE
                .captures(chunk)
                .and_then(|caps| caps.get(1))
                .map_or("", |m| m.as_str());
            (title, chunk)
        })
        .collect();

    let mut ordered: Vec<&str> = Vec::with_capacity(titled.len());
    for kind in PUBLICATION_ORDER {
        ordered.extend(titled.iter().filter(|(title, _)| *title == kind).map(|(_, chunk)| *chunk));
    }
    ordered.extend(
        titled
            .iter()
            .filter(|(title, _)| !PUBLICATION_ORDER.contains(title))
            .map(|(_, chunk)| *chunk),
    );

    let reordered = splice(section, body, &ordered.concat());
    splice(text, start..end, &reordered)
}

/// Bold the owner's name between the Publications and Presentations headings
pub fn bold_author(text: &str, author: &AuthorMatcher) -> String {
    let (Some(start), Some(end)) = (text.find(PUBLICATIONS_LABELLED), text.find(PRESENTATIONS_LABELLED)) else {
        warn!("publications or presentations subsection not found, names left unchanged");
        return text.to_string();
    };
    if end < start {
        warn!("presentations precede publications, names left unchanged");
        return text.to_string();
    }

    splice(text, start..end, &author.bold(&text[start..end]))
}

/// Last names of the advisees listed as `\item Name, ``Title''` in the
/// student sub-sections.
pub fn mentored_last_names(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for heading in STUDENT_HEADINGS.iter() {
        let Some(found) = heading.find(text) else {
            continue;
        };
        let end = text[found.end()..]
            .find(SUBSUBSECTION)
            .map(|pos| pos + found.end())
            .unwrap_or(text.len());

        for caps in ADVISEE_NAME.captures_iter(&text[found.start()..end]) {
            if let Some(last) = caps[1].split_whitespace().last() {
                names.insert(last.trim_end_matches(',').to_string());
            }
        }
    }

    names
}

/// Underline mentored co-authors in the Publications subsection and add a
/// note above the journal articles.
pub fn underline_mentored_authors(text: &str) -> String {
    let names = mentored_last_names(text);
    let Some(range) = span(text, PUBLICATIONS, r"\subsection{") else {
        warn!("publications subsection not found, co-authors left unchanged");
        return text.to_string();
    };
    debug!(count = names.len(), "mentored co-authors");

    let mut section = text[range.clone()].to_string();
    match section.find(JOURNAL_HEADING) {
        Some(pos) => section.insert_str(pos, MENTORED_NOTE),
        None => warn!("journal article heading not found, mentored note not added"),
    }

    for name in &names {
        let Ok(pattern) = Regex::new(&format!(
            r"(\\underline\{{)?\b({}\b(?:, [A-Z]\.(?: ?[A-Z]\.)?)?)",
            regex::escape(name)
        )) else {
            continue;
        };
        section = pattern
            .replace_all(&section, |caps: &Captures| {
                if caps.get(1).is_some() {
                    caps[0].to_string()
                } else {
                    format!(r"\underline{{{}}}", &caps[2])
                }
            })
            .into_owned();
    }

    splice(text, range, &section)
}
