//! Publications and presentations

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use super::{RenderContext, enumerate, section_heading, subsection_heading};
use crate::extract::{SectionMarkers, blocks};
use crate::latex::authors::underline_students;
use crate::latex::escape::{accents_to_latex, escape_specials, strip_item_number};

pub(crate) const JOURNAL: SectionMarkers =
    SectionMarkers::new("Journal Article", "Journal Article", "Parts of Books");
pub(crate) const CONFERENCE: SectionMarkers = SectionMarkers::new(
    "Refereed Conference Proceedings",
    "Refereed Conference Proceedings",
    "Other Works",
);
pub(crate) const PREPRINT: SectionMarkers = SectionMarkers::new(
    "Pre-Print",
    "Pre-Print",
    "Manuscripts Submitted for Publication",
);

pub(crate) const PRESENTATION_SECTIONS: [SectionMarkers; 7] = [
    SectionMarkers::new("Demonstrations", "Demonstrations", "Keynotes/Plenary Addresses"),
    SectionMarkers::new(
        "Keynotes/Plenary Addresses",
        "Keynotes/Plenary Addresses",
        "Oral Presentations",
    ),
    SectionMarkers::new("Oral Presentations", "Oral Presentations", "Panels"),
    SectionMarkers::new("Panels", "Panels", "Posters"),
    SectionMarkers::new("Posters", "Posters", "Posters and Oral Presentations"),
    SectionMarkers::new(
        "Posters and Oral Presentations",
        "Posters and Oral Presentations",
        "Seminars",
    ),
    SectionMarkers::new(
        "Seminars",
        "Seminars",
        "Description of Outreach or Other Activities in which there was Significant Use of Candidate's Expertise",
    ),
];

/// Sub-headings that show up inside the presentation sections
const PRESENTATION_HEADINGS: [&str; 7] = [
    "Oral Presentations",
    "Panels",
    "Posters",
    "Seminars",
    "Posters and Oral Presentations",
    "and Workshops",
    "Invited Keynote",
];

static DOI: Lazy<Regex> = Lazy::new(|| Regex::new(r"DOI:\s*(\S+)").expect("valid DOI regex"));

/// Conference entries carry a session code like `(IMECE-12345)` before the DOI
static SESSION_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*?)\(\w+(?:-\d+)+\).*?(DOI:\s*\S+)").expect("valid session code regex")
});

/// One publication block as an enumerate item body
pub fn format_entry(ctx: &RenderContext, publication: &str) -> String {
    let (body, doi) = match DOI.captures(publication) {
        Some(caps) => {
            let doi = caps[1].trim_end_matches('.').to_string();
            (DOI.replace(publication, "").into_owned(), Some(doi))
        }
        None => (publication.to_string(), None),
    };

    let mut entry = escape_specials(body.trim());
    if let Some(author) = &ctx.author {
        entry = author.bold(&entry);
    }
    entry = accents_to_latex(&entry);
    entry = underline_students(&entry);

    if let Some(doi) = doi {
        entry = format!("{entry} Published. \\url{{https://doi.org/{doi}}}");
    }

    strip_item_number(&format!("\\item {entry}"))
        .trim_start_matches("\\item")
        .trim()
        .to_string()
}

fn journal_items(ctx: &RenderContext) -> Vec<String> {
    let text = JOURNAL.extract(&ctx.text);
    blocks(&text).map(|block| format_entry(ctx, block)).collect()
}

fn conference_items(ctx: &RenderContext) -> Vec<String> {
    let text = CONFERENCE.extract(&ctx.text);
    blocks(&text)
        .map(|block| match SESSION_CODE.captures(block) {
            Some(caps) => format!("{} {}", caps[1].trim(), &caps[2]),
            None => block.to_string(),
        })
        .map(|block| format_entry(ctx, &block))
        .collect()
}

fn preprint_items(ctx: &RenderContext) -> Vec<String> {
    let text = PREPRINT.extract(&ctx.text);
    blocks(&text)
        .filter(|block| *block != "Technical Report")
        .map(|block| format_entry(ctx, block))
        .collect()
}

pub fn render(ctx: &RenderContext) -> String {
    let groups = [
        ("Journal Articles", journal_items(ctx)),
        ("Conference Proceedings", conference_items(ctx)),
        ("Preprints and Technical Reports", preprint_items(ctx)),
    ];

    if groups.iter().all(|(_, items)| items.is_empty()) {
        return String::new();
    }

    let mut out = section_heading("PUBLICATIONS");
    out.push_str("\\textit{Mentored student and postdoc co-authors are underlined.}\n");
    for (heading, items) in &groups {
        debug!(group = heading, count = items.len(), "rendering publications");
        if items.is_empty() {
            continue;
        }
        out.push_str(&subsection_heading(heading));
        out.push_str(&enumerate(items));
    }
    out
}

fn is_presentation_entry(line: &str) -> bool {
    !line.is_empty() && !PRESENTATION_HEADINGS.contains(&line) && !line.contains(", and Workshops")
}

/// Presentation lines from every presentation section, de-duplicated
pub fn render_presentations(ctx: &RenderContext) -> String {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for section in &PRESENTATION_SECTIONS {
        let text = section.extract(&ctx.text);
        for line in text.lines().map(str::trim) {
            if is_presentation_entry(line) && seen.insert(line.to_string()) {
                items.push(format_entry(ctx, line));
            }
        }
    }

    if items.is_empty() {
        return String::new();
    }
    debug!(count = items.len(), "rendering presentations");

    let mut out = section_heading("PRESENTATIONS");
    out.push_str(&enumerate(&items));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::render::test_support::{dossier_from_text, today};

    fn config_with_author() -> Config {
        let mut config = Config::default();
        config.person.author_patterns = vec!["Doe, J. Q.".to_string(), "Doe,".to_string()];
        config
    }

    #[test]
    fn test_format_entry() {
        let dossier = dossier_from_text("");
        let config = config_with_author();
        let ctx = RenderContext::new(&dossier, &config, today());

        let entry = format_entry(
            &ctx,
            "12. Roe, A. (Primary Author - Graduate Student), Doe, J. Q. Bone & Muscle in Pérez model. DOI: 10.1000/xyz.",
        );
        assert_eq!(
            entry,
            "\\underline{Roe, A.}, \\textbf{Doe, J. Q.} Bone \\& Muscle in P\\'erez model. Published. \\url{https://doi.org/10.1000/xyz}"
        );
    }

    #[test]
    fn test_publication_groups() {
        let dossier = dossier_from_text(
            "Journal Article\n\
             \n\
             1. Doe, J. Q. First paper.\n\
             \n\
             2. Doe, J. Q. Second paper.\n\
             \n\
             Parts of Books\n\
             Refereed Conference Proceedings\n\
             \n\
             Doe, J. Q. Talk paper. (IMECE-2019-1234). Proceedings. DOI: 10.1/abc\n\
             \n\
             Other Works\n\
             Pre-Print\n\
             \n\
             Technical Report\n\
             \n\
             Doe, J. Q. Preprint paper.\n\
             \n\
             Manuscripts Submitted for Publication",
        );
        let config = config_with_author();
        let ctx = RenderContext::new(&dossier, &config, today());

        let out = render(&ctx);
        assert!(out.contains("\\subsection*{Journal Articles}"));
        assert!(out.contains("\\item \\textbf{Doe, J. Q.} First paper."));
        assert!(out.contains(
            "\\item \\textbf{Doe, J. Q.} Talk paper. Published. \\url{https://doi.org/10.1/abc}"
        ));
        assert!(out.contains("\\item \\textbf{Doe, J. Q.} Preprint paper."));
        assert!(!out.contains("\\item Technical Report"));
        assert!(out.contains("co-authors are underlined"));
    }

    #[test]
    fn test_presentations_are_deduplicated() {
        let dossier = dossier_from_text(
            "Oral Presentations\n\
             Doe, J. Q. Keynote on impact.\n\
             Panels\n\
             Posters\n\
             Doe, J. Q. Keynote on impact.\n\
             Roe, A. Poster on helmets.\n\
             Posters and Oral Presentations\n\
             Seminars\n\
             Description of Outreach or Other Activities in which there was Significant Use of Candidate's Expertise",
        );
        let config = config_with_author();
        let ctx = RenderContext::new(&dossier, &config, today());

        let out = render_presentations(&ctx);
        assert_eq!(out.matches("Keynote on impact").count(), 1);
        assert!(out.contains("Poster on helmets"));
        assert!(out.contains("\\section*{PRESENTATIONS}"));
    }

    #[test]
    fn test_no_publications_renders_nothing() {
        let dossier = dossier_from_text("nothing");
        let config = Config::default();
        let ctx = RenderContext::new(&dossier, &config, today());
        assert_eq!(render(&ctx), "");
        assert_eq!(render_presentations(&ctx), "");
    }
}
