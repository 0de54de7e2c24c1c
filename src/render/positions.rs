//! Professional positions from the employment table

use tracing::{debug, warn};

use super::{RenderContext, dated_line, noindent_line, section_heading, subsection_heading};
use crate::dossier::{Record, field};
use crate::latex::dates::year_range;
use crate::latex::escape::escape_specials;

const TITLE_COLUMN: &str = "Rank or Title";
const EMPLOYER_COLUMN: &str = "Previous Employers";
const DATES_COLUMN: &str = "Dates";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionCategory {
    Academic,
    Government,
    Professional,
}

impl PositionCategory {
    fn heading(self) -> &'static str {
        match self {
            PositionCategory::Academic => "Academic",
            PositionCategory::Government => "Government",
            PositionCategory::Professional => "Professional",
        }
    }

    /// Professorships are academic, employers matching a government keyword
    /// are government, everything else is professional.
    pub fn classify(title: &str, employer: &str, government_keywords: &[String]) -> Self {
        if title.contains("Associate Professor") || title.contains("Assistant Professor") {
            PositionCategory::Academic
        } else if government_keywords
            .iter()
            .any(|keyword| employer.contains(keyword.as_str()))
        {
            PositionCategory::Government
        } else {
            PositionCategory::Professional
        }
    }
}

pub fn render(ctx: &RenderContext) -> String {
    let Some(table) = ctx.dossier.table_with_column(TITLE_COLUMN) else {
        warn!(section = "Professional Positions", "employment table not found in dossier");
        return String::new();
    };

    let keywords = &ctx.config.positions.government_keywords;
    let mut grouped: Vec<(PositionCategory, Vec<Record>)> = vec![
        (PositionCategory::Academic, Vec::new()),
        (PositionCategory::Government, Vec::new()),
        (PositionCategory::Professional, Vec::new()),
    ];

    for record in table.records() {
        let category = PositionCategory::classify(
            field(&record, TITLE_COLUMN),
            field(&record, EMPLOYER_COLUMN),
            keywords,
        );
        if let Some((_, entries)) = grouped.iter_mut().find(|(c, _)| *c == category) {
            entries.push(record);
        }
    }

    let mut out = section_heading("PROFESSIONAL POSITIONS");
    for (category, entries) in &grouped {
        if entries.is_empty() {
            continue;
        }
        debug!(category = category.heading(), count = entries.len(), "rendering positions");

        out.push_str(&subsection_heading(category.heading()));
        for entry in entries {
            let title = field(entry, TITLE_COLUMN).replace(" (Courtesy)", "");
            let employer = field(entry, EMPLOYER_COLUMN).split_whitespace().collect::<Vec<_>>().join(" ");
            let title_and_employer = escape_specials(&format!("{}, {}", title.trim(), employer));
            let dates = year_range(field(entry, DATES_COLUMN), ctx.today);

            match category {
                PositionCategory::Academic => {
                    out.push_str(&noindent_line(&format!(
                        "{title_and_employer}, \\textbf{{{dates}}}"
                    )));
                }
                _ => out.push_str(&dated_line(&title_and_employer, &dates)),
            }
        }
    }

    out
}
