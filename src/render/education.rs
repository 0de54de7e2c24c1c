//! Education from the degrees table

use tracing::warn;

use super::{RenderContext, dated_line, section_heading};
use crate::dossier::field;
use crate::latex::dates::year_range;
use crate::latex::escape::{accents_to_latex, escape_specials};

const INSTITUTION_COLUMN: &str = "Name and City/State of Institution";
const DEGREE_COLUMN: &str = "Degrees - Dates";
const MAJOR_COLUMN: &str = "Major Subjects";

pub fn render(ctx: &RenderContext) -> String {
    let Some(table) = ctx.dossier.table_with_column(DEGREE_COLUMN) else {
        warn!(section = "Education", "degrees table not found in dossier");
        return String::new();
    };

    let mut out = section_heading("EDUCATION");

    for record in table.records() {
        // "Name, Street, City, State" keeps the first two parts
        let parts: Vec<&str> = field(&record, INSTITUTION_COLUMN).split(',').collect();
        let institution = if parts.len() >= 4 {
            format!("{}, {}", parts[0].trim(), parts[1].trim())
        } else {
            parts[0].trim().to_string()
        };

        let (degree, dates) = match field(&record, DEGREE_COLUMN).split_once(',') {
            Some((degree, dates)) => (degree.trim(), dates.trim()),
            None => ("", ""),
        };
        let major = field(&record, MAJOR_COLUMN).trim();
        let label = if degree.to_lowercase().contains("post-doctoral") {
            "Concentration:"
        } else {
            "Major:"
        };

        let left = accents_to_latex(&escape_specials(&format!("{degree}, {institution}")));
        out.push_str(&dated_line(&left, &year_range(dates, ctx.today)));
        out.push_str(&format!(
            "\\noindent \\parbox[t]{{0.8\\linewidth}}{{\\raggedright \\textbf{{{label}}} {}}} \\\\\n",
            accents_to_latex(&escape_specials(major))
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::render::test_support::{dossier_from_text, table, today};

    #[test]
    fn test_degrees_and_concentration() {
        let mut dossier = dossier_from_text("");
        dossier.tables.push(table(
            &[INSTITUTION_COLUMN, DEGREE_COLUMN, MAJOR_COLUMN],
            &[
                &["Johns Hopkins University, 3400 N Charles St, Baltimore, MD", "Post-Doctoral, 2008 - 2010", "Biomechanics"],
                &["Penn State, University Park", "Ph.D., 2007", "Engineering Mechanics"],
            ],
        ));
        let config = Config::default();
        let ctx = RenderContext::new(&dossier, &config, today());

        let out = render(&ctx);
        assert!(out.contains("{\\raggedright Post-Doctoral, Johns Hopkins University, 3400 N Charles St}"));
        assert!(out.contains("\\textbf{Concentration:} Biomechanics"));
        assert!(out.contains("{\\raggedright Ph.D., Penn State}"));
        assert!(out.contains("{\\raggedleft 2007}"));
        assert!(out.contains("\\textbf{Major:} Engineering Mechanics"));
    }
}
