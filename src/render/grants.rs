//! Contracts, fellowships and grants

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::{RenderContext, noindent_line, section_heading};
use crate::dossier::{DossierTable, Record, field};
use crate::extract::{SectionMarkers, blocks};
use crate::latex::escape::escape_specials;

pub(crate) const GRANTS: SectionMarkers = SectionMarkers::new(
    "Projects, Grants, Commissions, and Contracts",
    "Projects, Grants, Commissions, and Contracts",
    "Pending",
);

/// Key of the award-detail tables that follow each grant block
const AMOUNT_KEY: &str = "Award Amount";

static AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\d{1,3}(?:,\d{3})*(?:\.\d{2})?").expect("valid amount regex"));

/// `Key: Value` lines of one grant block
fn block_fields(block: &str) -> Record {
    block
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

pub fn format_grant(grant: &Record) -> String {
    let amount = AMOUNT
        .find(field(grant, AMOUNT_KEY))
        .map(|m| format!(", {}", m.as_str()))
        .unwrap_or_default();

    let line = format!(
        "{} (Principal Investigator), ``{}'', Sponsored by {}{amount}. ({} - {}).",
        field(grant, "Principal Investigator"),
        field(grant, "Project Title"),
        field(grant, "Agency"),
        field(grant, "Start Date"),
        field(grant, "End Date"),
    );
    escape_specials(&line)
}

pub fn render(ctx: &RenderContext) -> String {
    let text = GRANTS.extract(&ctx.text);
    let mut detail_tables = ctx.dossier.tables_with_key(AMOUNT_KEY);

    let grants: Vec<Record> = blocks(&text)
        .filter(|block| *block != "Awarded")
        .map(|block| {
            let mut grant = block_fields(block);
            match detail_tables.next().map(DossierTable::key_values) {
                Some(details) => grant.extend(details),
                None => warn!(section = GRANTS.name, "no award detail table for grant"),
            }
            grant
        })
        .collect();

    if grants.is_empty() {
        return String::new();
    }
    debug!(count = grants.len(), "rendering grants");

    let mut out = section_heading("CONTRACT, FELLOWSHIPS, GRANTS AND SPONSORED RESEARCH");
    for grant in &grants {
        out.push_str(&noindent_line(&format_grant(grant)));
    }
    out
}
