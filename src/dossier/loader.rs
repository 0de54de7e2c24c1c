//! Dossier loading
//!
//! Walks the body of a .docx once, collecting top-level paragraph text in
//! order and every table. Paragraphs inside tables only show up in the
//! table data, never in the paragraph list.

use std::path::Path;
use tracing::debug;

use super::cleanup::normalize_text;
use super::io::{validate_docx_bytes, validate_docx_path};
use super::models::*;
use super::parsing::formatting::extract_paragraph_text;
use super::parsing::table::extract_table_data;
use crate::error::DossierError;

/// Load and parse a Word dossier from disk
pub fn load_dossier(file_path: &Path) -> Result<Dossier, DossierError> {
    validate_docx_path(file_path)?;

    let bytes = std::fs::read(file_path)?;
    let dossier = Dossier::from_bytes(&bytes)?;

    debug!(
        path = %file_path.display(),
        paragraphs = dossier.paragraphs.len(),
        tables = dossier.tables.len(),
        "loaded dossier"
    );
    Ok(dossier)
}

impl Dossier {
    /// Parse a dossier already held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DossierError> {
        validate_docx_bytes(bytes)?;
        let docx = docx_rs::read_docx(bytes)?;

        let mut paragraphs = Vec::new();
        let mut tables = Vec::new();

        for child in &docx.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(para) => {
                    let text = normalize_text(&extract_paragraph_text(para));
                    paragraphs.push(text.trim().to_string());
                }
                docx_rs::DocumentChild::Table(table) => {
                    tables.push(extract_table_data(table));
                }
                _ => {}
            }
        }

        Ok(Dossier { paragraphs, tables })
    }
}
