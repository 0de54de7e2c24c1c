//! Table extraction
//!
//! Cells keep their paragraph structure (joined with `\n`) because dossier
//! column headers span several lines and the records are keyed by the exact
//! header text.

use super::super::cleanup::normalize_text;
use super::super::models::*;
use super::formatting::{extract_paragraph_text, is_bold_paragraph};

/// Extract table data from a docx-rs Table
pub(crate) fn extract_table_data(table: &docx_rs::Table) -> DossierTable {
    let mut rows = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut row_cells = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            row_cells.push(extract_cell(cell));
        }

        if !row_cells.is_empty() {
            rows.push(row_cells);
        }
    }

    DossierTable { rows }
}

fn extract_cell(cell: &docx_rs::TableCell) -> TableCell {
    let mut paragraphs = Vec::new();
    let mut bold = None;

    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(para) = content {
            // Header detection only looks at the first paragraph
            if bold.is_none() {
                bold = Some(is_bold_paragraph(para));
            }
            paragraphs.push(normalize_text(&extract_paragraph_text(para)));
        }
    }

    TableCell::new(paragraphs.join("\n").trim().to_string()).with_bold(bold.unwrap_or(true))
}
