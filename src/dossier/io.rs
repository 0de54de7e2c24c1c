//! File validation
//!
//! Checks that a path and its bytes look like a Word document before
//! handing them to docx-rs, so users get a readable message instead of an
//! XML parser error.

use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

use crate::error::DossierError;

/// Validates the file extension
pub(crate) fn validate_docx_path(file_path: &Path) -> Result<(), DossierError> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        return Err(DossierError::InvalidExtension {
            extension: extension.to_string(),
        });
    }

    Ok(())
}

/// Validates that the archive contains word/document.xml
pub(crate) fn validate_docx_bytes(bytes: &[u8]) -> Result<(), DossierError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(DossierError::Spreadsheet);
        }

        return Err(DossierError::MissingDocumentXml);
    }

    Ok(())
}
