//! Error types for dossier loading and configuration
//!
//! Missing sections and markers are not errors: transforms log a warning and
//! hand back their input unchanged. Only failures that make the run
//! meaningless (unreadable input, corrupt archives, bad config) end up here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DossierError {
    #[error(
        "Invalid file format. Expected .docx file, got .{extension}\n\
         Note: cvtex only reads Word .docx dossiers (not .doc, .xlsx, .zip, etc.)"
    )]
    InvalidExtension { extension: String },

    #[error("This appears to be an Excel file (.xlsx).\ncvtex only reads Word documents (.docx).")]
    Spreadsheet,

    #[error(
        "Invalid .docx file: missing word/document.xml\n\
         This file may be corrupted or is not a valid Word document."
    )]
    MissingDocumentXml,

    #[error("failed to open archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to parse Word document: {0}")]
    Docx(#[from] docx_rs::ReaderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
