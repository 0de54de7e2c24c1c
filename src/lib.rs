//! cvtex: LaTeX CVs from a faculty activity dossier
//!
//! This library reads a Word (.docx) activity dossier and either builds a
//! complete LaTeX CV from it or tidies a CV that pandoc already produced
//! from the same dossier.

pub mod config;
pub mod dossier;
pub mod error;
pub mod extract;
pub mod latex;
pub mod pipeline;
pub mod render;
pub mod rewrite;

/// Output format for the dossier summary
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

// Re-export commonly used types
pub use config::Config;
pub use dossier::{Dossier, load_dossier};
pub use error::{ConfigError, DossierError};
pub use pipeline::{DossierSummary, build_cv, clean_cv, summarize};
