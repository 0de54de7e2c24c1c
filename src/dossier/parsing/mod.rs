//! Dossier parsing utilities
//!
//! Specialized extraction functions for paragraphs, runs and tables.

pub(crate) mod formatting;
pub(crate) mod table;
