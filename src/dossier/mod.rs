//! Word dossier parsing and data structures
//!
//! This module reads a faculty dossier (.docx) into paragraph text and
//! tables that the section renderers work from.

pub(crate) mod cleanup;
pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use loader::load_dossier;
pub use models::*;
