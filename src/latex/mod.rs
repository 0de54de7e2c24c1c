//! LaTeX building blocks shared by the build and clean pipelines

pub mod authors;
pub mod dates;
pub mod document;
pub mod escape;
pub mod template;

pub use authors::AuthorMatcher;
pub use template::Placeholder;
