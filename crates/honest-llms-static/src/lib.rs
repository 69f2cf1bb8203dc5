//! llms.txt generator for the HonestJS documentation.
//!
//! Collects markdown documents from a docs directory and writes an index of
//! links plus full and abridged text bundles for language models.

pub mod builder;
pub mod source;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, LlmsBuilder};
pub use source::{DocSource, FsSource, MemorySource};
pub use templates::{IndexContext, IndexEntry, TemplateEngine};
