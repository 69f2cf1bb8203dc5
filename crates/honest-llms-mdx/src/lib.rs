//! Text transforms for markdown documentation files.
//!
//! This crate strips YAML front matter from markdown sources and derives
//! human-readable labels and URL slugs from documentation file paths.

pub mod frontmatter;
pub mod label;

pub use frontmatter::{has_front_matter, strip_front_matter};
pub use label::{derive_label, doc_slug, index_label};
