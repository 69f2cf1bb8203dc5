//! Labels and slugs derived from documentation file paths.

use std::path::{Component, Path};

/// Derive a display label from a file name.
///
/// The extension is stripped, the stem is split on `-`, each segment gets an
/// upper-case first character and the segments are rejoined with `-`.
/// `dependency-injection.md` becomes `Dependency-Injection`.
pub fn derive_label(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");

    stem.split('-').map(capitalize).collect::<Vec<_>>().join("-")
}

/// Label used for an `llms.txt` index line.
///
/// Only the first hyphen of the derived label becomes a space.
pub fn index_label(path: &Path) -> String {
    derive_label(path).replacen('-', " ", 1)
}

/// URL slug for a document: its relative path without extension, joined with `/`.
pub fn doc_slug(relative: &Path) -> String {
    let without_ext = relative.with_extension("");

    without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derives_hyphenated_label() {
        assert_eq!(derive_label(Path::new("getting-started.md")), "Getting-Started");
        assert_eq!(
            derive_label(Path::new("concepts/dependency-injection.md")),
            "Dependency-Injection"
        );
    }

    #[test]
    fn derives_single_word_label() {
        assert_eq!(derive_label(Path::new("b/c.md")), "C");
        assert_eq!(derive_label(Path::new("routing.md")), "Routing");
    }

    #[test]
    fn keeps_empty_segments() {
        assert_eq!(derive_label(Path::new("a--b.md")), "A--B");
    }

    #[test]
    fn index_label_replaces_only_first_hyphen() {
        assert_eq!(index_label(Path::new("getting-started.md")), "Getting Started");
        assert_eq!(
            index_label(Path::new("api-reference-guide.md")),
            "Api Reference-Guide"
        );
        assert_eq!(index_label(Path::new("a.md")), "A");
    }

    #[test]
    fn slug_drops_extension() {
        assert_eq!(doc_slug(Path::new("concepts/routing.md")), "concepts/routing");
        assert_eq!(doc_slug(Path::new("index.md")), "index");
    }
}
