//! Front matter detection and removal.

use std::sync::LazyLock;

use regex::Regex;

/// Leading `---` block, optionally preceded by blank lines.
///
/// Both delimiters must be lines consisting of exactly `---`, and the closing
/// delimiter must be followed by a newline.
static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(?:[ \t]*\r?\n)*---\r?\n(?s:.*?\r?\n)?---\r?\n")
        .expect("Invalid front matter regex")
});

/// Remove a leading front matter block from markdown content.
///
/// Returns the remainder of the document after the closing delimiter and its
/// newline. Content without a well-formed leading block, including an unclosed
/// one, is returned unchanged.
pub fn strip_front_matter(source: &str) -> &str {
    match FRONT_MATTER_RE.find(source) {
        Some(m) => &source[m.end()..],
        None => source,
    }
}

/// Check whether the content starts with a well-formed front matter block.
pub fn has_front_matter(source: &str) -> bool {
    FRONT_MATTER_RE.is_match(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_valid_front_matter() {
        let source = r#"---
title: Routing
description: How requests reach controllers
---
# Routing

Body text.
"#;

        assert_eq!(strip_front_matter(source), "# Routing\n\nBody text.\n");
    }

    #[test]
    fn strips_empty_block() {
        assert_eq!(strip_front_matter("---\n---\nHello"), "Hello");
    }

    #[test]
    fn skips_leading_blank_lines() {
        assert_eq!(strip_front_matter("\n  \n---\ntitle: A\n---\nHello"), "Hello");
    }

    #[test]
    fn keeps_content_after_block_verbatim() {
        let source = "---\ntitle: A\n---\n\n\nHello\n---\nmore\n";

        assert_eq!(strip_front_matter(source), "\n\nHello\n---\nmore\n");
    }

    #[test]
    fn handles_crlf_line_endings() {
        assert_eq!(strip_front_matter("---\r\ntitle: A\r\n---\r\nHello"), "Hello");
    }

    #[test]
    fn leaves_content_without_front_matter() {
        let source = "# Just Markdown\n\nNo front matter here.";

        assert_eq!(strip_front_matter(source), source);
        assert!(!has_front_matter(source));
    }

    #[test]
    fn ignores_rule_later_in_body() {
        let source = "# Title\n\n---\nnot: front matter\n---\nText";

        assert_eq!(strip_front_matter(source), source);
    }

    #[test]
    fn leaves_unclosed_block() {
        let source = "---\ntitle: Test\n# No closing";

        assert_eq!(strip_front_matter(source), source);
        assert!(!has_front_matter(source));
    }

    #[test]
    fn requires_newline_after_closing_delimiter() {
        let source = "---\ntitle: Test\n---";

        assert_eq!(strip_front_matter(source), source);
    }

    #[test]
    fn requires_exact_delimiter_lines() {
        let source = "----\ntitle: Test\n----\nBody";

        assert_eq!(strip_front_matter(source), source);
    }

    #[test]
    fn stripping_is_idempotent() {
        let source = "---\ntitle: A\n---\nHello\n";
        let once = strip_front_matter(source);

        assert_eq!(strip_front_matter(once), once);
    }
}
