//! Inline passes: bold and italic spans.
//!
//! Bold must run before italic: `*` is a substring of `**`, so the longer
//! token is consumed first and the italic pass never sees the double
//! asterisks of a bold span. Both patterns are non-greedy and stay within a
//! single line (`.` does not cross `\n`). An unmatched `*` is left as a
//! literal asterisk.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("invalid bold regex"));

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("invalid italic regex"));

/// Convert `**text**` spans to `<strong>` elements.
pub(crate) fn bold(input: &str) -> String {
    BOLD_RE.replace_all(input, "<strong>$1</strong>").into_owned()
}

/// Convert `*text*` spans to `<em>` elements.
///
/// The column-0 `* ` list marker belongs to the list pass; on list-marked
/// lines only the text after the marker is considered, so an item containing
/// emphasis does not lose its bullet.
pub(crate) fn italic(input: &str) -> String {
    let lines: Vec<String> = input
        .split('\n')
        .map(|line| {
            if let Some(rest) = line.strip_prefix("* ") {
                format!("* {}", ITALIC_RE.replace_all(rest, "<em>$1</em>"))
            } else {
                ITALIC_RE.replace_all(line, "<em>$1</em>").into_owned()
            }
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(bold("**hi**"), "<strong>hi</strong>");
        assert_eq!(bold("a **b** c"), "a <strong>b</strong> c");
    }

    #[test]
    fn test_bold_non_greedy() {
        assert_eq!(
            bold("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_bold_does_not_cross_lines() {
        assert_eq!(bold("**a\nb**"), "**a\nb**");
    }

    #[test]
    fn test_unmatched_double_asterisk_literal() {
        assert_eq!(bold("**open"), "**open");
    }

    #[test]
    fn test_italic() {
        assert_eq!(italic("*hi*"), "<em>hi</em>");
        assert_eq!(italic("with *10 years* of work"), "with <em>10 years</em> of work");
    }

    #[test]
    fn test_italic_non_greedy() {
        assert_eq!(italic("*a* and *b*"), "<em>a</em> and <em>b</em>");
    }

    #[test]
    fn test_unmatched_single_asterisk_literal() {
        assert_eq!(italic("5 * 3"), "5 * 3");
        assert_eq!(italic("*open"), "*open");
    }

    #[test]
    fn test_list_marker_not_consumed() {
        assert_eq!(
            italic("* item with *emphasis* inside"),
            "* item with <em>emphasis</em> inside"
        );
        // A bare item line has a single asterisk and stays untouched.
        assert_eq!(italic("* Led teams\n* Shipped products"), "* Led teams\n* Shipped products");
    }

    #[test]
    fn test_bold_then_italic() {
        let text = "**x** and *y*";
        let after_bold = bold(text);
        assert_eq!(after_bold, "<strong>x</strong> and *y*");
        assert_eq!(italic(&after_bold), "<strong>x</strong> and <em>y</em>");
    }

    #[test]
    fn test_empty_spans() {
        assert_eq!(bold("****"), "<strong></strong>");
        assert_eq!(italic("**"), "<em></em>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(bold(""), "");
        assert_eq!(italic(""), "");
    }
}
