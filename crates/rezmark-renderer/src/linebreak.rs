//! Line-break pass: convert remaining newlines to explicit breaks.
//!
//! Runs last. By this point headings and list containers each occupy a single
//! line, so every remaining newline is either paragraph separation or a block
//! boundary. Runs of breaks collapse to one, and a break touching a block
//! element (heading or list container) is suppressed: block elements provide
//! their own separation.

use std::sync::LazyLock;

use regex::Regex;

static BREAK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<br />){2,}").expect("invalid break-run regex"));

static BREAK_BEFORE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br />(<(?:h[1-3]|ul)>)").expect("invalid pre-block regex"));

static BREAK_AFTER_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(</(?:h[1-3]|ul)>)<br />").expect("invalid post-block regex"));

/// Replace newlines with `<br />`, collapse runs, and strip breaks adjacent
/// to block-element boundaries.
pub(crate) fn line_breaks(input: &str) -> String {
    let html = input.replace('\n', "<br />");
    let html = BREAK_RUN_RE.replace_all(&html, "<br />");
    let html = BREAK_BEFORE_BLOCK_RE.replace_all(&html, "$1");
    BREAK_AFTER_BLOCK_RE.replace_all(&html, "$1").into_owned()
}
