//! Heading pass: line-anchored `#` markers.
//!
//! A line starting with one to three `#` characters followed by a single
//! space becomes a heading of matching level. The marker and its separating
//! space are stripped; everything else on the line is kept as content.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Up to three leading `#`s count; the space after them is mandatory.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,3}) (.*)$").expect("invalid heading regex"));

/// Convert heading-marked lines to `<h1>`–`<h3>` elements.
pub(crate) fn headings(input: &str) -> String {
    HEADING_RE
        .replace_all(input, |caps: &Captures| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
        .into_owned()
}
