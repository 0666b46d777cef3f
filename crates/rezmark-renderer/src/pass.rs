//! The ordered transformation pipeline.
//!
//! Ordering is contractual, not accidental: escape runs first so no markup
//! pass ever sees raw `<` from the input; bold precedes italic because `*` is
//! a substring of `**`; lists are grouped before line breaks are inserted so
//! breaks never land inside list markup.

use crate::{escape, heading, inline, linebreak, list};

/// One stage of the pipeline: a named, pure, total text transformation.
pub struct Pass {
    /// Stable pass name, for inspection and tests.
    pub name: &'static str,
    apply: fn(&str) -> String,
}

impl Pass {
    /// Apply this pass to `input` and return the transformed text.
    #[must_use]
    pub fn run(&self, input: &str) -> String {
        (self.apply)(input)
    }
}

/// The fixed pipeline, in application order.
static PIPELINE: [Pass; 6] = [
    Pass {
        name: "escape",
        apply: escape::escape_html,
    },
    Pass {
        name: "heading",
        apply: heading::headings,
    },
    Pass {
        name: "bold",
        apply: inline::bold,
    },
    Pass {
        name: "italic",
        apply: inline::italic,
    },
    Pass {
        name: "list",
        apply: list::lists,
    },
    Pass {
        name: "linebreak",
        apply: linebreak::line_breaks,
    },
];

/// The ordered passes of the rendering pipeline.
#[must_use]
pub fn pipeline() -> &'static [Pass] {
    &PIPELINE
}
