//! Safe minimal markdown-to-HTML renderer for AI-generated report previews.
//!
//! Converts untrusted, model-generated markdown (resume previews, change
//! logs) into displayable HTML through a fixed, ordered pipeline of pure
//! string transformations:
//!
//! escape → headings → bold → italic → lists → line breaks
//!
//! The grammar is deliberately minimal: `#`/`##`/`###` headings, `**bold**`,
//! `*italic*`, flat `* ` bullet lists, and paragraph breaks. There is no AST
//! and no CommonMark compliance; malformed markdown degrades to literal text
//! instead of failing. All HTML-significant characters in the input are
//! neutralized before any markup is synthesized, so the output is safe for
//! direct insertion into a page.
//!
//! # Example
//!
//! ```
//! use rezmark_renderer::render;
//!
//! let html = render("# Summary\n\nShipped **3 products**.");
//! assert_eq!(html, "<h1>Summary</h1>Shipped <strong>3 products</strong>.");
//! ```

mod escape;
mod heading;
mod inline;
mod linebreak;
mod list;
mod pass;

pub use escape::escape_html;
pub use pass::{Pass, pipeline};

/// Render untrusted markdown to safe HTML.
///
/// Pure and total: any input string produces an output string, the empty
/// string renders to the empty string, and the same input always yields the
/// same output. Callers may memoize freely.
#[must_use]
pub fn render(content: &str) -> String {
    pipeline()
        .iter()
        .fold(content.to_owned(), |text, pass| pass.run(&text))
}
