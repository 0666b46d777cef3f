//! List pass: group consecutive list-marked lines into one container.
//!
//! A line starting with `* ` at column 0 is a list item. A maximal run of
//! consecutive item lines becomes exactly one `<ul>` with one `<li>` per
//! source line, emitted as a single output line so the line-break pass never
//! inserts breaks inside list markup. N consecutive item lines must yield one
//! container with N items, never N single-item containers.

/// Classification of a single source line.
enum Line<'a> {
    /// `* ` item; holds the text after the marker.
    Item(&'a str),
    /// Anything else, passed through verbatim.
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    match line.strip_prefix("* ") {
        Some(item) => Line::Item(item),
        None => Line::Text(line),
    }
}

/// Convert runs of `* ` lines to `<ul>` containers.
pub(crate) fn lists(input: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut items: Vec<&str> = Vec::new();

    for line in input.split('\n') {
        match classify(line) {
            Line::Item(item) => items.push(item),
            Line::Text(text) => {
                flush_items(&mut out, &mut items);
                out.push(text.to_owned());
            }
        }
    }
    flush_items(&mut out, &mut items);

    out.join("\n")
}

/// Emit a pending run of items as one `<ul>` block.
fn flush_items(out: &mut Vec<String>, items: &mut Vec<&str>) {
    if items.is_empty() {
        return;
    }
    let mut block = String::from("<ul>");
    for item in items.drain(..) {
        block.push_str("<li>");
        block.push_str(item);
        block.push_str("</li>");
    }
    block.push_str("</ul>");
    out.push(block);
}
