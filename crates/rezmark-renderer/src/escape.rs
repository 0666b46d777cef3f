//! Escape pass: neutralize HTML-significant characters.
//!
//! Runs exactly once, before any markup-producing pass, so no later pass can
//! ever emit a tag derived from un-escaped input. Ampersands that already
//! begin a well-formed character entity are preserved, which keeps the full
//! pipeline from double-escaping text that has been rendered before.

/// Longest entity body we recognize; `&CounterClockwiseContourIntegral;`
/// is 31 characters between `&` and `;`.
const MAX_ENTITY_BODY: usize = 32;

/// Escape HTML-significant characters in `input`.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with character entities. An `&` that
/// starts a well-formed entity (`&name;`, `&#39;`, `&#x27;`) is left as-is.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '&' => {
                if let Some(len) = entity_len(&input[i..]) {
                    out.push_str(&input[i..i + len]);
                    // Entities are ASCII, one byte per char.
                    for _ in 1..len {
                        chars.next();
                    }
                } else {
                    out.push_str("&amp;");
                }
            }
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Byte length of a well-formed character entity at the start of `s`
/// (including the `&` and `;`), or `None` if `s` does not start with one.
fn entity_len(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('&')?;
    let body_end = rest
        .char_indices()
        .take(MAX_ENTITY_BODY + 1)
        .find(|&(_, c)| c == ';')
        .map(|(i, _)| i)?;
    let body = &rest[..body_end];

    let valid = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit())
    } else if let Some(dec) = body.strip_prefix('#') {
        !dec.is_empty() && dec.bytes().all(|b| b.is_ascii_digit())
    } else {
        !body.is_empty() && body.bytes().all(|b| b.is_ascii_alphabetic())
    };

    valid.then_some(body.len() + 2)
}
