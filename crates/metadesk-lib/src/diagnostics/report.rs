//! Plain-text error report with a fixed context window.
//!
//! Tooling matches this format byte for byte:
//!
//! ```text
//! ERROR: <message>
//!  |
//!  | <20 chars before><char at offset><20 chars after>
//!  | <padding>^
//!  |
//! ```

const CONTEXT_CHARS: usize = 20;

/// Renders one error at byte `offset` of `source`.
///
/// Offsets past the end clamp to the end; offsets inside a multi-byte
/// character snap back to its start. Newlines and tabs in the window are
/// shown as `\n` and `\t`.
pub fn render_report(source: &str, message: &str, offset: usize) -> String {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let window_start = source[..offset]
        .char_indices()
        .rev()
        .take(CONTEXT_CHARS)
        .last()
        .map_or(offset, |(i, _)| i);
    let at_end = source[offset..]
        .chars()
        .next()
        .map_or(offset, |c| offset + c.len_utf8());
    let window_end = source[at_end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map_or(source.len(), |(i, _)| at_end + i);

    let before = escape(&source[window_start..offset]);
    let at_and_after = escape(&source[offset..window_end]);
    let padding = " ".repeat(before.chars().count());

    format!("ERROR: {message}\n |\n | {before}{at_and_after}\n | {padding}^\n |\n")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
