//! Log sanitization utilities for snippet content.
//!
//! Snippet titles and code are user-supplied and may be large or span many
//! lines. These helpers shorten them to a single line before logging.

/// Number of characters kept by [`preview`].
pub const PREVIEW_CHARS: usize = 24;

/// Shorten user text for a single log line.
///
/// Line breaks are replaced with spaces and anything past [`PREVIEW_CHARS`]
/// characters is replaced by `...`.
///
/// # Examples
/// ```ignore
/// assert_eq!(preview("print(1)\nprint(2)"), "print(1) print(2)");
/// ```
pub fn preview(text: &str) -> String {
    let single_line: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    match single_line.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &single_line[..cut]),
        None => single_line,
    }
}
