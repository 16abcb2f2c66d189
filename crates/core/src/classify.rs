//! File classifier: splits content into lines and counts code, comment and blank lines.

use std::str::Utf8Error;

use crate::counts::LineCounts;
use crate::language::Language;

/// Classifies every line of `content` for `language`.
///
/// Lines are split on `'\n'`. A whitespace-only line is blank, except the empty
/// segment after a trailing newline, which is not a line at all. A line whose
/// first non-whitespace characters are the language's comment marker is a
/// comment; anything else is code. A leading byte-order mark is ignored.
#[must_use]
pub fn classify(content: &str, language: Language) -> LineCounts {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let style = language.comment_style();
    let mut counts = LineCounts::zero();
    let mut lines = content.split('\n').peekable();

    while let Some(line) = lines.next() {
        let is_last = lines.peek().is_none();
        if line.trim().is_empty() {
            if !(is_last && line.is_empty()) {
                counts.blank += 1;
            }
        } else if style.is_comment(line) {
            counts.comment += 1;
        } else {
            counts.code += 1;
        }
    }

    counts
}

/// Like [`classify`], for raw bytes that must be valid UTF-8.
///
/// # Errors
/// Returns the decoding error when `bytes` is not UTF-8.
pub fn classify_bytes(bytes: &[u8], language: Language) -> Result<LineCounts, Utf8Error> {
    std::str::from_utf8(bytes).map(|content| classify(content, language))
}
