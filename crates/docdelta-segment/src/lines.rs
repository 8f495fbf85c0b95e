//! Line sequencing.

/// Split extracted text into its ordered lines.
///
/// Splits on `'\n'` only, so the result always has one more element than the
/// text has newlines: an empty text is a single empty line and a trailing
/// newline yields a trailing empty line. Carriage returns are kept.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
