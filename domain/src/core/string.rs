//! String rules for file names and service tokens.

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
///
/// One underscore is emitted per replaced character, so the segment keeps
/// its length in characters. Path separators, dots, whitespace, control
/// characters and non-ASCII letters are all replaced.
pub fn sanitize_file_segment(s: &str) -> String {
    s.chars()
        .map(|c| if is_token_char(c) { c } else { '_' })
        .collect()
}

/// Characters allowed in version ids: ASCII alphanumerics, `-` and `_`.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
