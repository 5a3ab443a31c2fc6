//! Composite token splitting
//!
//! A composite token contains an underscore, or an uppercase letter anywhere
//! but the first position: `myVariableName`, `my_variable_name`,
//! `HTTPServer`. Splitting turns underscores into spaces and puts a space in
//! front of every non-leading uppercase letter, then splits on whitespace.

/// Whether `token` is a composite identifier
pub fn is_composite(token: &str) -> bool {
    token
        .char_indices()
        .any(|(ix, c)| c == '_' || (ix > 0 && c.is_ascii_uppercase()))
}

/// Build the space-separated form of a composite token.
///
/// Single pass over the input: every character is looked at exactly once
/// and inserted separators are never revisited.
pub fn expand(token: &str) -> String {
    let mut out = String::with_capacity(token.len() * 2);
    for (ix, c) in token.char_indices() {
        if c == '_' {
            out.push(' ');
        } else {
            if ix > 0 && c.is_ascii_uppercase() {
                out.push(' ');
            }
            out.push(c);
        }
    }
    out
}

/// Split a composite token into its sub-words, in order.
///
/// Sub-words keep their original case; `HTTPServer` yields one sub-word per
/// capital (`H`, `T`, `T`, `Server`), and the single letters are dropped
/// later by the length check.
pub fn split(token: &str) -> Vec<String> {
    expand(token)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
