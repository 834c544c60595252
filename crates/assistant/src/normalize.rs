//! Text normalization & tokenization.

/// The one non-alphanumeric glyph that survives normalization.
pub const CURRENCY_GLYPH: char = '₹';

/// Lowercase, replace everything except alphanumerics, whitespace and the
/// currency glyph with spaces, collapse whitespace runs and trim.
pub fn normalize(raw: &str) -> String {
    let replaced: String = raw
        .to_lowercase()
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch.is_whitespace() || ch == CURRENCY_GLYPH {
                ch
            } else {
                ' '
            }
        })
        .collect();

    collapse_whitespace(&replaced)
}

/// Normalized text split on whitespace.
pub fn tokenize(raw: &str) -> Vec<String> {
    normalize(raw).split(' ').filter(|t| !t.is_empty()).map(str::to_string).collect()
}

pub(crate) fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
