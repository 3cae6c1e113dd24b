use unicode_normalization::UnicodeNormalization;

/// Derive a machine-safe property name from a free-text label.
///
/// Decomposes the label (NFKD) and drops everything without an ASCII
/// representation, so accented Latin letters fall back to their base
/// form and anything else disappears. Spaces and `?` become `_`, and
/// the result is lowercased. Total and idempotent; a label with no
/// ASCII content yields an empty name.
pub fn property_name(label: &str) -> String {
    label
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| match c {
            ' ' | '?' => '_',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}
