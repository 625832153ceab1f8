use unicode_normalization::UnicodeNormalization;

/// CSS class suffix for a loyalty status: lower-cased, canonically
/// decomposed, with combining diacritical marks (U+0300..=U+036F) removed.
pub fn status_class_suffix(status: &str) -> String {
    status
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}
