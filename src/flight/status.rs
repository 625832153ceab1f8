/// Raw status values that mean "delayed". The status server speaks
/// Portuguese (`Adiado`).
pub const DELAYED_MARKERS: &[&str] = &["Delayed", "Adiado"];

pub fn is_delayed_marker(raw_status: &str) -> bool {
    DELAYED_MARKERS.contains(&raw_status)
}

/// CSS class for a computed status: its first whitespace-delimited token,
/// lower-cased, behind `status-`.
pub fn status_class(computed_status: &str) -> String {
    let token = computed_status.split_whitespace().next().unwrap_or_default();
    format!("status-{}", token.to_lowercase())
}

/// Label for the compact list, without the leading delay qualifier.
pub fn compact_label(computed_status: &str) -> &str {
    DELAYED_MARKERS
        .iter()
        .find_map(|marker| {
            computed_status
                .strip_prefix(marker)
                .and_then(|rest| rest.strip_prefix(" - "))
        })
        .unwrap_or(computed_status)
}
