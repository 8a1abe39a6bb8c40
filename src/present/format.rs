use alloy_primitives::utils::format_ether;
use alloy_primitives::U256;

/// Shown wherever a value hasn't loaded yet.
pub const PLACEHOLDER: &str = "-";

/// Base units (18 decimals) → display units, trailing zeros trimmed but
/// always keeping one fractional digit: 1e18 → "1.0", 25e16 → "0.25".
pub fn display_units(amount: U256) -> String {
    let mut s = format_ether(amount);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').len();
        s.truncate(trimmed);
        if s.ends_with('.') {
            s.push('0');
        }
    } else {
        s.push_str(".0");
    }
    s
}

/// "1.5 MATIC", or the placeholder alone if the amount is unknown.
pub fn amount(value: Option<U256>, currency: &str) -> String {
    match value {
        Some(v) => format!("{} {}", display_units(v), currency),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn count(value: Option<u64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string())
}
