//! Amount rendering
//!
//! Amounts print as the shortest decimal that round-trips the f64, never in
//! exponent notation, and always with at least one fractional digit.

/// Render an amount for display: `5.0`, `274.15`, `-100.1`, `0.0000001`
pub fn format_amount(value: f64) -> String {
    let mut s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}
