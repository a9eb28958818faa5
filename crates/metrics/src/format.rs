//! Locale-grouped number rendering for the display layer.
//!
//! Uses the Indian grouping convention the backend's audience expects:
//! the last three digits form one group, every group above that is two
//! digits (`1234567` → `12,34,567`). Absent values render a fixed
//! placeholder glyph instead of erroring.

/// Rendered in place of a missing numeric value.
pub const PLACEHOLDER: &str = "—";

/// Formats an integer count with Indian digit grouping.
pub fn format_count(value: Option<i64>) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_string();
    };
    let v = value as i128;
    let grouped = group_indian(&v.unsigned_abs().to_string());
    if v < 0 { format!("-{grouped}") } else { grouped }
}

/// Formats a decimal amount: grouped integer part, fraction rounded to two
/// places with trailing zeros trimmed (`245.50` → `245.5`).
pub fn format_amount(value: Option<f64>) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_string();
    };
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let cents = (value.abs() * 100.0).round() as i128;
    let whole = cents / 100;
    let frac = (cents % 100) as u32;

    let mut out = String::new();
    if value < 0.0 && (whole != 0 || frac != 0) {
        out.push('-');
    }
    out.push_str(&group_indian(&whole.to_string()));
    if frac != 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{frac:02}"));
        }
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::{PLACEHOLDER, format_amount, format_count};

    #[test]
    fn small_counts_are_ungrouped() {
        assert_eq!(format_count(Some(0)), "0");
        assert_eq!(format_count(Some(999)), "999");
    }

    #[test]
    fn counts_use_indian_grouping() {
        assert_eq!(format_count(Some(1_000)), "1,000");
        assert_eq!(format_count(Some(12_345)), "12,345");
        assert_eq!(format_count(Some(123_456)), "1,23,456");
        assert_eq!(format_count(Some(1_234_567)), "12,34,567");
        assert_eq!(format_count(Some(123_456_789)), "12,34,56,789");
    }

    #[test]
    fn negative_counts_keep_the_sign() {
        assert_eq!(format_count(Some(-1_234)), "-1,234");
    }

    #[test]
    fn absent_values_render_placeholder() {
        assert_eq!(format_count(None), PLACEHOLDER);
        assert_eq!(format_amount(None), PLACEHOLDER);
        assert_eq!(format_amount(Some(f64::NAN)), PLACEHOLDER);
    }

    #[test]
    fn extreme_counts_do_not_overflow() {
        assert_eq!(format_count(Some(i64::MIN)), "-92,23,37,20,36,85,47,75,808");
    }

    #[test]
    fn amounts_trim_trailing_zeros() {
        assert_eq!(format_amount(Some(245.5)), "245.5");
        assert_eq!(format_amount(Some(245.0)), "245");
        assert_eq!(format_amount(Some(245.55)), "245.55");
        assert_eq!(format_amount(Some(1234.25)), "1,234.25");
    }
}
