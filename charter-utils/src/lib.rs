//! Shared utility functions for charter crates.

/// Number formatting for display.
///
/// Follows en-US grouping (`1,234.5`) with a maximum number of fraction
/// digits and no trailing zeros. Missing or non-finite values render as
/// [`PLACEHOLDER`](format::PLACEHOLDER) instead of failing.
pub mod format {
    /// Rendered for any value that is absent or not a finite number.
    pub const PLACEHOLDER: &str = "—";

    /// Insert `,` every three digits of an unsigned integer string.
    pub fn group_thousands(digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Format with grouping and at most `max_fraction_digits` decimals.
    pub fn format_number(value: Option<f64>, max_fraction_digits: usize) -> String {
        let value = match value {
            Some(v) if v.is_finite() => v,
            _ => return PLACEHOLDER.to_string(),
        };
        let fixed = format!("{:.*}", max_fraction_digits, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, f.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };
        let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
        let mut out = String::new();
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&group_thousands(int_part));
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }

    /// Whole numbers: distances, feet, delta badges.
    pub fn format_whole(value: Option<f64>) -> String {
        format_number(value, 0)
    }

    /// Up to two decimals: money and hours.
    pub fn format_decimal(value: Option<f64>) -> String {
        format_number(value, 2)
    }

    /// Fixed decimals without grouping, e.g. `0.0` for one digit.
    pub fn format_fixed(value: f64, fraction_digits: usize) -> String {
        if !value.is_finite() {
            return PLACEHOLDER.to_string();
        }
        format!("{:.*}", fraction_digits, value)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_group_thousands() {
            assert_eq!(group_thousands("0"), "0");
            assert_eq!(group_thousands("999"), "999");
            assert_eq!(group_thousands("1000"), "1,000");
            assert_eq!(group_thousands("12408"), "12,408");
            assert_eq!(group_thousands("1234567"), "1,234,567");
        }

        #[test]
        fn test_format_decimal() {
            assert_eq!(format_decimal(Some(12408.0)), "12,408");
            assert_eq!(format_decimal(Some(10340.5)), "10,340.5");
            assert_eq!(format_decimal(Some(2.256)), "2.26");
            assert_eq!(format_decimal(Some(-396.46)), "-396.46");
            assert_eq!(format_decimal(Some(0.0)), "0");
        }

        #[test]
        fn test_format_whole() {
            assert_eq!(format_whole(Some(949.3)), "949");
            assert_eq!(format_whole(Some(13016.0)), "13,016");
            assert_eq!(format_whole(Some(-0.2)), "0");
        }

        #[test]
        fn test_missing_and_nan_render_placeholder() {
            assert_eq!(format_whole(None), PLACEHOLDER);
            assert_eq!(format_decimal(Some(f64::NAN)), PLACEHOLDER);
            assert_eq!(format_decimal(Some(f64::INFINITY)), PLACEHOLDER);
            assert_eq!(format_fixed(f64::NAN, 1), PLACEHOLDER);
        }

        #[test]
        fn test_format_fixed() {
            assert_eq!(format_fixed(0.0, 1), "0.0");
            assert_eq!(format_fixed(1523.46, 1), "1523.5");
            assert_eq!(format_fixed(396.46, 0), "396");
        }
    }
}

/// Timestamp formatting for display.
pub mod dates {
    use chrono::{DateTime, Utc};

    /// Minute-precision UTC, e.g. "2025-08-10 10:00Z".
    pub fn format_utc_minutes(ts: &DateTime<Utc>) -> String {
        ts.format("%Y-%m-%d %H:%MZ").to_string()
    }

}
