//! Float-literal text format for the mesh asset file.
//!
//! Each scalar becomes a single-precision float literal a downstream C/C++
//! compiler can consume directly (`-0.5773502691896258f`). Entries join with
//! a comma and newline, with no trailing delimiter, header, or count prefix.

/// Format one scalar as a float literal with a trailing `f` suffix.
///
/// Uses the shortest round-trip decimal representation, with a decimal point
/// guaranteed so integral values stay valid literals (`1` would not be;
/// `1.0f` is). The scalar must be finite.
#[must_use]
pub fn format_scalar(value: f64) -> String {
    debug_assert!(value.is_finite(), "mesh scalars must be finite: {value}");
    let mut s = value.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s.push('f');
    s
}

/// Serialize the full scalar sequence, entries joined by `,\n`.
///
/// An empty sequence serializes to the empty string.
#[must_use]
pub fn serialize_scalars(scalars: &[f64]) -> String {
    // Typical entry is ~20 bytes plus the separator.
    let mut out = String::with_capacity(scalars.len() * 22);
    for (i, &value) in scalars.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&format_scalar(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_value_keeps_shortest_representation() {
        assert_eq!(format_scalar(-0.5), "-0.5f");
        assert_eq!(format_scalar(0.5773502691896258), "0.5773502691896258f");
    }

    #[test]
    fn test_integral_value_gains_decimal_point() {
        assert_eq!(format_scalar(1.0), "1.0f");
        assert_eq!(format_scalar(-1.0), "-1.0f");
        assert_eq!(format_scalar(0.0), "0.0f");
    }

    #[test]
    fn test_negative_zero_stays_valid_literal() {
        assert_eq!(format_scalar(-0.0), "-0.0f");
    }

    #[test]
    fn test_round_trip_through_literal_text() {
        let value = 1.0 / 3.0f64.sqrt();
        let text = format_scalar(value);
        let parsed: f64 = text.trim_end_matches('f').parse().unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_serialize_joins_without_trailing_delimiter() {
        let text = serialize_scalars(&[1.0, -0.5]);
        assert_eq!(text, "1.0f,\n-0.5f");
    }

    #[test]
    fn test_serialize_single_entry_has_no_separator() {
        assert_eq!(serialize_scalars(&[0.25]), "0.25f");
    }

    #[test]
    fn test_serialize_empty_sequence() {
        assert_eq!(serialize_scalars(&[]), "");
    }

    #[test]
    fn test_serialized_entry_count_matches_input() {
        let scalars = vec![0.1; 108];
        let text = serialize_scalars(&scalars);
        assert_eq!(text.lines().count(), 108);
        assert!(!text.ends_with(','));
        assert!(!text.ends_with('\n'));
    }
}
