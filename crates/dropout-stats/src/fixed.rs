//! Fixed-point decimal rendering for display strings.
//!
//! `format!("{:.N}")` rounds a value lying exactly halfway between two
//! N-digit decimals to the even neighbour (`6.25` becomes `"6.2"`). Dashboard
//! strings round such ties away from zero instead (`"6.3"`). Values that are
//! not exact ties format identically either way.

/// Formats `value` with `digits` decimal digits, rounding exact ties away from
/// zero.
///
/// Only ties of the exact binary value count: `1.005` is stored slightly
/// below `1.005`, so it still renders as `"1.00"`.
///
/// # Examples
///
/// ```
/// use dropout_stats::fixed::to_fixed;
///
/// assert_eq!(to_fixed(6.25, 1), "6.3");
/// assert_eq!(to_fixed(2.125, 2), "2.13");
/// assert_eq!(to_fixed(66.666_666, 1), "66.7");
/// assert_eq!(to_fixed(1.005, 2), "1.00");
/// ```
#[must_use]
pub fn to_fixed(value: f64, digits: u8) -> String {
    let precision = usize::from(digits);
    if !value.is_finite() {
        return format!("{value:.precision$}");
    }

    let scale = 10_f64.powi(i32::from(digits));
    let scaled = value * scale;
    // the product is exact only when the fused residual vanishes
    let is_exact_tie = scaled.fract().abs().to_bits() == 0.5_f64.to_bits()
        && value.mul_add(scale, -scaled) == 0.0;
    if is_exact_tie {
        let rounded = scaled.abs().ceil().copysign(scaled);
        format!("{:.precision$}", rounded / scale)
    } else {
        format!("{value:.precision$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_fixed(1.0 / 16.0 * 100.0, 1), "6.3");
        assert_eq!(to_fixed(2.125, 2), "2.13");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(-0.25, 1), "-0.3");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_non_ties_match_standard_formatting() {
        for (value, digits) in [
            (66.666_666_666, 1),
            (2.333_333, 2),
            (1.005, 2),
            (0.15, 1),
            (1.5, 1),
            (99.94, 1),
            (0.0, 2),
        ] {
            assert_eq!(
                to_fixed(value, digits),
                format!("{value:.prec$}", prec = usize::from(digits)),
                "{value}"
            );
        }
    }

    #[test]
    fn test_tie_carries_into_integer_part() {
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(99.75, 1), "99.8");
        assert_eq!(to_fixed(-9.5, 0), "-10");
    }
}
