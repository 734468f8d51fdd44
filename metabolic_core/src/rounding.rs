//! # Rounding Rules
//!
//! Every formula rounds its final value through one of these two helpers:
//!
//! | Function | Rule |
//! |----------|------|
//! | BMI | `round_to(_, 1)` |
//! | BMR, TDEE | `round_to(_, 0)` |
//! | IBW | `round_to(_, 1)` |
//! | Fluid intake | `floor_to(_, 0)` |

/// Round `value` to `decimals` places, ties away from zero.
///
/// ```rust
/// use metabolic_core::rounding::round_to;
///
/// assert_eq!(round_to(25.33, 1), 25.3);
/// assert_eq!(round_to(1739.5, 0), 1740.0);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return value.round();
    }
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Round `value` down to `decimals` places.
#[inline]
pub fn floor_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return value.floor();
    }
    let scale = 10f64.powi(decimals as i32);
    (value * scale).floor() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_one_decimal() {
        assert_eq!(round_to(23.456790123, 1), 23.5);
        assert_eq!(round_to(77.338582, 1), 77.3);
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_floor_to() {
        assert_eq!(floor_to(5.99, 0), 5.0);
        assert_eq!(floor_to(-0.5, 0), -1.0);
        assert_eq!(floor_to(1.27, 1), 1.2);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_to(f64::NAN, 1).is_nan());
        assert_eq!(round_to(f64::INFINITY, 1), f64::INFINITY);
    }
}
