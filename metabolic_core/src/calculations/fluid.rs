//! # Daily Fluid Intake

use crate::equations::daily_fluid_intake;
use crate::rounding::floor_to;

/// Recommended daily fluid intake in liters, floored to a whole number.
///
/// # Arguments
///
/// * `weight_kg` - Weight in kilograms
/// * `active_minutes` - Minutes of activity per day
///
/// ```rust
/// use metabolic_core::fluid_intake;
///
/// assert_eq!(fluid_intake(76.0, 160.0), 5.0);
/// ```
pub fn fluid_intake(weight_kg: f64, active_minutes: f64) -> f64 {
    let value = floor_to(daily_fluid_intake(weight_kg, active_minutes), 0);
    tracing::debug!(weight_kg, active_minutes, value, "computed fluid intake");
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_subject() {
        assert_eq!(fluid_intake(76.0, 160.0), 5.0);
    }

    #[test]
    fn test_floors_rather_than_rounds() {
        // 76 kg at rest: 112.26 fl oz = 3.19 L
        assert_eq!(fluid_intake(76.0, 0.0), 3.0);
        // 100 kg, 60 min: (147.71 + 24) fl oz = 4.88 L
        assert_eq!(fluid_intake(100.0, 60.0), 4.0);
    }

    #[test]
    fn test_fluid_intake_is_deterministic() {
        assert_eq!(fluid_intake(82.4, 45.0), fluid_intake(82.4, 45.0));
    }

    #[test]
    fn test_activity_adds_intake() {
        assert!(fluid_intake(76.0, 300.0) > fluid_intake(76.0, 0.0));
    }
}
