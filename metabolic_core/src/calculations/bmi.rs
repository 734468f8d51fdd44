//! # Body Mass Index
//!
//! ```rust
//! use metabolic_core::calculations::bmi::{bmi, BmiCategory};
//!
//! let value = bmi(1.8, 76.0);
//! assert_eq!(value, 23.5);
//! assert_eq!(BmiCategory::from_bmi(value), BmiCategory::Normal);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::body_mass_index;
use crate::rounding::round_to;

/// Calculate body mass index, rounded to one decimal place.
///
/// No positivity check is made: a zero height yields `inf` or `NaN`.
///
/// # Arguments
///
/// * `height_m` - Height in **meters**
/// * `weight_kg` - Weight in kilograms
pub fn bmi(height_m: f64, weight_kg: f64) -> f64 {
    let value = round_to(body_mass_index(height_m, weight_kg), 1);
    tracing::debug!(height_m, weight_kg, value, "computed BMI");
    value
}

/// WHO adult weight classification by BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 ≤ BMI < 25
    Normal,
    /// 25 ≤ BMI < 30
    Overweight,
    /// BMI ≥ 30
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. `NaN` compares false everywhere and lands in `Underweight`.
    pub fn from_bmi(value: f64) -> Self {
        if value >= 30.0 {
            BmiCategory::Obese
        } else if value >= 25.0 {
            BmiCategory::Overweight
        } else if value >= 18.5 {
            BmiCategory::Normal
        } else {
            BmiCategory::Underweight
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_one_decimal() {
        assert_eq!(bmi(1.8, 76.0), 23.5);
        assert_eq!(bmi(1.65, 60.0), 22.0);
    }

    #[test]
    fn test_bmi_zero_height() {
        assert_eq!(bmi(0.0, 76.0), f64::INFINITY);
        assert!(bmi(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_bmi_is_deterministic() {
        assert_eq!(bmi(1.72, 81.3), bmi(1.72, 81.3));
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::from_bmi(f64::NAN), BmiCategory::Underweight);
    }
}
