//! # Ideal Body Weight
//!
//! Four published variants of the same linear model: a gender-specific
//! baseline at five feet plus a fixed weight per inch above it.
//!
//! | Equation | Male baseline / mult | Female baseline / mult |
//! |----------|----------------------|------------------------|
//! | Robinson | 52.0 / 1.9 | 49.0 / 1.7 |
//! | Miller | 56.2 / 1.41 | 53.1 / 1.36 |
//! | Devine | 50.0 / 2.3 | 45.5 / 2.3 |
//! | Hamwi | 48.0 / 2.7 | 45.5 / 2.2 |
//!
//! ```rust
//! use metabolic_core::{ibw, Gender, IbwEquation};
//!
//! assert_eq!(ibw(180.0, Gender::Male, IbwEquation::Hamwi), 77.3);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::equations::{ideal_body_weight, inches_above_five_feet};
use crate::errors::{CalcError, CalcResult};
use crate::gender::Gender;
use crate::rounding::round_to;

/// Equations available for calculating ideal body weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IbwEquation {
    /// Robinson (1983)
    Robinson,
    /// Miller (1983)
    Miller,
    /// Devine (1974)
    Devine,
    /// Hamwi (1964)
    Hamwi,
}

/// One row of the IBW coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IbwCoefficients {
    /// Ideal weight at exactly five feet (kg)
    pub baseline_kg: f64,
    /// Weight added per inch above five feet (kg/in)
    pub kg_per_inch: f64,
}

impl IbwEquation {
    /// All IBW equations
    pub const ALL: [IbwEquation; 4] = [
        IbwEquation::Robinson,
        IbwEquation::Miller,
        IbwEquation::Devine,
        IbwEquation::Hamwi,
    ];

    /// Registry entry for this equation
    pub fn equation(&self) -> Equation {
        match self {
            IbwEquation::Robinson => Equation::IbwRobinson,
            IbwEquation::Miller => Equation::IbwMiller,
            IbwEquation::Devine => Equation::IbwDevine,
            IbwEquation::Hamwi => Equation::IbwHamwi,
        }
    }

    /// Baseline and per-inch multiplier for a gender
    pub fn coefficients(&self, gender: Gender) -> IbwCoefficients {
        let (baseline_kg, kg_per_inch) = match (self, gender) {
            (IbwEquation::Robinson, Gender::Male) => (52.0, 1.9),
            (IbwEquation::Robinson, Gender::Female) => (49.0, 1.7),
            (IbwEquation::Miller, Gender::Male) => (56.2, 1.41),
            (IbwEquation::Miller, Gender::Female) => (53.1, 1.36),
            (IbwEquation::Devine, Gender::Male) => (50.0, 2.3),
            (IbwEquation::Devine, Gender::Female) => (45.5, 2.3),
            (IbwEquation::Hamwi, Gender::Male) => (48.0, 2.7),
            (IbwEquation::Hamwi, Gender::Female) => (45.5, 2.2),
        };
        IbwCoefficients { baseline_kg, kg_per_inch }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "ROBINSON" => Ok(IbwEquation::Robinson),
            "MILLER" => Ok(IbwEquation::Miller),
            "DEVINE" => Ok(IbwEquation::Devine),
            "HAMWI" => Ok(IbwEquation::Hamwi),
            _ => Err(CalcError::invalid_equation("ibw", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            IbwEquation::Robinson => "Robinson",
            IbwEquation::Miller => "Miller",
            IbwEquation::Devine => "Devine",
            IbwEquation::Hamwi => "Hamwi",
        }
    }
}

impl std::fmt::Display for IbwEquation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for IbwEquation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

/// Calculate ideal body weight in kilograms, rounded to one decimal place.
///
/// # Arguments
///
/// * `height_cm` - Height in centimeters
/// * `gender` - Selects the coefficient set
/// * `equation` - IBW variant
pub fn ibw(height_cm: f64, gender: Gender, equation: IbwEquation) -> f64 {
    if inches_above_five_feet(height_cm) < 0.0 {
        tracing::debug!(height_cm, %equation, "height below five feet, extrapolating");
    }

    let c = equation.coefficients(gender);
    let value = round_to(ideal_body_weight(height_cm, c.baseline_kg, c.kg_per_inch), 1);
    tracing::debug!(height_cm, %gender, %equation, value, "computed IBW");
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_heights() {
        let cases = [
            (IbwEquation::Hamwi, 77.3, 69.4),
            (IbwEquation::Devine, 75.0, 70.5),
            (IbwEquation::Robinson, 72.6, 67.5),
            (IbwEquation::Miller, 71.5, 67.9),
        ];

        for (equation, male, female) in cases {
            assert_eq!(ibw(180.0, Gender::Male, equation), male, "{equation} male");
            assert_eq!(ibw(180.0, Gender::Female, equation), female, "{equation} female");
        }
    }

    #[test]
    fn test_five_feet_returns_baseline() {
        for equation in IbwEquation::ALL {
            for gender in Gender::ALL {
                let c = equation.coefficients(gender);
                assert_eq!(ibw(152.4, gender, equation), c.baseline_kg);
            }
        }
    }

    #[test]
    fn test_short_heights_extrapolate_below_baseline() {
        // 140 cm is 4.88 in below five feet: 50 - 4.882 * 2.3 = 38.77
        let value = ibw(140.0, Gender::Male, IbwEquation::Devine);
        assert_eq!(value, 38.8);
    }

    #[test]
    fn test_ibw_is_deterministic() {
        for equation in IbwEquation::ALL {
            assert_eq!(ibw(171.3, Gender::Female, equation), ibw(171.3, Gender::Female, equation));
        }
    }

    #[test]
    fn test_parse_flexible() {
        assert_eq!(IbwEquation::from_str_flexible(" hamwi ").unwrap(), IbwEquation::Hamwi);
        assert_eq!(
            "Broca".parse::<IbwEquation>().unwrap_err(),
            CalcError::invalid_equation("ibw", "Broca")
        );
    }
}
