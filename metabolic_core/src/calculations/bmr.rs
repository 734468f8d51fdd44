//! # Basal Metabolic Rate
//!
//! Calories burned at rest, under one of three equations. Each equation
//! needs a different subset of [`BmrOptions`]; the subset is checked before
//! the formula runs.
//!
//! | Equation | Required options |
//! |----------|------------------|
//! | Mifflin-St Jeor | age, weight, gender, height |
//! | Harris-Benedict | age, weight, gender, height |
//! | Katch-McArdle | weight, body fat percentage |
//!
//! ## Example
//!
//! ```rust
//! use metabolic_core::{bmr, BmrEquation, BmrOptions, Gender};
//!
//! let options = BmrOptions {
//!     age: Some(30.0),
//!     height: Some(180.0),
//!     weight: Some(76.0),
//!     gender: Some(Gender::Male),
//!     ..Default::default()
//! };
//!
//! assert_eq!(bmr(BmrEquation::Mifflin, &options).unwrap(), 1740.0);
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! { "age": 30, "height": 180, "weight": 76, "gender": "Male" }
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::equations::{harris_benedict, katch_mcardle, mifflin_st_jeor};
use crate::errors::{CalcError, CalcResult};
use crate::gender::Gender;
use crate::options::{ensure_supplied, OptionField, OptionsBundle};
use crate::rounding::round_to;
use crate::settings::{CalcSettings, ValidationPolicy};

/// Equations available for calculating basal metabolic rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmrEquation {
    /// Mifflin-St Jeor equation
    #[serde(alias = "MifflinStJeor")]
    Mifflin,
    /// Revised Harris-Benedict equation
    HarrisBenedict,
    /// Katch-McArdle equation
    #[serde(alias = "KatchMcArdle")]
    Katch,
}

impl BmrEquation {
    /// All BMR equations
    pub const ALL: [BmrEquation; 3] = [
        BmrEquation::Mifflin,
        BmrEquation::HarrisBenedict,
        BmrEquation::Katch,
    ];

    /// Registry entry for this equation
    pub fn equation(&self) -> Equation {
        match self {
            BmrEquation::Mifflin => Equation::BmrMifflinStJeor,
            BmrEquation::HarrisBenedict => Equation::BmrHarrisBenedict,
            BmrEquation::Katch => Equation::BmrKatchMcArdle,
        }
    }

    /// Options this equation requires
    pub fn required_options(&self) -> &'static [OptionField] {
        self.equation().required_options()
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "MIFFLIN" | "MIFFLINSTJEOR" | "MSJ" => Ok(BmrEquation::Mifflin),
            "HARRISBENEDICT" | "HB" => Ok(BmrEquation::HarrisBenedict),
            "KATCH" | "KATCHMCARDLE" | "KM" => Ok(BmrEquation::Katch),
            _ => Err(CalcError::invalid_equation("bmr", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BmrEquation::Mifflin => "Mifflin-St Jeor",
            BmrEquation::HarrisBenedict => "Harris-Benedict",
            BmrEquation::Katch => "Katch-McArdle",
        }
    }
}

impl std::fmt::Display for BmrEquation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for BmrEquation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

/// Subject measurements for a BMR calculation.
///
/// Every field is optional; which ones must be supplied depends on the
/// equation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BmrOptions {
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,

    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Body fat percentage (0-100)
    #[serde(alias = "bodyFat", skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
}

impl OptionsBundle for BmrOptions {
    fn is_supplied(&self, field: OptionField, policy: ValidationPolicy) -> bool {
        match field {
            OptionField::Age => policy.accepts(self.age),
            OptionField::Height => policy.accepts(self.height),
            OptionField::Weight => policy.accepts(self.weight),
            OptionField::Gender => self.gender.is_some(),
            OptionField::BodyFat => policy.accepts(self.body_fat),
            OptionField::ActivityLevel => false,
        }
    }
}

/// Calculate basal metabolic rate (kcal/day), rounded to the nearest integer.
///
/// Uses [`CalcSettings::default`], under which a zero value counts as missing.
///
/// # Returns
///
/// * `Ok(f64)` - BMR in kcal/day
/// * `Err(CalcError::MissingRequiredOption)` - a field the equation needs is missing
pub fn bmr(equation: BmrEquation, options: &BmrOptions) -> CalcResult<f64> {
    bmr_with_settings(equation, options, &CalcSettings::default())
}

/// Calculate basal metabolic rate with explicit settings.
pub fn bmr_with_settings(equation: BmrEquation, options: &BmrOptions, settings: &CalcSettings) -> CalcResult<f64> {
    ensure_supplied(
        equation.display_name(),
        equation.required_options(),
        options,
        settings.validation,
    )?;

    let raw = match equation {
        BmrEquation::Mifflin | BmrEquation::HarrisBenedict => {
            let age = supplied(options.age, equation, OptionField::Age)?;
            let height = supplied(options.height, equation, OptionField::Height)?;
            let weight = supplied(options.weight, equation, OptionField::Weight)?;
            let gender = supplied(options.gender, equation, OptionField::Gender)?;

            if equation == BmrEquation::Mifflin {
                mifflin_st_jeor(age, height, weight, gender)
            } else {
                harris_benedict(age, height, weight, gender)
            }
        }
        BmrEquation::Katch => {
            let weight = supplied(options.weight, equation, OptionField::Weight)?;
            let body_fat = supplied(options.body_fat, equation, OptionField::BodyFat)?;
            katch_mcardle(weight, body_fat)
        }
    };

    let value = round_to(raw, 0);
    tracing::debug!(%equation, value, "computed BMR");
    Ok(value)
}

fn supplied<T>(value: Option<T>, equation: BmrEquation, field: OptionField) -> CalcResult<T> {
    value.ok_or_else(|| CalcError::missing_required_option(equation.display_name(), [field.label()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_subject(gender: Gender) -> BmrOptions {
        BmrOptions {
            age: Some(30.0),
            height: Some(180.0),
            weight: Some(76.0),
            gender: Some(gender),
            body_fat: None,
        }
    }

    #[test]
    fn test_mifflin() {
        assert_eq!(bmr(BmrEquation::Mifflin, &reference_subject(Gender::Male)).unwrap(), 1740.0);
        assert_eq!(bmr(BmrEquation::Mifflin, &reference_subject(Gender::Female)).unwrap(), 1574.0);
    }

    #[test]
    fn test_harris_benedict() {
        assert_eq!(
            bmr(BmrEquation::HarrisBenedict, &reference_subject(Gender::Male)).unwrap(),
            1800.0
        );
        assert_eq!(
            bmr(BmrEquation::HarrisBenedict, &reference_subject(Gender::Female)).unwrap(),
            1578.0
        );
    }

    #[test]
    fn test_katch() {
        let options = BmrOptions {
            weight: Some(76.0),
            body_fat: Some(10.0),
            ..Default::default()
        };
        assert_eq!(bmr(BmrEquation::Katch, &options).unwrap(), 1847.0);
    }

    #[test]
    fn test_empty_options_missing_for_every_equation() {
        for equation in BmrEquation::ALL {
            let err = bmr(equation, &BmrOptions::default()).unwrap_err();
            match err {
                CalcError::MissingRequiredOption { equation: name, missing } => {
                    assert_eq!(name, equation.display_name());
                    assert_eq!(missing.len(), equation.required_options().len());
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_zero_is_missing_by_default() {
        let mut options = reference_subject(Gender::Male);
        options.age = Some(0.0);
        let err = bmr(BmrEquation::Mifflin, &options).unwrap_err();
        assert_eq!(err, CalcError::missing_required_option("Mifflin-St Jeor", ["age"]));
    }

    #[test]
    fn test_zero_accepted_under_presence_policy() {
        let settings = CalcSettings {
            validation: ValidationPolicy::Presence,
        };
        let options = BmrOptions {
            weight: Some(76.0),
            body_fat: Some(0.0),
            ..Default::default()
        };
        assert_eq!(bmr_with_settings(BmrEquation::Katch, &options, &settings).unwrap(), 2011.0);
    }

    #[test]
    fn test_katch_ignores_demographics() {
        let options = BmrOptions {
            weight: Some(76.0),
            body_fat: Some(10.0),
            ..reference_subject(Gender::Female)
        };
        assert_eq!(bmr(BmrEquation::Katch, &options).unwrap(), 1847.0);
    }

    #[test]
    fn test_bmr_is_deterministic() {
        let options = reference_subject(Gender::Female);
        for equation in [BmrEquation::Mifflin, BmrEquation::HarrisBenedict] {
            assert_eq!(bmr(equation, &options), bmr(equation, &options));
        }
    }

    #[test]
    fn test_parse_flexible() {
        assert_eq!(BmrEquation::from_str_flexible("mifflin-st jeor").unwrap(), BmrEquation::Mifflin);
        assert_eq!("Harris_Benedict".parse::<BmrEquation>().unwrap(), BmrEquation::HarrisBenedict);
        assert_eq!(
            BmrEquation::from_str_flexible("Schofield").unwrap_err(),
            CalcError::invalid_equation("bmr", "Schofield")
        );
    }

    #[test]
    fn test_options_json_accepts_camel_case_body_fat() {
        let options: BmrOptions = serde_json::from_str(r#"{"weight": 76, "bodyFat": 10}"#).unwrap();
        assert_eq!(options.body_fat, Some(10.0));
        assert_eq!(serde_json::to_string(&options).unwrap(), r#"{"weight":76.0,"body_fat":10.0}"#);
    }
}
