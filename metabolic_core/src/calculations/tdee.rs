//! # Total Daily Energy Expenditure
//!
//! TDEE is the rounded BMR of the matching equation scaled by an activity
//! multiplier, then rounded again.
//!
//! | Activity level | Multiplier |
//! |----------------|------------|
//! | Sedentary | 1.2 |
//! | Light | 1.375 |
//! | Moderate | 1.465 |
//! | Active | 1.55 |
//! | VeryActive | 1.725 |
//! | ExtraActive | 1.9 |
//!
//! ## Example
//!
//! ```rust
//! use metabolic_core::{tdee, ActivityLevel, TdeeEquation, TdeeOptions};
//!
//! let options = TdeeOptions {
//!     weight: Some(78.0),
//!     body_fat: Some(10.0),
//!     activity_level: Some(ActivityLevel::ExtraActive),
//!     ..Default::default()
//! };
//!
//! assert_eq!(tdee(TdeeEquation::Katch, &options).unwrap(), 3583.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::bmr::{bmr_with_settings, BmrEquation, BmrOptions};
use crate::equations::apply_activity_multiplier;
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::gender::Gender;
use crate::options::{ensure_supplied, OptionField, OptionsBundle};
use crate::rounding::round_to;
use crate::settings::{CalcSettings, ValidationPolicy};

/// A subject's general level of activity throughout the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little to no exercise
    Sedentary,
    /// Exercising 1-3 times a week
    Light,
    /// Exercising 4-5 times a week
    Moderate,
    /// Daily exercise or intense exercise 3-4 times a week
    Active,
    /// Intense exercise 6-7 days a week
    VeryActive,
    /// Very intense exercise daily, or a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// All activity levels, least to most active
    pub const ALL: [ActivityLevel; 6] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// BMR multiplier for this activity level
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.465,
            ActivityLevel::Active => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Short description of the activity pattern
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little to no exercise",
            ActivityLevel::Light => "Exercise 1-3 times a week",
            ActivityLevel::Moderate => "Exercise 4-5 times a week",
            ActivityLevel::Active => "Daily exercise or intense exercise 3-4 times a week",
            ActivityLevel::VeryActive => "Intense exercise 6-7 times a week",
            ActivityLevel::ExtraActive => "Very intense exercise daily, or physical job",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "SEDENTARY" => Ok(ActivityLevel::Sedentary),
            "LIGHT" | "LIGHTLYACTIVE" => Ok(ActivityLevel::Light),
            "MODERATE" | "MODERATELYACTIVE" => Ok(ActivityLevel::Moderate),
            "ACTIVE" => Ok(ActivityLevel::Active),
            "VERYACTIVE" => Ok(ActivityLevel::VeryActive),
            "EXTRAACTIVE" => Ok(ActivityLevel::ExtraActive),
            _ => Err(CalcError::invalid_input(
                "activity_level",
                s,
                "Expected one of Sedentary, Light, Moderate, Active, VeryActive, ExtraActive",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

/// Equations available for calculating TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TdeeEquation {
    /// Mifflin-St Jeor BMR scaled by activity
    #[serde(alias = "MifflinStJeor")]
    Mifflin,
    /// Katch-McArdle BMR scaled by activity
    #[serde(alias = "KatchMcArdle")]
    Katch,
}

impl TdeeEquation {
    /// All TDEE equations
    pub const ALL: [TdeeEquation; 2] = [TdeeEquation::Mifflin, TdeeEquation::Katch];

    /// Registry entry for this equation
    pub fn equation(&self) -> Equation {
        match self {
            TdeeEquation::Mifflin => Equation::TdeeMifflinStJeor,
            TdeeEquation::Katch => Equation::TdeeKatchMcArdle,
        }
    }

    /// The BMR equation this TDEE equation scales
    pub fn bmr_equation(&self) -> BmrEquation {
        match self {
            TdeeEquation::Mifflin => BmrEquation::Mifflin,
            TdeeEquation::Katch => BmrEquation::Katch,
        }
    }

    /// Options this equation requires
    pub fn required_options(&self) -> &'static [OptionField] {
        self.equation().required_options()
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "MIFFLIN" | "MIFFLINSTJEOR" | "MSJ" => Ok(TdeeEquation::Mifflin),
            "KATCH" | "KATCHMCARDLE" | "KM" => Ok(TdeeEquation::Katch),
            _ => Err(CalcError::invalid_equation("tdee", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.bmr_equation().display_name()
    }
}

impl std::fmt::Display for TdeeEquation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for TdeeEquation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

/// Subject measurements for a TDEE calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TdeeOptions {
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

    /// How active the subject is. Required by every TDEE equation.
    #[serde(alias = "activityLevel", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
}

impl TdeeOptions {
    /// The BMR inputs an equation passes through to its BMR calculation
    fn bmr_options(&self, equation: TdeeEquation) -> BmrOptions {
        match equation {
            TdeeEquation::Mifflin => BmrOptions {
                age: self.age,
                height: self.height,
                weight: self.weight,
                gender: self.gender,
                body_fat: None,
            },
            TdeeEquation::Katch => BmrOptions {
                weight: self.weight,
                body_fat: self.body_fat,
                ..Default::default()
            },
        }
    }
}

impl OptionsBundle for TdeeOptions {
    fn is_supplied(&self, field: OptionField, policy: ValidationPolicy) -> bool {
        match field {
            OptionField::Age => policy.accepts(self.age),
            OptionField::Height => policy.accepts(self.height),
            OptionField::Weight => policy.accepts(self.weight),
            OptionField::Gender => self.gender.is_some(),
            OptionField::BodyFat => policy.accepts(self.body_fat),
            OptionField::ActivityLevel => self.activity_level.is_some(),
        }
    }
}

/// Calculate total daily energy expenditure (kcal/day), rounded to the
/// nearest integer.
pub fn tdee(equation: TdeeEquation, options: &TdeeOptions) -> CalcResult<f64> {
    tdee_with_settings(equation, options, &CalcSettings::default())
}

/// Calculate total daily energy expenditure with explicit settings.
pub fn tdee_with_settings(equation: TdeeEquation, options: &TdeeOptions, settings: &CalcSettings) -> CalcResult<f64> {
    ensure_supplied(
        equation.display_name(),
        equation.required_options(),
        options,
        settings.validation,
    )?;

    let activity_level = options.activity_level.ok_or_else(|| {
        CalcError::missing_required_option(equation.display_name(), [OptionField::ActivityLevel.label()])
    })?;

    let basal = bmr_with_settings(equation.bmr_equation(), &options.bmr_options(equation), settings)?;
    let value = round_to(apply_activity_multiplier(basal, activity_level.multiplier()), 0);

    tracing::debug!(%equation, %activity_level, basal, value, "computed TDEE");
    Ok(value)
}
