//! # Calculation Settings
//!
//! Caller-supplied knobs that change how inputs are validated. There is no
//! file or environment loading; settings are plain values passed to the
//! `*_with_settings` entry points.
//!
//! ```rust
//! use metabolic_core::settings::{CalcSettings, ValidationPolicy};
//! use metabolic_core::{bmr_with_settings, BmrEquation, BmrOptions};
//!
//! let options = BmrOptions { weight: Some(76.0), body_fat: Some(0.0), ..Default::default() };
//!
//! // Zero body fat is rejected by default...
//! assert!(bmr_with_settings(BmrEquation::Katch, &options, &CalcSettings::default()).is_err());
//!
//! // ...and accepted when only presence is checked.
//! let settings = CalcSettings { validation: ValidationPolicy::Presence };
//! assert_eq!(bmr_with_settings(BmrEquation::Katch, &options, &settings).unwrap(), 2011.0);
//! ```

use serde::{Deserialize, Serialize};

/// How a supplied numeric option is judged "present".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Zero and NaN count as missing. Reproduces the reference outputs.
    #[default]
    Truthy,
    /// Only an absent value counts as missing; zero is a valid input.
    Presence,
}

impl ValidationPolicy {
    /// Whether `value` satisfies this policy
    pub fn accepts(self, value: Option<f64>) -> bool {
        match (self, value) {
            (_, None) => false,
            (ValidationPolicy::Truthy, Some(v)) => v != 0.0 && !v.is_nan(),
            (ValidationPolicy::Presence, Some(_)) => true,
        }
    }
}

/// Global settings applied to a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalcSettings {
    /// Policy for deciding whether a numeric option was supplied
    #[serde(default)]
    pub validation: ValidationPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_rejects_zero_and_nan() {
        let policy = ValidationPolicy::Truthy;
        assert!(!policy.accepts(None));
        assert!(!policy.accepts(Some(0.0)));
        assert!(!policy.accepts(Some(f64::NAN)));
        assert!(policy.accepts(Some(-3.0)));
    }

    #[test]
    fn test_presence_accepts_zero() {
        let policy = ValidationPolicy::Presence;
        assert!(!policy.accepts(None));
        assert!(policy.accepts(Some(0.0)));
    }

    #[test]
    fn test_settings_default_from_empty_json() {
        let settings: CalcSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CalcSettings::default());

        let settings: CalcSettings = serde_json::from_str(r#"{"validation":"presence"}"#).unwrap();
        assert_eq!(settings.validation, ValidationPolicy::Presence);
    }
}
