//! # Option Validation
//!
//! BMR and TDEE take a bundle of optional subject measurements. Which of those
//! fields must be supplied depends only on the selected equation; the
//! requirement lists live in the [equation registry](crate::equations::registry)
//! and are checked here before any formula runs.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::settings::ValidationPolicy;

/// A field of an options bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionField {
    /// Age in years
    Age,
    /// Height in centimeters
    Height,
    /// Weight in kilograms
    Weight,
    /// Gender
    Gender,
    /// Body fat percentage (0-100)
    BodyFat,
    /// Activity level
    ActivityLevel,
}

impl OptionField {
    /// Human-readable field name used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            OptionField::Age => "age",
            OptionField::Height => "height",
            OptionField::Weight => "weight",
            OptionField::Gender => "gender",
            OptionField::BodyFat => "body fat percentage",
            OptionField::ActivityLevel => "activity level",
        }
    }
}

impl std::fmt::Display for OptionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of optional subject measurements.
///
/// Numeric fields are judged by the [`ValidationPolicy`]; categorical fields
/// (gender, activity level) only need to be present.
pub trait OptionsBundle {
    /// Whether `field` has been supplied under `policy`
    fn is_supplied(&self, field: OptionField, policy: ValidationPolicy) -> bool;

    /// The subset of `required` that has not been supplied, in order
    fn missing_fields(&self, required: &[OptionField], policy: ValidationPolicy) -> Vec<OptionField> {
        required
            .iter()
            .copied()
            .filter(|field| !self.is_supplied(*field, policy))
            .collect()
    }
}

/// Fail with `MissingRequiredOption` unless every `required` field is supplied.
pub(crate) fn ensure_supplied<O: OptionsBundle + ?Sized>(
    equation: &str,
    required: &[OptionField],
    options: &O,
    policy: ValidationPolicy,
) -> CalcResult<()> {
    let missing = options.missing_fields(required, policy);
    if missing.is_empty() {
        return Ok(());
    }

    tracing::debug!(equation, ?missing, ?policy, "options bundle incomplete");
    Err(CalcError::missing_required_option(
        equation,
        missing.iter().map(OptionField::label),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WeightOnly(Option<f64>);

    impl OptionsBundle for WeightOnly {
        fn is_supplied(&self, field: OptionField, policy: ValidationPolicy) -> bool {
            match field {
                OptionField::Weight => policy.accepts(self.0),
                _ => false,
            }
        }
    }

    #[test]
    fn test_missing_fields_preserve_order() {
        let options = WeightOnly(Some(70.0));
        let missing = options.missing_fields(
            &[OptionField::Age, OptionField::Weight, OptionField::BodyFat],
            ValidationPolicy::Truthy,
        );
        assert_eq!(missing, vec![OptionField::Age, OptionField::BodyFat]);
    }

    #[test]
    fn test_ensure_supplied_reports_labels() {
        let err = ensure_supplied(
            "Katch-McArdle",
            &[OptionField::Weight, OptionField::BodyFat],
            &WeightOnly(Some(0.0)),
            ValidationPolicy::Truthy,
        )
        .unwrap_err();

        assert_eq!(
            err,
            CalcError::missing_required_option("Katch-McArdle", ["weight", "body fat percentage"])
        );
    }

    #[test]
    fn test_ensure_supplied_ok() {
        let result = ensure_supplied(
            "test",
            &[OptionField::Weight],
            &WeightOnly(Some(0.0)),
            ValidationPolicy::Presence,
        );
        assert!(result.is_ok());
    }
}
