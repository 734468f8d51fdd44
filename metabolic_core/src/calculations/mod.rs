//! # Calculations
//!
//! Each calculation validates its inputs, runs the raw formula from
//! [`equations`](crate::equations) and applies the function's rounding rule.
//!
//! ## Available Calculations
//!
//! - [`bmi`] - Body mass index
//! - [`bmr`] - Basal metabolic rate (Mifflin-St Jeor, Harris-Benedict, Katch-McArdle)
//! - [`tdee`] - Total daily energy expenditure
//! - [`ibw`] - Ideal body weight (Robinson, Miller, Devine, Hamwi)
//! - [`fluid`] - Daily fluid intake
//!
//! ## JSON Requests
//!
//! [`CalculationItem`] wraps every calculation in one tagged type so a
//! request can arrive as JSON:
//!
//! ```rust
//! use metabolic_core::calculations::CalculationItem;
//!
//! let item = CalculationItem::from_json(
//!     r#"{"type": "Bmr", "equation": "katch-mcardle", "options": {"weight": 76, "bodyFat": 10}}"#,
//! ).unwrap();
//!
//! let output = item.calculate().unwrap();
//! assert_eq!(output.value, 1847.0);
//! assert_eq!(output.unit, "kcal/day");
//! ```

pub mod bmi;
pub mod bmr;
pub mod fluid;
pub mod ibw;
pub mod tdee;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CalcError, CalcResult};
use crate::gender::Gender;

// Re-export commonly used types
pub use bmi::{bmi, BmiCategory};
pub use bmr::{bmr, bmr_with_settings, BmrEquation, BmrOptions};
pub use fluid::fluid_intake;
pub use ibw::{ibw, IbwCoefficients, IbwEquation};
pub use tdee::{tdee, tdee_with_settings, ActivityLevel, TdeeEquation, TdeeOptions};

/// Enum wrapper for all calculation types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Body mass index
    Bmi { height_m: f64, weight_kg: f64 },
    /// Basal metabolic rate
    Bmr {
        equation: BmrEquation,
        #[serde(default)]
        options: BmrOptions,
    },
    /// Total daily energy expenditure
    Tdee {
        equation: TdeeEquation,
        #[serde(default)]
        options: TdeeOptions,
    },
    /// Ideal body weight
    Ibw {
        height_cm: f64,
        gender: Gender,
        equation: IbwEquation,
    },
    /// Daily fluid intake
    FluidIntake { weight_kg: f64, active_minutes: f64 },
}

/// The value produced by a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// Calculation type (e.g., "Bmr")
    pub calc_type: String,
    /// Equation display name, for calculations that select one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,
    /// Rounded result
    pub value: f64,
    /// Unit of `value`
    pub unit: String,
}

impl CalculationItem {
    /// Parse a calculation request.
    ///
    /// Equation names are matched flexibly ("mifflin-st jeor", "HB", ...),
    /// and so are gender and activity level ("f", "very active"). An unknown
    /// equation name fails with `InvalidEquation`, an unknown gender or
    /// activity level with `InvalidInput`. Any other malformed input fails
    /// with `SerializationError`.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let mut value: Value = serde_json::from_str(json).map_err(|e| CalcError::serialization(e.to_string()))?;
        normalize_equation(&mut value)?;
        normalize_selectors(&mut value)?;
        serde_json::from_value(value).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Bmi { .. } => "Bmi",
            CalculationItem::Bmr { .. } => "Bmr",
            CalculationItem::Tdee { .. } => "Tdee",
            CalculationItem::Ibw { .. } => "Ibw",
            CalculationItem::FluidIntake { .. } => "FluidIntake",
        }
    }

    /// Unit of the calculated value
    pub fn unit(&self) -> &'static str {
        match self {
            CalculationItem::Bmi { .. } => "kg/m^2",
            CalculationItem::Bmr { .. } | CalculationItem::Tdee { .. } => "kcal/day",
            CalculationItem::Ibw { .. } => "kg",
            CalculationItem::FluidIntake { .. } => "L",
        }
    }

    /// Run the calculation with default settings.
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        let (value, equation) = match self {
            CalculationItem::Bmi { height_m, weight_kg } => (bmi(*height_m, *weight_kg), None),
            CalculationItem::Bmr { equation, options } => (bmr(*equation, options)?, Some(equation.display_name())),
            CalculationItem::Tdee { equation, options } => (tdee(*equation, options)?, Some(equation.display_name())),
            CalculationItem::Ibw {
                height_cm,
                gender,
                equation,
            } => (ibw(*height_cm, *gender, *equation), Some(equation.display_name())),
            CalculationItem::FluidIntake {
                weight_kg,
                active_minutes,
            } => (fluid_intake(*weight_kg, *active_minutes), None),
        };

        Ok(CalculationOutput {
            calc_type: self.calc_type().to_string(),
            equation: equation.map(str::to_string),
            value,
            unit: self.unit().to_string(),
        })
    }
}

/// Replace a flexibly spelled `equation` with its canonical serialized name.
fn normalize_equation(value: &mut Value) -> CalcResult<()> {
    let (Some(kind), Some(name)) = (
        value.get("type").and_then(Value::as_str),
        value.get("equation").and_then(Value::as_str),
    ) else {
        return Ok(());
    };

    let canonical = match kind {
        "Bmr" => serde_json::to_value(BmrEquation::from_str_flexible(name)?),
        "Tdee" => serde_json::to_value(TdeeEquation::from_str_flexible(name)?),
        "Ibw" => serde_json::to_value(IbwEquation::from_str_flexible(name)?),
        _ => return Ok(()),
    }
    .map_err(|e| CalcError::serialization(e.to_string()))?;

    value["equation"] = canonical;
    Ok(())
}

/// Replace flexibly spelled gender and activity level strings, at the top
/// level or inside `options`, with their canonical serialized names.
fn normalize_selectors(value: &mut Value) -> CalcResult<()> {
    normalize_field(value, "gender", Gender::from_str_flexible)?;

    if let Some(options) = value.get_mut("options") {
        normalize_field(options, "gender", Gender::from_str_flexible)?;
        normalize_field(options, "activity_level", ActivityLevel::from_str_flexible)?;
        normalize_field(options, "activityLevel", ActivityLevel::from_str_flexible)?;
    }
    Ok(())
}

fn normalize_field<T: Serialize>(value: &mut Value, key: &str, parse: fn(&str) -> CalcResult<T>) -> CalcResult<()> {
    let Some(slot) = value.get_mut(key) else {
        return Ok(());
    };
    let Some(text) = slot.as_str() else {
        return Ok(());
    };

    *slot = serde_json::to_value(parse(text)?).map_err(|e| CalcError::serialization(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tdee_item() {
        let item = CalculationItem::from_json(
            r#"{
                "type": "Tdee",
                "equation": "Mifflin",
                "options": {"age": 30, "height": 180, "weight": 78, "gender": "Female", "activity_level": "ExtraActive"}
            }"#,
        )
        .unwrap();

        let output = item.calculate().unwrap();
        assert_eq!(output.calc_type, "Tdee");
        assert_eq!(output.equation.as_deref(), Some("Mifflin-St Jeor"));
        assert_eq!(output.value, 3029.0);
    }

    #[test]
    fn test_ibw_and_fluid_items() {
        let ibw_item = CalculationItem::Ibw {
            height_cm: 180.0,
            gender: Gender::Male,
            equation: IbwEquation::Devine,
        };
        assert_eq!(ibw_item.calculate().unwrap().value, 75.0);

        let fluid_item = CalculationItem::from_json(r#"{"type": "FluidIntake", "weight_kg": 76, "active_minutes": 160}"#).unwrap();
        let output = fluid_item.calculate().unwrap();
        assert_eq!(output.value, 5.0);
        assert_eq!(output.unit, "L");
        assert_eq!(output.equation, None);
    }

    #[test]
    fn test_unknown_equation_is_invalid_equation() {
        let err = CalculationItem::from_json(r#"{"type": "Ibw", "height_cm": 180, "gender": "Male", "equation": "Broca"}"#)
            .unwrap_err();
        assert_eq!(err, CalcError::invalid_equation("ibw", "Broca"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = CalculationItem::from_json(r#"{"type": "Bmi", "height_m": 1.8"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = CalculationItem::from_json(r#"{"type": "Bmi", "height_m": "tall", "weight_kg": 76}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_selectors_parse_flexibly() {
        let item = CalculationItem::from_json(
            r#"{
                "type": "Tdee",
                "equation": "katch",
                "options": {"weight": 78, "bodyFat": 10, "activityLevel": "extra active"}
            }"#,
        )
        .unwrap();
        assert_eq!(item.calculate().unwrap().value, 3583.0);

        let item = CalculationItem::from_json(
            r#"{
                "type": "Bmr",
                "equation": "hb",
                "options": {"age": 30, "height": 180, "weight": 76, "gender": "f"}
            }"#,
        )
        .unwrap();
        assert_eq!(item.calculate().unwrap().value, 1578.0);

        let item =
            CalculationItem::from_json(r#"{"type": "Ibw", "height_cm": 180, "gender": "woman", "equation": "robinson"}"#)
                .unwrap();
        assert_eq!(item.calculate().unwrap().value, 67.5);
    }

    #[test]
    fn test_unknown_activity_level_is_invalid_input() {
        let err = CalculationItem::from_json(
            r#"{"type": "Tdee", "equation": "Katch", "options": {"weight": 78, "bodyFat": 10, "activity_level": "couch"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_missing_options_propagate() {
        let item = CalculationItem::from_json(r#"{"type": "Bmr", "equation": "HarrisBenedict"}"#).unwrap();
        let err = item.calculate().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_REQUIRED_OPTION");
    }

    #[test]
    fn test_item_serialization() {
        let item = CalculationItem::Bmi {
            height_m: 1.8,
            weight_kg: 76.0,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"type":"Bmi","height_m":1.8,"weight_kg":76.0}"#);

        let roundtrip = CalculationItem::from_json(&json).unwrap();
        assert_eq!(roundtrip, item);
        assert_eq!(roundtrip.calculate().unwrap().value, 23.5);
    }
}
