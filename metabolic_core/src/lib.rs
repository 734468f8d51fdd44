//! # metabolic_core - Body Composition and Energy Formula Engine
//!
//! `metabolic_core` computes five quantities from caller-supplied body
//! measurements: body mass index, basal metabolic rate, total daily energy
//! expenditure, ideal body weight and daily fluid intake. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions, safe to call from any thread
//! - **Closed equations**: Equation selectors are enums; an unknown equation
//!   can only arrive through text or JSON parsing
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Units
//!
//! Heights in centimeters (BMI: meters), weights in kilograms, ages in years,
//! body fat as a percentage (0-100), activity in minutes per day.
//!
//! ## Quick Start
//!
//! ```rust
//! use metabolic_core::{bmi, bmr, ibw, fluid_intake, BmrEquation, BmrOptions, Gender, IbwEquation};
//!
//! assert_eq!(bmi(1.8, 76.0), 23.5);
//! assert_eq!(ibw(180.0, Gender::Female, IbwEquation::Robinson), 67.5);
//! assert_eq!(fluid_intake(76.0, 160.0), 5.0);
//!
//! let options = BmrOptions {
//!     age: Some(30.0),
//!     height: Some(180.0),
//!     weight: Some(76.0),
//!     gender: Some(Gender::Female),
//!     ..Default::default()
//! };
//! assert_eq!(bmr(BmrEquation::HarrisBenedict, &options).unwrap(), 1578.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Validated, rounded calculations and JSON requests
//! - [`equations`] - Raw formulas and the equation registry
//! - [`options`] - Option fields and requirement checks
//! - [`settings`] - Validation policy
//! - [`units`] - Type-safe unit wrappers
//! - [`rounding`] - Shared rounding helpers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod gender;
pub mod options;
pub mod rounding;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    bmi, bmr, bmr_with_settings, fluid_intake, ibw, tdee, tdee_with_settings, ActivityLevel, BmrEquation,
    BmrOptions, CalculationItem, CalculationOutput, IbwEquation, TdeeEquation, TdeeOptions,
};
pub use errors::{CalcError, CalcResult};
pub use gender::Gender;
pub use settings::{CalcSettings, ValidationPolicy};
