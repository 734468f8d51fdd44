//! # Metabolic and Anthropometric Equations
//!
//! This module contains the raw formulas used by the calculations. Having
//! equations in one place enables:
//! - Easy verification against the published sources
//! - Documentation of constants and units
//! - One registry shared by validation and generated docs
//!
//! ## Modules
//!
//! - [`energy`] - BMR equations and activity scaling
//! - [`body`] - BMI, ideal body weight and fluid intake
//! - [`registry`] - Equation metadata, required inputs and EQUATIONS.md generation

pub mod body;
pub mod energy;
pub mod registry;

pub use body::{body_mass_index, daily_fluid_intake, ideal_body_weight, inches_above_five_feet};

pub use energy::{apply_activity_multiplier, harris_benedict, katch_mcardle, lean_body_mass, mifflin_st_jeor};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
