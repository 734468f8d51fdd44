//! # Anthropometric Formulas
//!
//! Body mass index, the linear ideal-body-weight model shared by the
//! Robinson, Miller, Devine and Hamwi equations, and daily fluid intake.
//! Results are unrounded.

use crate::units::{Centimeters, Feet, FluidOunces, Inches, Kilograms, Liters, Pounds};

/// Body mass index, w / h²
///
/// # Arguments
/// * `height_m` - Height in meters
/// * `weight_kg` - Weight in kilograms
#[inline]
pub fn body_mass_index(height_m: f64, weight_kg: f64) -> f64 {
    weight_kg / height_m.powi(2)
}

/// Inches above (negative: below) five feet for a height in centimeters
#[inline]
pub fn inches_above_five_feet(height_cm: f64) -> f64 {
    let feet: Feet = Centimeters(height_cm).into();
    let above: Inches = (feet - Feet(5.0)).into();
    above.value()
}

/// IBW = baseline + multiplier · (inches above five feet)
///
/// The line is not clamped, so heights under five feet extrapolate
/// below the baseline.
#[inline]
pub fn ideal_body_weight(height_cm: f64, baseline_kg: f64, multiplier_kg_per_in: f64) -> f64 {
    baseline_kg + inches_above_five_feet(height_cm) * multiplier_kg_per_in
}

/// Daily fluid intake in liters, unfloored
///
/// # Formula
/// - base  = 0.67 fl oz per lb of body weight
/// - extra = 12 fl oz per 30 minutes of activity
/// - V = (base + extra) converted to liters
#[inline]
pub fn daily_fluid_intake(weight_kg: f64, active_minutes: f64) -> f64 {
    let pounds: Pounds = Kilograms(weight_kg).into();
    let base = FluidOunces(pounds.value() * 0.67);
    let extra = FluidOunces((active_minutes / 30.0) * 12.0);
    let liters: Liters = (base + extra).into();
    liters.value()
}
