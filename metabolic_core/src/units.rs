//! # Unit Types
//!
//! Type-safe wrappers for body measurements. These are plain f64 newtypes
//! that serialize as bare numbers; the public formula functions take raw
//! `f64` in their documented units and use these wrappers internally for the
//! conversions the formulas need.
//!
//! ## Units
//!
//! - Length: centimeters (cm), feet (ft), inches (in)
//! - Mass: kilograms (kg), pounds (lb)
//! - Volume: imperial fluid ounces (fl oz), liters (L)
//!
//! The conversion factors are the ones the formulas were published with
//! (1 kg = 2.20462 lb, 1 imperial fl oz = 0.0284131 L).
//!
//! ## Example
//!
//! ```rust
//! use metabolic_core::units::{Centimeters, Feet, Inches};
//!
//! let height = Centimeters(152.4);
//! let feet: Feet = height.into();
//! assert!((feet.0 - 5.0).abs() < 1e-12);
//!
//! let inches: Inches = feet.into();
//! assert!((inches.0 - 60.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

/// Liters per imperial fluid ounce
pub const LITERS_PER_FL_OZ: f64 = 0.0284131;

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Centimeters> for Feet {
    fn from(cm: Centimeters) -> Self {
        Feet(cm.0 / CM_PER_FOOT)
    }
}

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 * LB_PER_KG)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in imperial fluid ounces
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FluidOunces(pub f64);

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<FluidOunces> for Liters {
    fn from(oz: FluidOunces) -> Self {
        Liters(oz.0 * LITERS_PER_FL_OZ)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Pounds);
impl_arithmetic!(FluidOunces);
impl_arithmetic!(Liters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centimeters_to_feet() {
        let ft: Feet = Centimeters(182.88).into();
        assert!((ft.0 - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_kilograms_to_pounds() {
        let lb: Pounds = Kilograms(100.0).into();
        assert!((lb.0 - 220.462).abs() < 1e-9);
    }

    #[test]
    fn test_fluid_ounces_to_liters() {
        let l: Liters = FluidOunces(100.0).into();
        assert!((l.0 - 2.84131).abs() < 1e-12);
    }

    #[test]
    fn test_feet_to_inches() {
        let inches: Inches = (Feet(6.0) - Feet(5.0)).into();
        assert_eq!(inches.value(), 12.0);

        // Heights under five feet convert to a negative offset
        let below: Inches = (Feet(4.5) - Feet(5.0)).into();
        assert_eq!(below.value(), -6.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = FluidOunces(10.0);
        let b = FluidOunces(5.0);
        assert_eq!((a + b).value(), 15.0);
        assert_eq!((a - b).value(), 5.0);
    }

    #[test]
    fn test_serialization() {
        let kg = Kilograms(76.5);
        let json = serde_json::to_string(&kg).unwrap();
        assert_eq!(json, "76.5");

        let roundtrip: Kilograms = serde_json::from_str(&json).unwrap();
        assert_eq!(kg, roundtrip);
    }
}
