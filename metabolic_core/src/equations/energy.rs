//! # Energy Expenditure Formulas
//!
//! Raw basal metabolic rate equations and the activity scaling used for
//! TDEE. These functions do no validation and no final rounding; the
//! [`calculations`](crate::calculations) layer handles both.
//!
//! ## Notation
//!
//! - `w` = Body weight (kg)
//! - `h` = Height (cm)
//! - `a` = Age (years)
//! - `bf` = Body fat (%)
//!
//! ## References
//!
//! - Mifflin et al. (1990), Am J Clin Nutr 51(2):241-247
//! - Roza and Shizgal (1984), Am J Clin Nutr 40(1):168-182
//! - McArdle, Katch and Katch, Exercise Physiology

use crate::gender::Gender;

/// Mifflin-St Jeor resting energy expenditure (kcal/day)
///
/// # Formula
/// - BMR = 10w + 6.25h - 5a + 5     (male)
/// - BMR = 10w + 6.25h - 5a - 161   (female)
#[inline]
pub fn mifflin_st_jeor(age: f64, height_cm: f64, weight_kg: f64, gender: Gender) -> f64 {
    let s = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + s
}

/// Revised Harris-Benedict basal metabolic rate (kcal/day)
///
/// # Formula (Roza and Shizgal, 1984)
/// - male:   13.397w + 4.799h - 5.677a + 88.362
/// - female:  9.247w + 3.098h - 4.330a + 447.593
#[inline]
pub fn harris_benedict(age: f64, height_cm: f64, weight_kg: f64, gender: Gender) -> f64 {
    let (kw, kh, ka, c) = match gender {
        Gender::Male => (13.397, 4.799, 5.677, 88.362),
        Gender::Female => (9.247, 3.098, 4.33, 447.593),
    };
    kw * weight_kg + kh * height_cm - ka * age + c
}

/// Lean body mass (kg) for a total weight and body fat percentage
///
/// LBM = w(100 - bf)/100
#[inline]
pub fn lean_body_mass(weight_kg: f64, body_fat_pct: f64) -> f64 {
    weight_kg * ((100.0 - body_fat_pct) / 100.0)
}

/// Katch-McArdle basal metabolic rate (kcal/day), floored
///
/// BMR = floor(370 + 21.6·LBM)
#[inline]
pub fn katch_mcardle(weight_kg: f64, body_fat_pct: f64) -> f64 {
    (370.0 + 21.6 * lean_body_mass(weight_kg, body_fat_pct)).floor()
}

/// Scale a basal rate by an activity multiplier
#[inline]
pub fn apply_activity_multiplier(bmr_kcal: f64, multiplier: f64) -> f64 {
    bmr_kcal * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mifflin_reference_subject() {
        // 10(76) + 6.25(180) - 5(30) + 5 = 1740
        assert_eq!(mifflin_st_jeor(30.0, 180.0, 76.0, Gender::Male), 1740.0);
        assert_eq!(mifflin_st_jeor(30.0, 180.0, 76.0, Gender::Female), 1574.0);
    }

    #[test]
    fn test_harris_benedict_unrounded() {
        let male = harris_benedict(30.0, 180.0, 76.0, Gender::Male);
        assert!((male - 1800.044).abs() < 1e-9);

        let female = harris_benedict(30.0, 180.0, 76.0, Gender::Female);
        assert!((female - 1578.105).abs() < 1e-9);
    }

    #[test]
    fn test_katch_floors() {
        // 370 + 21.6 * 68.4 = 1847.44
        assert_eq!(katch_mcardle(76.0, 10.0), 1847.0);
        assert!((lean_body_mass(76.0, 10.0) - 68.4).abs() < 1e-9);
    }

    #[test]
    fn test_katch_zero_body_fat() {
        // 370 + 21.6 * 76 = 2011.6
        assert_eq!(katch_mcardle(76.0, 0.0), 2011.0);
    }
}
