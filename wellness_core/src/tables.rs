//! Fixed reference values shared by every assessment.

use std::ops::RangeInclusive;

// ============================================================================
// Input Bounds (inclusive)
// ============================================================================

pub const AGE_RANGE: RangeInclusive<u32> = 1..=120;
/// Meters
pub const HEIGHT_RANGE: RangeInclusive<f64> = 0.5..=2.5;
/// Kilograms
pub const WEIGHT_RANGE: RangeInclusive<f64> = 20.0..=300.0;
pub const SLEEP_HOURS_RANGE: RangeInclusive<u32> = 0..=24;

// ============================================================================
// Activity Multipliers
// ============================================================================

/// Multipliers applied to BMR
pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
pub const LIGHTLY_ACTIVE_MULTIPLIER: f64 = 1.375;
pub const MODERATELY_ACTIVE_MULTIPLIER: f64 = 1.55;
pub const VERY_ACTIVE_MULTIPLIER: f64 = 1.725;

// ============================================================================
// Macronutrients
// ============================================================================

/// Share of daily calories from carbohydrates
pub const CARBS_RATIO: f64 = 0.50;
/// Share of daily calories from protein
pub const PROTEIN_RATIO: f64 = 0.20;
/// Share of daily calories from fats
pub const FATS_RATIO: f64 = 0.30;

pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ============================================================================
// Thresholds
// ============================================================================

/// BMI upper bounds (exclusive), ascending
pub const BMI_UNDERWEIGHT: f64 = 18.5;
pub const BMI_NORMAL: f64 = 24.9;
pub const BMI_OVERWEIGHT: f64 = 29.9;

/// Nightly hours below which more sleep is recommended
pub const RECOMMENDED_SLEEP_HOURS: u32 = 7;
