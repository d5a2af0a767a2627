//! Metric calculations for a validated profile.
//!
//! - BMI: weight / height²
//! - BMR: Mifflin-St Jeor, branching on gender
//! - Daily calories: BMR × activity multiplier
//! - Macronutrient grams from daily calories

use crate::config::{BmiConfig, MacroConfig};
use crate::tables::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::{BmiCategory, Config, Gender, MacroTargets, Metrics, UserProfile};

/// Compute BMI, BMR and daily caloric needs
pub fn calculate_metrics(profile: &UserProfile, config: &Config) -> Metrics {
    let bmi = profile.weight_kg / profile.height_m.powi(2);
    let bmr = basal_metabolic_rate(profile);
    let daily_calories = bmr * config.activity.multiplier(profile.activity_level);

    tracing::debug!(bmi, bmr, daily_calories, "Computed metrics");

    Metrics {
        bmi,
        bmr,
        daily_calories,
    }
}

fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let height_cm = profile.height_m * 100.0;
    let weight = profile.weight_kg;
    let age = f64::from(profile.age);

    match profile.gender {
        Gender::Male => 88.362 + 13.397 * weight + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight + 3.098 * height_cm - 4.330 * age,
    }
}

/// Classify a BMI value; the first threshold it is strictly below wins
pub fn classify_bmi(bmi: f64, thresholds: &BmiConfig) -> BmiCategory {
    if bmi < thresholds.underweight {
        BmiCategory::Underweight
    } else if bmi < thresholds.normal {
        BmiCategory::NormalWeight
    } else if bmi < thresholds.overweight {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Split daily calories into grams of each macronutrient
pub fn macro_targets(daily_calories: f64, ratios: &MacroConfig) -> MacroTargets {
    MacroTargets {
        carbs_g: daily_calories * ratios.carbs / KCAL_PER_GRAM_CARBS,
        protein_g: daily_calories * ratios.protein / KCAL_PER_GRAM_PROTEIN,
        fats_g: daily_calories * ratios.fats / KCAL_PER_GRAM_FAT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityLevel, DietaryPreference, Lifestyle};

    const EPSILON: f64 = 1e-6;

    fn male_profile() -> UserProfile {
        UserProfile {
            age: 30,
            gender: Gender::Male,
            height_m: 1.75,
            weight_kg: 70.0,
            activity_level: ActivityLevel::Sedentary,
            sleep_hours: 8,
            lifestyle: Lifestyle::None,
            dietary_pref: DietaryPreference::None,
        }
    }

    fn female_profile() -> UserProfile {
        UserProfile {
            age: 25,
            gender: Gender::Female,
            height_m: 1.65,
            weight_kg: 60.0,
            activity_level: ActivityLevel::ModeratelyActive,
            sleep_hours: 6,
            lifestyle: Lifestyle::None,
            dietary_pref: DietaryPreference::Vegan,
        }
    }

    #[test]
    fn test_bmi_is_weight_over_height_squared() {
        let metrics = calculate_metrics(&male_profile(), &Config::default());
        assert!((metrics.bmi - 22.857142857142858).abs() < 1e-12);
    }

    #[test]
    fn test_male_bmr_and_sedentary_calories() {
        let metrics = calculate_metrics(&male_profile(), &Config::default());
        assert!((metrics.bmr - 1695.667).abs() < EPSILON);
        assert!((metrics.daily_calories - 2034.8004).abs() < EPSILON);
    }

    #[test]
    fn test_female_bmr_and_moderate_calories() {
        let metrics = calculate_metrics(&female_profile(), &Config::default());
        assert!((metrics.bmi - 22.038567493112947).abs() < 1e-9);
        assert!((metrics.bmr - 1405.333).abs() < EPSILON);
        assert!((metrics.daily_calories - 1405.333 * 1.55).abs() < EPSILON);
    }

    #[test]
    fn test_activity_level_scales_calories() {
        let config = Config::default();
        let mut profile = male_profile();
        let base = calculate_metrics(&profile, &config).bmr;

        for (level, multiplier) in [
            (ActivityLevel::Sedentary, 1.2),
            (ActivityLevel::LightlyActive, 1.375),
            (ActivityLevel::ModeratelyActive, 1.55),
            (ActivityLevel::VeryActive, 1.725),
        ] {
            profile.activity_level = level;
            let metrics = calculate_metrics(&profile, &config);
            assert!((metrics.daily_calories - base * multiplier).abs() < EPSILON);
        }
    }

    #[test]
    fn test_configured_multiplier_used() {
        let mut config = Config::default();
        config.activity.sedentary = 1.0;
        let metrics = calculate_metrics(&male_profile(), &config);
        assert_eq!(metrics.daily_calories, metrics.bmr);
    }

    #[test]
    fn test_classify_bmi_thresholds_exclusive() {
        let t = BmiConfig::default();
        assert_eq!(classify_bmi(18.49, &t), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5, &t), BmiCategory::NormalWeight);
        assert_eq!(classify_bmi(24.89, &t), BmiCategory::NormalWeight);
        assert_eq!(classify_bmi(24.9, &t), BmiCategory::Overweight);
        assert_eq!(classify_bmi(29.9, &t), BmiCategory::Obese);
        assert_eq!(classify_bmi(45.0, &t), BmiCategory::Obese);
    }

    #[test]
    fn test_macro_grams_reconstruct_calories() {
        let ratios = MacroConfig::default();
        for calories in [1200.0, 2034.8004, 2178.26615, 3500.5] {
            let m = macro_targets(calories, &ratios);
            let kcal = m.carbs_g * KCAL_PER_GRAM_CARBS
                + m.protein_g * KCAL_PER_GRAM_PROTEIN
                + m.fats_g * KCAL_PER_GRAM_FAT;
            assert!((kcal - calories).abs() < EPSILON);
        }
    }

    #[test]
    fn test_macro_grams_for_known_calories() {
        let m = macro_targets(2000.0, &MacroConfig::default());
        assert!((m.carbs_g - 250.0).abs() < EPSILON);
        assert!((m.protein_g - 100.0).abs() < EPSILON);
        assert!((m.fats_g - 66.666_666_7).abs() < 1e-6);
    }
}
