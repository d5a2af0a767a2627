//! Core domain types for the Wellness Bot.
//!
//! This module defines the fundamental types used throughout the system:
//! - Categorical answers (gender, activity level, lifestyle, diet)
//! - The validated user profile
//! - Derived metrics and their classifications

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Categorical Inputs
// ============================================================================

/// A closed set of answers accepted at a prompt.
///
/// The allowed labels live here once and serve both input validation
/// and display.
pub trait Choice: Copy + Sized + 'static {
    /// Every variant, in prompt order
    const ALL: &'static [Self];

    /// Canonical lowercase label
    fn label(&self) -> &'static str;

    /// Case-insensitive match against the canonical labels
    fn parse_label(input: &str) -> Option<Self> {
        let wanted = input.trim().to_lowercase();
        Self::ALL.iter().copied().find(|c| c.label() == wanted)
    }
}

/// Error returned when a string names no known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind}: {value:?}")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
}

fn parse_choice<T: Choice>(kind: &'static str, s: &str) -> Result<T, ParseChoiceError> {
    T::parse_label(s).ok_or_else(|| ParseChoiceError {
        kind,
        value: s.to_string(),
    })
}

/// Biological sex used by the BMR equation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female];

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Self-reported activity level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    #[serde(rename = "sedentary")]
    Sedentary,
    #[serde(rename = "lightly active")]
    LightlyActive,
    #[serde(rename = "moderately active")]
    ModeratelyActive,
    #[serde(rename = "very active")]
    VeryActive,
}

impl Choice for ActivityLevel {
    const ALL: &'static [Self] = &[
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];

    fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly active",
            ActivityLevel::ModeratelyActive => "moderately active",
            ActivityLevel::VeryActive => "very active",
        }
    }
}

/// Lifestyle habit worth a recommendation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Lifestyle {
    Smoking,
    Alcohol,
    None,
}

impl Choice for Lifestyle {
    const ALL: &'static [Self] = &[Lifestyle::Smoking, Lifestyle::Alcohol, Lifestyle::None];

    fn label(&self) -> &'static str {
        match self {
            Lifestyle::Smoking => "smoking",
            Lifestyle::Alcohol => "alcohol",
            Lifestyle::None => "none",
        }
    }
}

/// Dietary preference
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    None,
}

impl Choice for DietaryPreference {
    const ALL: &'static [Self] = &[
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::None,
    ];

    fn label(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::None => "none",
        }
    }
}

impl FromStr for Gender {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("gender", s)
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("activity level", s)
    }
}

impl FromStr for Lifestyle {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("lifestyle", s)
    }
}

impl FromStr for DietaryPreference {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("dietary preference", s)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Lifestyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Profile and Metrics
// ============================================================================

/// A fully validated set of answers from one run
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    /// Height in meters
    pub height_m: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub sleep_hours: u32,
    pub lifestyle: Lifestyle,
    pub dietary_pref: DietaryPreference,
}

/// Values derived from a profile by the calculator
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    pub bmi: f64,
    /// Basal metabolic rate in kcal/day
    pub bmr: f64,
    /// BMR scaled by the activity multiplier, in kcal/day
    pub daily_calories: f64,
}

/// A profile together with its computed metrics
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    pub profile: UserProfile,
    pub metrics: Metrics,
}

/// BMI classification bucket
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended daily macronutrient intake in grams
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fats_g: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_is_case_insensitive() {
        for input in ["male", "MALE", "Male", "  mAlE \n"] {
            assert_eq!(input.parse::<Gender>().unwrap(), Gender::Male);
        }
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn test_activity_level_with_space() {
        assert_eq!(
            "Moderately Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert!("moderately".parse::<ActivityLevel>().is_err());
        assert!("moderatelyactive".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_unknown_value_rejected() {
        let err = "other".parse::<Gender>().unwrap_err();
        assert_eq!(err.kind, "gender");
        assert_eq!(err.value, "other");
        assert!("".parse::<Lifestyle>().is_err());
        assert!("keto".parse::<DietaryPreference>().is_err());
    }

    #[test]
    fn test_display_matches_label() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.to_string(), level.label());
            assert_eq!(level.label().parse::<ActivityLevel>().unwrap(), *level);
        }
        assert_eq!(Lifestyle::None.to_string(), "none");
        assert_eq!(DietaryPreference::Vegan.to_string(), "vegan");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"very active\"");
        let gender: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(gender, Gender::Female);
        let category = serde_json::to_string(&BmiCategory::NormalWeight).unwrap();
        assert_eq!(category, "\"normal_weight\"");
    }

    #[test]
    fn test_bmi_category_labels() {
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal weight");
        assert_eq!(BmiCategory::Obese.label(), "Obese");
    }
}
