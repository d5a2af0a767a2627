//! Configuration file support for the Wellness Bot.
//!
//! A bare run never touches the filesystem: `Config::default()` mirrors
//! the constants in [`crate::tables`]. A TOML file is only read when the
//! caller asks for one with [`Config::load_from`].

use crate::tables;
use crate::{ActivityLevel, Choice, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub activity: ActivityConfig,

    #[serde(default)]
    pub macros: MacroConfig,

    #[serde(default)]
    pub bmi: BmiConfig,

    #[serde(default)]
    pub sleep: SleepConfig,
}

/// BMR multipliers per activity level
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityConfig {
    #[serde(default = "default_sedentary")]
    pub sedentary: f64,

    #[serde(default = "default_lightly_active")]
    pub lightly_active: f64,

    #[serde(default = "default_moderately_active")]
    pub moderately_active: f64,

    #[serde(default = "default_very_active")]
    pub very_active: f64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            sedentary: default_sedentary(),
            lightly_active: default_lightly_active(),
            moderately_active: default_moderately_active(),
            very_active: default_very_active(),
        }
    }
}

impl ActivityConfig {
    pub fn multiplier(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Share of daily calories per macronutrient
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroConfig {
    #[serde(default = "default_carbs")]
    pub carbs: f64,

    #[serde(default = "default_protein")]
    pub protein: f64,

    #[serde(default = "default_fats")]
    pub fats: f64,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            carbs: default_carbs(),
            protein: default_protein(),
            fats: default_fats(),
        }
    }
}

/// Exclusive upper bounds of the BMI categories
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BmiConfig {
    #[serde(default = "default_underweight")]
    pub underweight: f64,

    #[serde(default = "default_normal")]
    pub normal: f64,

    #[serde(default = "default_overweight")]
    pub overweight: f64,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            underweight: default_underweight(),
            normal: default_normal(),
            overweight: default_overweight(),
        }
    }
}

/// Sleep recommendation parameters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SleepConfig {
    #[serde(default = "default_recommended_hours")]
    pub recommended_hours: u32,
}

impl Default for SleepConfig {
    fn default() -> Self {
        Self {
            recommended_hours: default_recommended_hours(),
        }
    }
}

// Default value functions
fn default_sedentary() -> f64 {
    tables::SEDENTARY_MULTIPLIER
}

fn default_lightly_active() -> f64 {
    tables::LIGHTLY_ACTIVE_MULTIPLIER
}

fn default_moderately_active() -> f64 {
    tables::MODERATELY_ACTIVE_MULTIPLIER
}

fn default_very_active() -> f64 {
    tables::VERY_ACTIVE_MULTIPLIER
}

fn default_carbs() -> f64 {
    tables::CARBS_RATIO
}

fn default_protein() -> f64 {
    tables::PROTEIN_RATIO
}

fn default_fats() -> f64 {
    tables::FATS_RATIO
}

fn default_underweight() -> f64 {
    tables::BMI_UNDERWEIGHT
}

fn default_normal() -> f64 {
    tables::BMI_NORMAL
}

fn default_overweight() -> f64 {
    tables::BMI_OVERWEIGHT
}

fn default_recommended_hours() -> u32 {
    tables::RECOMMENDED_SLEEP_HOURS
}

const RATIO_TOLERANCE: f64 = 1e-6;

impl Config {
    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Check that the tables describe a usable assessment
    pub fn validate(&self) -> Result<()> {
        for level in ActivityLevel::ALL {
            let m = self.activity.multiplier(*level);
            if !(m.is_finite() && m > 0.0) {
                return Err(Error::Config(format!(
                    "activity multiplier for {} must be positive, got {}",
                    level, m
                )));
            }
        }

        let ratios = [
            ("carbs", self.macros.carbs),
            ("protein", self.macros.protein),
            ("fats", self.macros.fats),
        ];
        if let Some((name, r)) = ratios.iter().find(|(_, r)| !(r.is_finite() && *r >= 0.0)) {
            return Err(Error::Config(format!(
                "macro ratio for {} must be non-negative, got {}",
                name, r
            )));
        }
        let total: f64 = ratios.iter().map(|(_, r)| r).sum();
        if (total - 1.0).abs() > RATIO_TOLERANCE {
            return Err(Error::Config(format!(
                "macro ratios must sum to 1.0, got {}",
                total
            )));
        }

        let bmi = &self.bmi;
        if !(bmi.underweight < bmi.normal && bmi.normal < bmi.overweight) {
            return Err(Error::Config(format!(
                "BMI thresholds must ascend, got {} / {} / {}",
                bmi.underweight, bmi.normal, bmi.overweight
            )));
        }

        Ok(())
    }
}
