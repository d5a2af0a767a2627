#![forbid(unsafe_code)]

//! Core domain model and business logic for the Wellness Bot.
//!
//! This crate provides:
//! - Domain types (profile, categorical inputs, metrics)
//! - Constant tables (activity multipliers, macro ratios, BMI thresholds)
//! - Input collection with re-prompting validation
//! - Metrics calculation (BMI, BMR, daily calories, macros)
//! - Report building and rendering

pub mod types;
pub mod error;
pub mod tables;
pub mod config;
pub mod logging;
pub mod collector;
pub mod calculator;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use collector::{collect_profile, Prompter};
pub use calculator::{calculate_metrics, classify_bmi, macro_targets};
pub use report::{OutputFormat, Recommendation, Report, Topic};
