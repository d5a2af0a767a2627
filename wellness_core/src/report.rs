//! Report building and rendering.
//!
//! A [`Report`] is assembled once from an [`Assessment`] and can then be
//! rendered as the plain-text report or serialized to JSON. Every
//! recommendation topic branches on its own field only.

use crate::calculator::{classify_bmi, macro_targets};
use crate::{
    Assessment, BmiCategory, Config, DietaryPreference, Lifestyle, MacroTargets, Metrics, Result,
    UserProfile,
};
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// How a report is written out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Recommendation subject, in report order
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Exercise,
    Sleep,
    Nutrition,
    Lifestyle,
}

impl Topic {
    pub fn heading(&self) -> &'static str {
        match self {
            Topic::Exercise => "Exercise Recommendations",
            Topic::Sleep => "Sleep Recommendations",
            Topic::Nutrition => "Nutritional Recommendations",
            Topic::Lifestyle => "Lifestyle Recommendations",
        }
    }
}

/// One block of advice lines
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Recommendation {
    pub topic: Topic,
    pub lines: Vec<&'static str>,
}

/// Everything printed for one assessment
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub profile: UserProfile,
    pub metrics: Metrics,
    pub bmi_category: BmiCategory,
    pub macros: MacroTargets,
    pub recommendations: Vec<Recommendation>,
}

impl Report {
    pub fn build(assessment: &Assessment, config: &Config) -> Self {
        let Assessment { profile, metrics } = assessment;

        let mut recommendations = vec![
            exercise_advice(metrics.bmi, config),
            sleep_advice(profile.sleep_hours, config),
            nutrition_advice(profile.dietary_pref),
        ];
        recommendations.extend(lifestyle_advice(profile.lifestyle));

        Report {
            profile: profile.clone(),
            metrics: *metrics,
            bmi_category: classify_bmi(metrics.bmi, &config.bmi),
            macros: macro_targets(metrics.daily_calories, &config.macros),
            recommendations,
        }
    }

    /// Look up the advice for one topic, if it is part of this report
    pub fn recommendation(&self, topic: Topic) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.topic == topic)
    }

    pub fn write_to<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Text => write!(out, "{}", self)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

// The exercise branch compares against the upper bound of "normal" rather
// than the computed category, so overweight and obese share one message.
fn exercise_advice(bmi: f64, config: &Config) -> Recommendation {
    let lines = if bmi >= config.bmi.normal {
        vec![
            "Start with low-impact activities like walking or swimming",
            "Aim for 150 minutes of moderate activity per week",
            "Include strength training 2-3 times per week",
        ]
    } else {
        vec![
            "Maintain a balanced exercise routine",
            "Mix cardio with strength training",
            "Consider adding flexibility exercises",
        ]
    };
    Recommendation {
        topic: Topic::Exercise,
        lines,
    }
}

fn sleep_advice(sleep_hours: u32, config: &Config) -> Recommendation {
    let lines = if sleep_hours < config.sleep.recommended_hours {
        vec![
            "Aim to increase sleep to 7-8 hours per night",
            "Establish a regular sleep schedule",
            "Create a relaxing bedtime routine",
        ]
    } else {
        vec![
            "Maintain your good sleep habits",
            "Consider sleep quality improvements",
        ]
    };
    Recommendation {
        topic: Topic::Sleep,
        lines,
    }
}

fn nutrition_advice(pref: DietaryPreference) -> Recommendation {
    let lines = match pref {
        DietaryPreference::Vegetarian => vec![
            "Focus on complete protein sources (eggs, dairy, legumes)",
            "Monitor B12 and iron intake",
        ],
        DietaryPreference::Vegan => vec![
            "Ensure adequate B12 supplementation",
            "Combine protein sources for complete amino acids",
            "Monitor iron, calcium, and vitamin D intake",
        ],
        DietaryPreference::None => vec![
            "Choose lean protein sources",
            "Include a variety of colorful vegetables",
            "Limit processed foods",
        ],
    };
    Recommendation {
        topic: Topic::Nutrition,
        lines,
    }
}

fn lifestyle_advice(lifestyle: Lifestyle) -> Option<Recommendation> {
    let lines = match lifestyle {
        Lifestyle::None => return None,
        Lifestyle::Smoking => vec![
            "Consider smoking cessation programs",
            "Consult healthcare provider about cessation aids",
        ],
        Lifestyle::Alcohol => vec![
            "Limit alcohol consumption",
            "Consider alcohol-free days",
            "Stay hydrated",
        ],
    };
    Some(Recommendation {
        topic: Topic::Lifestyle,
        lines,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Wellness Assessment Results ===\n")?;
        writeln!(
            f,
            "BMI: {:.2} - Category: {}",
            self.metrics.bmi, self.bmi_category
        )?;

        writeln!(f, "\nBMR: {:.2} calories/day", self.metrics.bmr)?;
        writeln!(
            f,
            "Daily Caloric Needs: {:.2} calories",
            self.metrics.daily_calories
        )?;

        writeln!(f, "\nRecommended Macronutrient Distribution:")?;
        writeln!(f, "  - Carbohydrates: {:.2} grams", self.macros.carbs_g)?;
        writeln!(f, "  - Protein: {:.2} grams", self.macros.protein_g)?;
        writeln!(f, "  - Fats: {:.2} grams", self.macros.fats_g)?;

        writeln!(f, "\n=== Personalized Recommendations ===")?;
        for rec in &self.recommendations {
            writeln!(f, "\n{}:", rec.topic.heading())?;
            for line in &rec.lines {
                writeln!(f, "- {}", line)?;
            }
        }
        Ok(())
    }
}
