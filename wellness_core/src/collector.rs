//! Interactive collection of a [`UserProfile`].
//!
//! Every question loops until it gets an acceptable answer. Answers are
//! line-oriented: the whole trimmed line has to parse, and a rejected
//! line is dropped in full so leftover tokens never leak into the next
//! question.

use crate::tables::{AGE_RANGE, HEIGHT_RANGE, SLEEP_HOURS_RANGE, WEIGHT_RANGE};
use crate::{Choice, Error, Result, UserProfile};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

const INVALID_CHOICE: &str = "Invalid input. Please try again.";

/// Question/answer loop over an arbitrary reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
        }
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Ask until `validate` accepts an answer
    ///
    /// `field` names the question in logs and in [`Error::InputClosed`].
    /// `invalid` is printed after each rejected answer.
    pub fn ask_with<T, F>(
        &mut self,
        field: &'static str,
        prompt: &str,
        invalid: &str,
        validate: F,
    ) -> Result<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            self.buf.clear();
            if self.input.read_until(b'\n', &mut self.buf)? == 0 {
                return Err(Error::InputClosed { field });
            }
            let answer = String::from_utf8_lossy(&self.buf);
            let answer = answer.trim();

            if let Some(value) = validate(answer) {
                tracing::debug!(field, answer, "accepted answer");
                return Ok(value);
            }

            tracing::debug!(field, answer, "rejected answer");
            writeln!(self.output, "{}", invalid)?;
        }
    }

    /// Ask for a number inside an inclusive range
    pub fn ask_in_range<T>(
        &mut self,
        field: &'static str,
        prompt: &str,
        range: RangeInclusive<T>,
    ) -> Result<T>
    where
        T: FromStr + PartialOrd + Display,
    {
        let invalid = format!(
            "Invalid input. Please enter a value between {} and {}",
            range.start(),
            range.end()
        );
        self.ask_with(field, prompt, &invalid, |answer| {
            answer.parse::<T>().ok().filter(|v| range.contains(v))
        })
    }

    /// Ask for one of the labels of a closed set, case-insensitively
    pub fn ask_choice<T: Choice>(&mut self, field: &'static str, prompt: &str) -> Result<T> {
        self.ask_with(field, prompt, INVALID_CHOICE, T::parse_label)
    }
}

/// Run the full questionnaire in its fixed order
pub fn collect_profile<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<UserProfile> {
    let age = prompter.ask_in_range("age", "Enter your age: ", AGE_RANGE)?;
    let gender = prompter.ask_choice("gender", "Enter your gender (male/female): ")?;
    let height_m = prompter.ask_in_range("height", "Enter your height (in meters): ", HEIGHT_RANGE)?;
    let weight_kg = prompter.ask_in_range("weight", "Enter your weight (in kg): ", WEIGHT_RANGE)?;
    let activity_level = prompter.ask_choice(
        "activity level",
        "Enter your activity level (sedentary, lightly active, moderately active, very active): ",
    )?;
    let sleep_hours = prompter.ask_in_range(
        "sleep hours",
        "Enter your hours of sleep per night: ",
        SLEEP_HOURS_RANGE,
    )?;
    let lifestyle = prompter.ask_choice(
        "lifestyle",
        "Enter your lifestyle habits (smoking, alcohol, none): ",
    )?;
    let dietary_pref = prompter.ask_choice(
        "dietary preference",
        "Enter your dietary preferences (vegetarian, vegan, none): ",
    )?;

    let profile = UserProfile {
        age,
        gender,
        height_m,
        weight_kg,
        activity_level,
        sleep_hours,
        lifestyle,
        dietary_pref,
    };
    tracing::info!(?profile, "Collected user profile");
    Ok(profile)
}
