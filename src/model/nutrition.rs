// File: ./src/model/nutrition.rs
// Best-effort macro extraction from a generated nutrition blurb. The
// upstream text format is not stable, so every field is optional and the
// values stay strings ("20g", "250-300") all the way to display.
use crate::model::item::Recipe;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref CALORIES_LABEL: Regex =
        Regex::new(r"(?i)calories?\s*:?\s*(\d+(?:\s*[-–]\s*\d+)?)")
            .expect("calories pattern should be valid");
    // "350 kcal" / "around 350 calories per serving"
    static ref CALORIES_UNIT: Regex =
        Regex::new(r"(?i)(\d+(?:\s*[-–]\s*\d+)?)\s*(?:kcal|calories|per serving)")
            .expect("calories unit pattern should be valid");
    static ref PROTEIN: Regex = Regex::new(r"(?i)protein\s*:?\s*(\d+(?:\s*[-–]\s*\d+)?\s*g?)")
        .expect("protein pattern should be valid");
    static ref CARBS: Regex =
        Regex::new(r"(?i)carb(?:ohydrate)?s?\s*:?\s*(\d+(?:\s*[-–]\s*\d+)?\s*g?)")
            .expect("carbs pattern should be valid");
    static ref FAT: Regex = Regex::new(r"(?i)fat\s*:?\s*(\d+(?:\s*[-–]\s*\d+)?\s*g?)")
        .expect("fat pattern should be valid");
    static ref FIBER: Regex = Regex::new(r"(?i)fib(?:er|re)\s*:?\s*(\d+(?:\s*[-–]\s*\d+)?\s*g?)")
        .expect("fiber pattern should be valid");
}

/// Partial record of extracted macro values. Absent fields are the caller's
/// problem to placeholder, not an error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionSummary {
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
    pub fiber: Option<String>,
}

impl NutritionSummary {
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
            && self.fiber.is_none()
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Extracts whatever macros the text mentions. `None` when the input is
/// empty or nothing matched at all.
pub fn extract(text: &str) -> Option<NutritionSummary> {
    if text.trim().is_empty() {
        return None;
    }

    // Markdown bold markers and ragged spacing throw the label patterns off.
    let normalized = text.replace('*', "");
    let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

    let summary = NutritionSummary {
        calories: capture(&CALORIES_LABEL, &normalized)
            .or_else(|| capture(&CALORIES_UNIT, &normalized)),
        protein: capture(&PROTEIN, &normalized),
        carbs: capture(&CARBS, &normalized),
        fat: capture(&FAT, &normalized),
        fiber: capture(&FIBER, &normalized),
    };

    if summary.is_empty() { None } else { Some(summary) }
}

impl Recipe {
    /// Macro summary parsed out of `nutritional_info`, if any.
    pub fn nutrition(&self) -> Option<NutritionSummary> {
        self.nutritional_info.as_deref().and_then(extract)
    }
}
