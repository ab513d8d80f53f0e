// File: ./src/generate.rs
// Typed boundary to the recipe/meal-plan generator. The model invocation
// itself is an opaque remote capability behind the `Generator` trait; this
// module owns the request shapes, their validation, and the reshaping of the
// structured response back into model types.
use crate::model::{MealPlan, Recipe};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MIN_TARGET_CALORIES: u32 = 800;
pub const MAX_TARGET_CALORIES: u32 = 5000;
pub const MIN_MEAL_COUNT: u8 = 3;
pub const MAX_MEAL_COUNT: u8 = 6;
pub const DEFAULT_MEAL_COUNT: u8 = 4;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ImageType {
    Ingredients,
    FinishedDish,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    /// Comma-separated list of available ingredients. May be empty when
    /// images carry the ingredient information instead.
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub dietary_preferences: Option<String>,
    /// Base64 data URIs.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub image_type: Option<ImageType>,
}

impl RecipeRequest {
    pub fn validate(&self) -> Result<()> {
        if self.ingredients.trim().is_empty() && self.images.is_empty() {
            bail!("request needs ingredients or at least one image");
        }
        Ok(())
    }
}

fn default_meal_count() -> u8 {
    DEFAULT_MEAL_COUNT
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    pub ingredients: String,
    pub target_calories: u32,
    #[serde(default)]
    pub dietary_preferences: Option<String>,
    /// Free text: bulking, cutting, recomposition, maintenance.
    #[serde(default)]
    pub fitness_goal: Option<String>,
    #[serde(default = "default_meal_count")]
    pub meal_count: u8,
    #[serde(default)]
    pub images: Vec<String>,
}

impl MealPlanRequest {
    pub fn validate(&self) -> Result<()> {
        if self.ingredients.trim().is_empty() {
            bail!("missing required fields: ingredients and targetCalories");
        }
        if !(MIN_TARGET_CALORIES..=MAX_TARGET_CALORIES).contains(&self.target_calories) {
            bail!(
                "targetCalories must be between {} and {}",
                MIN_TARGET_CALORIES,
                MAX_TARGET_CALORIES
            );
        }
        if !(MIN_MEAL_COUNT..=MAX_MEAL_COUNT).contains(&self.meal_count) {
            bail!(
                "mealCount must be between {} and {}",
                MIN_MEAL_COUNT,
                MAX_MEAL_COUNT
            );
        }
        Ok(())
    }
}

/// Opaque generation capability: given a validated request, return
/// structured output matching the schema. Implementations live outside this
/// crate (remote API, fixtures in tests).
pub trait Generator {
    fn generate_recipe(&self, request: &RecipeRequest) -> Result<Recipe>;
    fn generate_meal_plan(&self, request: &MealPlanRequest) -> Result<MealPlan>;
}

/// Splits a `data:<mime>;base64,<data>` URI into (mime type, payload).
/// Malformed URIs yield `None` and are skipped by callers.
pub fn split_data_uri(uri: &str) -> Option<(String, String)> {
    let (header, data) = uri.split_once(',')?;
    let mime = header.split_once(':')?.1.split_once(';')?.0;
    if mime.is_empty() || data.is_empty() {
        return None;
    }
    Some((mime.to_string(), data.to_string()))
}

fn reshape<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T> {
    let value: Value =
        serde_json::from_str(json).with_context(|| format!("{} response is not JSON", what))?;
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        log::warn!("{} generation failed upstream: {}", what, message);
        bail!("{}", message);
    }
    serde_json::from_value(value).with_context(|| format!("{} response did not match schema", what))
}

/// Reshapes a raw generator response (or an `{"error": ...}` payload) into a
/// typed recipe.
pub fn parse_recipe_json(json: &str) -> Result<Recipe> {
    reshape(json, "recipe")
}

pub fn parse_meal_plan_json(json: &str) -> Result<MealPlan> {
    reshape(json, "meal plan")
}
