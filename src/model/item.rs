// File: ./src/model/item.rs
// Data types shared across the crate. Field names serialize in camelCase to
// stay compatible with the generator's structured output and the persisted
// saved-record formats.
use crate::model::categorize::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    /// Free text. Use `ingredient_items()` for a structured view.
    pub ingredients: String,
    /// Free text. Use `instruction_steps()` for a structured view.
    pub instructions: String,
    #[serde(default)]
    pub nutritional_info: Option<String>,
    #[serde(default)]
    pub photo_data_uri: Option<String>,
    #[serde(default)]
    pub image_analysis: Option<String>,
    #[serde(default)]
    pub youtube_link: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedRecipe {
    pub id: String,
    #[serde(flatten)]
    pub recipe: Recipe,
}

impl SavedRecipe {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recipe,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub calories: u32,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: Difficulty,
}

/// Whole-day macro totals as reported by the generator (grams, kcal).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub total_calories: u32,
    pub total_protein: u32,
    pub total_carbs: u32,
    pub total_fat: u32,
    pub total_fiber: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub daily_plan: DailyTotals,
    pub meals: Vec<Meal>,
    /// Extra ingredients needed beyond what the user already has.
    #[serde(default)]
    pub shopping_list: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedMealPlan {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub plan: MealPlan,
}

impl SavedMealPlan {
    pub fn new(plan: MealPlan) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            plan,
        }
    }
}

/// One checkable line of a shopping list. Identity is the `id`; everything
/// except `checked` is fixed at creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub checked: bool,
    pub category: Category,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let category = crate::model::categorize::categorize(&name);
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            checked: false,
            category,
        }
    }
}
