// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod categorize;
pub mod item;
pub mod nutrition;
pub mod parser;

// Re-export types so callers can use `crate::model::Recipe` etc.
pub use categorize::{Category, categorize};
pub use item::{
    DailyTotals, Difficulty, Meal, MealPlan, MealType, Recipe, SavedMealPlan, SavedRecipe,
    ShoppingItem,
};
pub use nutrition::NutritionSummary;
