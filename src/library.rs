// File: ./src/library.rs
// Saved-record operations over a key-value store. Saving is always an
// explicit user action; nothing here runs automatically on list rebuilds.
use crate::model::{MealPlan, Recipe, SavedMealPlan, SavedRecipe};
use crate::shopping::SavedShoppingList;
use crate::storage::{KeyValue, SAVED_MEAL_PLANS_KEY, SAVED_RECIPES_KEY, SHOPPING_LISTS_KEY};
use anyhow::Result;

pub struct Library<S: KeyValue> {
    store: S,
}

impl<S: KeyValue> Library<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn recipes(&self) -> Result<Vec<SavedRecipe>> {
        Ok(self.store.get(SAVED_RECIPES_KEY)?.unwrap_or_default())
    }

    /// Appends a recipe unless one with the same name is already saved.
    /// Returns `None` for the duplicate case so the caller can message it.
    pub fn save_recipe(&self, recipe: Recipe) -> Result<Option<SavedRecipe>> {
        let mut recipes = self.recipes()?;
        if recipes
            .iter()
            .any(|r| r.recipe.recipe_name == recipe.recipe_name)
        {
            return Ok(None);
        }
        let saved = SavedRecipe::new(recipe);
        recipes.push(saved.clone());
        self.store.set(SAVED_RECIPES_KEY, &recipes)?;
        Ok(Some(saved))
    }

    pub fn delete_recipe(&self, id: &str) -> Result<bool> {
        let mut recipes = self.recipes()?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        let removed = recipes.len() != before;
        if removed {
            self.store.set(SAVED_RECIPES_KEY, &recipes)?;
        }
        Ok(removed)
    }

    pub fn shopping_lists(&self) -> Result<Vec<SavedShoppingList>> {
        Ok(self.store.get(SHOPPING_LISTS_KEY)?.unwrap_or_default())
    }

    pub fn save_shopping_list(&self, list: SavedShoppingList) -> Result<()> {
        self.store
            .modify(SHOPPING_LISTS_KEY, |lists: &mut Vec<SavedShoppingList>| {
                lists.push(list);
            })
    }

    pub fn delete_shopping_list(&self, id: &str) -> Result<bool> {
        let mut lists = self.shopping_lists()?;
        let before = lists.len();
        lists.retain(|l| l.id != id);
        let removed = lists.len() != before;
        if removed {
            self.store.set(SHOPPING_LISTS_KEY, &lists)?;
        }
        Ok(removed)
    }

    pub fn meal_plans(&self) -> Result<Vec<SavedMealPlan>> {
        Ok(self.store.get(SAVED_MEAL_PLANS_KEY)?.unwrap_or_default())
    }

    pub fn save_meal_plan(&self, plan: MealPlan) -> Result<SavedMealPlan> {
        let saved = SavedMealPlan::new(plan);
        let record = saved.clone();
        self.store
            .modify(SAVED_MEAL_PLANS_KEY, |plans: &mut Vec<SavedMealPlan>| {
                plans.push(record);
            })?;
        Ok(saved)
    }

    pub fn delete_meal_plan(&self, id: &str) -> Result<bool> {
        let mut plans = self.meal_plans()?;
        let before = plans.len();
        plans.retain(|p| p.id != id);
        let removed = plans.len() != before;
        if removed {
            self.store.set(SAVED_MEAL_PLANS_KEY, &plans)?;
        }
        Ok(removed)
    }
}
