use crate::model::parser::{clean_shopping_line, split_ingredient_lines};
use crate::model::{Category, ShoppingItem};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A checklist built from one recipe's ingredient text. Rebuilt whenever the
/// source text changes; only user toggles mutate it in between.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Parses ingredient text into categorized, unchecked items. Header
    /// lines and sub-two-character leftovers are dropped; everything that
    /// survives gets a fresh id.
    pub fn from_ingredients(text: &str) -> Self {
        let items = split_ingredient_lines(text)
            .iter()
            .filter_map(|line| clean_shopping_line(line))
            .map(ShoppingItem::new)
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    pub fn unchecked_count(&self) -> usize {
        self.total() - self.checked_count()
    }

    /// Flips one item's checked state. Returns false when the id is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.checked = !item.checked;
            true
        } else {
            false
        }
    }

    pub fn push(&mut self, item: ShoppingItem) {
        self.items.push(item);
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Items grouped by aisle, in the fixed category order. Per-category
    /// item order is insertion order. Empty categories are omitted.
    pub fn grouped(&self) -> Vec<(Category, Vec<&ShoppingItem>)> {
        Category::ALL
            .iter()
            .filter_map(|cat| {
                let in_cat: Vec<&ShoppingItem> =
                    self.items.iter().filter(|i| i.category == *cat).collect();
                if in_cat.is_empty() {
                    None
                } else {
                    Some((*cat, in_cat))
                }
            })
            .collect()
    }

    /// Unchecked items still to pick up in one aisle.
    pub fn needed_count(&self, category: Category) -> usize {
        self.items
            .iter()
            .filter(|i| i.category == category && !i.checked)
            .count()
    }

    /// Plain-text print document: one section per aisle with checkbox
    /// glyphs, optionally filtered to what still needs buying.
    pub fn render_printable(&self, recipe_name: &str, unchecked_only: bool) -> String {
        let mut out = String::new();
        out.push_str("SHOPPING LIST\n");
        out.push_str(&format!("Recipe: {}\n", recipe_name));
        out.push_str(&format!(
            "Generated on: {}\n",
            Local::now().format("%Y-%m-%d")
        ));

        for (category, items) in self.grouped() {
            let visible: Vec<&&ShoppingItem> = items
                .iter()
                .filter(|i| !unchecked_only || !i.checked)
                .collect();
            if visible.is_empty() {
                continue;
            }
            out.push_str(&format!("\n{}\n", category));
            for item in visible {
                let glyph = if item.checked { "[x]" } else { "[ ]" };
                out.push_str(&format!("{} {}\n", glyph, item.name));
            }
        }
        out
    }

    /// Snapshot of the unchecked remainder for persistence. Checked items
    /// are already in the kitchen; only the rest is worth saving.
    pub fn to_saved(&self, recipe_name: &str) -> SavedShoppingList {
        SavedShoppingList {
            id: Uuid::new_v4().to_string(),
            recipe_name: recipe_name.to_string(),
            items: self.items.iter().filter(|i| !i.checked).cloned().collect(),
            created_at: Utc::now(),
        }
    }
}

/// Persisted shopping-list record (flat JSON array under the external
/// `shopping_lists` key).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedShoppingList {
    pub id: String,
    pub recipe_name: String,
    pub items: Vec<ShoppingItem>,
    pub created_at: DateTime<Utc>,
}
