use crate::model::{Category, SavedRecipe};
use crate::shopping::ShoppingList;
use ratatui::widgets::ListState;

#[derive(PartialEq, Clone, Copy)]
pub enum Focus {
    Sidebar,
    Main,
}

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Adding,
    Searching,
}

pub struct AppState {
    pub recipes: Vec<SavedRecipe>,
    /// Active checklist, rebuilt when a recipe is selected.
    pub list: ShoppingList,
    pub recipe_name: String,
    /// Indices into `list.items()`, in grouped aisle order, filtered by the
    /// search query when one is active.
    pub view_indices: Vec<usize>,
    pub list_state: ListState,
    pub recipe_state: ListState,
    pub active_focus: Focus,
    pub mode: InputMode,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub message: String,
}

impl AppState {
    pub fn new() -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        let mut r_state = ListState::default();
        r_state.select(Some(0));
        Self {
            recipes: vec![],
            list: ShoppingList::default(),
            recipe_name: String::new(),
            view_indices: vec![],
            list_state: l_state,
            recipe_state: r_state,
            active_focus: Focus::Main,
            mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            message: "Tab: View | /: Find | Space: Check | s: Save".to_string(),
        }
    }

    /// Rebuilds the checklist from the selected saved recipe.
    pub fn load_recipe(&mut self, index: usize) {
        if let Some(saved) = self.recipes.get(index) {
            self.recipe_name = saved.recipe.recipe_name.clone();
            self.list = ShoppingList::from_ingredients(&saved.recipe.ingredients);
            self.list_state.select(Some(0));
            self.recalculate_view();
        }
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        self.input_buffer.insert(self.cursor_position, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    /// Flattens the grouped view into navigable indices. Aisle order is
    /// fixed; items keep their insertion order within an aisle.
    pub fn recalculate_view(&mut self) {
        let query = if self.mode == InputMode::Searching && !self.input_buffer.is_empty() {
            Some(self.input_buffer.to_lowercase())
        } else {
            None
        };

        self.view_indices.clear();
        for cat in Category::ALL {
            for (i, item) in self.list.items().iter().enumerate() {
                if item.category != cat {
                    continue;
                }
                if let Some(q) = &query
                    && !item.name.to_lowercase().contains(q)
                {
                    continue;
                }
                self.view_indices.push(i);
            }
        }

        let sel = self.list_state.selected().unwrap_or(0);
        if self.view_indices.is_empty() {
            self.list_state.select(Some(0));
        } else if sel >= self.view_indices.len() {
            self.list_state.select(Some(self.view_indices.len() - 1));
        }
    }

    pub fn get_selected_master_index(&self) -> Option<usize> {
        if let Some(view_idx) = self.list_state.selected()
            && view_idx < self.view_indices.len()
        {
            return Some(self.view_indices[view_idx]);
        }
        None
    }

    pub fn next(&mut self) {
        match self.active_focus {
            Focus::Main => {
                let len = self.view_indices.len();
                if len == 0 {
                    return;
                }
                let i = match self.list_state.selected() {
                    Some(i) => {
                        if i >= len - 1 {
                            0
                        } else {
                            i + 1
                        }
                    }
                    None => 0,
                };
                self.list_state.select(Some(i));
            }
            Focus::Sidebar => {
                let len = self.recipes.len();
                if len == 0 {
                    return;
                }
                let i = match self.recipe_state.selected() {
                    Some(i) => {
                        if i >= len - 1 {
                            0
                        } else {
                            i + 1
                        }
                    }
                    None => 0,
                };
                self.recipe_state.select(Some(i));
            }
        }
    }

    pub fn previous(&mut self) {
        match self.active_focus {
            Focus::Main => {
                let len = self.view_indices.len();
                if len == 0 {
                    return;
                }
                let i = match self.list_state.selected() {
                    Some(i) => {
                        if i == 0 { len - 1 } else { i - 1 }
                    }
                    None => 0,
                };
                self.list_state.select(Some(i));
            }
            Focus::Sidebar => {
                let len = self.recipes.len();
                if len == 0 {
                    return;
                }
                let i = match self.recipe_state.selected() {
                    Some(i) => {
                        if i == 0 { len - 1 } else { i - 1 }
                    }
                    None => 0,
                };
                self.recipe_state.select(Some(i));
            }
        }
    }

    pub fn jump_forward(&mut self, step: usize) {
        match self.active_focus {
            Focus::Main => {
                if self.view_indices.is_empty() {
                    return;
                }
                let current = self.list_state.selected().unwrap_or(0);
                let new_index = (current + step).min(self.view_indices.len() - 1);
                self.list_state.select(Some(new_index));
            }
            Focus::Sidebar => {
                if self.recipes.is_empty() {
                    return;
                }
                let current = self.recipe_state.selected().unwrap_or(0);
                let new_index = (current + step).min(self.recipes.len() - 1);
                self.recipe_state.select(Some(new_index));
            }
        }
    }

    pub fn jump_backward(&mut self, step: usize) {
        match self.active_focus {
            Focus::Main => {
                if self.view_indices.is_empty() {
                    return;
                }
                let current = self.list_state.selected().unwrap_or(0);
                let new_index = current.saturating_sub(step);
                self.list_state.select(Some(new_index));
            }
            Focus::Sidebar => {
                if self.recipes.is_empty() {
                    return;
                }
                let current = self.recipe_state.selected().unwrap_or(0);
                let new_index = current.saturating_sub(step);
                self.recipe_state.select(Some(new_index));
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.active_focus = match self.active_focus {
            Focus::Main => Focus::Sidebar,
            Focus::Sidebar => Focus::Main,
        }
    }
}
