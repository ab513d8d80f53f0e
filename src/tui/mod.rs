pub mod state;
pub mod view;

use crate::config::Config;
use crate::library::Library;
use crate::model::ShoppingItem;
use crate::model::parser::clean_shopping_line;
use crate::storage::DiskStore;
use crate::tui::state::{AppState, Focus, InputMode};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{fs, io, time::Duration};

fn print_filename(recipe_name: &str) -> String {
    let slug: String = recipe_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "shopping_list.txt".to_string()
    } else {
        format!("shopping_list_{}.txt", slug)
    }
}

pub fn run() -> Result<()> {
    // Logs go to stderr and only when RUST_LOG is set, so init before the
    // alternate screen takes over.
    env_logger::init();

    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("stagkitchen_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let config = Config::load();
    let library = Library::new(DiskStore);
    let mut app_state = AppState::new();

    match library.recipes() {
        Ok(recipes) => app_state.recipes = recipes,
        Err(e) => app_state.message = format!("Error: {}", e),
    }
    if !app_state.recipes.is_empty() {
        app_state.load_recipe(0);
        app_state.message = format!("Recipes: {}", app_state.recipes.len());
    }

    loop {
        terminal.draw(|f| view::draw(f, &mut app_state))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = event::read()?;

        match ev {
            // --- MOUSE HANDLING ---
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollDown => app_state.next(),
                MouseEventKind::ScrollUp => app_state.previous(),
                _ => {}
            },

            // --- KEYBOARD HANDLING ---
            Event::Key(key) => match app_state.mode {
                InputMode::Adding => match key.code {
                    KeyCode::Enter => {
                        let input = app_state.input_buffer.trim().to_string();
                        if !input.is_empty() {
                            match clean_shopping_line(&input) {
                                Some(name) => {
                                    app_state.list.push(ShoppingItem::new(name));
                                    app_state.recalculate_view();
                                    app_state.message = "Added.".to_string();
                                }
                                None => {
                                    app_state.message = "Item too short.".to_string();
                                }
                            }
                        }
                        app_state.mode = InputMode::Normal;
                        app_state.reset_input();
                    }
                    KeyCode::Esc => {
                        app_state.mode = InputMode::Normal;
                        app_state.reset_input();
                    }
                    KeyCode::Char(c) => app_state.enter_char(c),
                    KeyCode::Backspace => app_state.delete_char(),
                    KeyCode::Left => app_state.move_cursor_left(),
                    KeyCode::Right => app_state.move_cursor_right(),
                    _ => {}
                },

                InputMode::Searching => match key.code {
                    KeyCode::Enter | KeyCode::Esc => {
                        app_state.mode = InputMode::Normal;
                        app_state.reset_input();
                        app_state.recalculate_view();
                    }
                    KeyCode::Char(c) => {
                        app_state.enter_char(c);
                        app_state.recalculate_view();
                    }
                    KeyCode::Backspace => {
                        app_state.delete_char();
                        app_state.recalculate_view();
                    }
                    KeyCode::Left => app_state.move_cursor_left(),
                    KeyCode::Right => app_state.move_cursor_right(),
                    _ => {}
                },

                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Tab => app_state.toggle_focus(),

                    // Navigation
                    KeyCode::Down | KeyCode::Char('j') => app_state.next(),
                    KeyCode::Up | KeyCode::Char('k') => app_state.previous(),
                    KeyCode::PageDown => app_state.jump_forward(10),
                    KeyCode::PageUp => app_state.jump_backward(10),

                    KeyCode::Char('/') => {
                        app_state.mode = InputMode::Searching;
                        app_state.reset_input();
                        app_state.recalculate_view();
                    }
                    KeyCode::Char('a') => {
                        app_state.mode = InputMode::Adding;
                        app_state.reset_input();
                        app_state.message = "Example: 2 cups flour".to_string();
                    }

                    KeyCode::Enter => {
                        if app_state.active_focus == Focus::Sidebar
                            && let Some(idx) = app_state.recipe_state.selected()
                            && idx < app_state.recipes.len()
                        {
                            app_state.load_recipe(idx);
                            app_state.active_focus = Focus::Main;
                            app_state.message = format!("Loaded '{}'.", app_state.recipe_name);
                        }
                    }

                    KeyCode::Char(' ') => {
                        if app_state.active_focus == Focus::Main
                            && let Some(idx) = app_state.get_selected_master_index()
                        {
                            let id = app_state.list.items()[idx].id.clone();
                            app_state.list.toggle(&id);
                            app_state.message = format!(
                                "{} of {} ingredients ready.",
                                app_state.list.checked_count(),
                                app_state.list.total()
                            );
                        }
                    }

                    KeyCode::Char('d') => match app_state.active_focus {
                        Focus::Main => {
                            if let Some(idx) = app_state.get_selected_master_index() {
                                let id = app_state.list.items()[idx].id.clone();
                                app_state.list.remove(&id);
                                app_state.recalculate_view();
                                app_state.message = "Removed.".to_string();
                            }
                        }
                        Focus::Sidebar => {
                            if let Some(idx) = app_state.recipe_state.selected()
                                && idx < app_state.recipes.len()
                            {
                                let id = app_state.recipes[idx].id.clone();
                                match library.delete_recipe(&id) {
                                    Ok(_) => {
                                        app_state.recipes.remove(idx);
                                        if idx >= app_state.recipes.len() && idx > 0 {
                                            app_state.recipe_state.select(Some(idx - 1));
                                        }
                                        app_state.message = "Recipe deleted.".to_string();
                                    }
                                    Err(e) => app_state.message = format!("Error: {}", e),
                                }
                            }
                        }
                    },

                    KeyCode::Char('s') => {
                        if app_state.list.is_empty() {
                            app_state.message = "Nothing to save.".to_string();
                        } else {
                            let record = app_state.list.to_saved(&app_state.recipe_name);
                            match library.save_shopping_list(record) {
                                Ok(()) => {
                                    app_state.message = format!(
                                        "Shopping list for '{}' saved.",
                                        app_state.recipe_name
                                    );
                                }
                                Err(e) => app_state.message = format!("Error: {}", e),
                            }
                        }
                    }

                    KeyCode::Char('p') => {
                        if app_state.list.is_empty() {
                            app_state.message = "Nothing to print.".to_string();
                        } else {
                            let doc = app_state
                                .list
                                .render_printable(&app_state.recipe_name, config.printable_unchecked_only);
                            let filename = print_filename(&app_state.recipe_name);
                            match fs::write(&filename, doc) {
                                Ok(()) => app_state.message = format!("Wrote {}", filename),
                                Err(e) => app_state.message = format!("Error: {}", e),
                            }
                        }
                    }

                    _ => {}
                },
            },
            _ => {} // Handle Resize events etc if needed
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
