use crate::tui::state::{AppState, Focus, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(v_chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(h_chunks[1]);

    // --- Sidebar ---
    let recipe_items: Vec<ListItem> = state
        .recipes
        .iter()
        .map(|r| ListItem::new(Line::from(r.recipe.recipe_name.as_str())))
        .collect();
    let sidebar_style = if state.active_focus == Focus::Sidebar {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let sidebar = List::new(recipe_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recipes ")
                .border_style(sidebar_style),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Blue),
        );
    f.render_stateful_widget(sidebar, h_chunks[0], &mut state.recipe_state);

    // --- Shopping List ---
    let rows: Vec<ListItem> = state
        .view_indices
        .iter()
        .map(|&idx| {
            let item = &state.list.items()[idx];
            let style = if item.checked {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            let checkbox = if item.checked { "[x]" } else { "[ ]" };
            let row = format!("{} {}", checkbox, item.name);
            ListItem::new(Line::from(vec![
                Span::styled(row, style),
                Span::styled(
                    format!("  {}", item.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let main_style = if state.active_focus == Focus::Main {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = format!(
        " Shopping List ({}/{}) ",
        state.list.checked_count(),
        state.list.total()
    );
    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(main_style),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );
    f.render_stateful_widget(list, main_chunks[0], &mut state.list_state);

    // --- Details Pane ---
    let details_text = match state.active_focus {
        Focus::Sidebar => selected_recipe_details(state),
        Focus::Main => selected_item_details(state),
    };
    let details = Paragraph::new(details_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    f.render_widget(details, main_chunks[1]);

    // --- Footer / Input ---
    let footer_area = v_chunks[1];
    match state.mode {
        InputMode::Adding | InputMode::Searching => {
            let (title, prefix, color) = match state.mode {
                InputMode::Searching => (" Search ", "/ ", Color::Green),
                _ => (" Add Item ", "> ", Color::Yellow),
            };
            let input = Paragraph::new(format!("{}{}", prefix, state.input_buffer))
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(input, footer_area);
            let cursor_x =
                footer_area.x + 1 + prefix.chars().count() as u16 + state.cursor_position as u16;
            let cursor_y = footer_area.y + 1;
            f.set_cursor_position((cursor_x, cursor_y));
        }
        InputMode::Normal => {
            let f_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(footer_area);
            let status = Paragraph::new(state.message.clone())
                .style(Style::default().fg(Color::Cyan))
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                        .title(" Status "),
                );
            let help_text = "Tab:View | /:Find | Space:Check | a:Add | d:Del | s:Save | p:Print | q:Quit";
            let help = Paragraph::new(help_text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right)
                .block(
                    Block::default()
                        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                        .title(" Actions "),
                );
            f.render_widget(status, f_chunks[0]);
            f.render_widget(help, f_chunks[1]);
        }
    }
}

/// Nutrition line for the selected recipe. Absent macros render as em-dash
/// placeholders; the extractor makes no completeness promise.
fn selected_recipe_details(state: &AppState) -> String {
    let Some(idx) = state.recipe_state.selected() else {
        return String::new();
    };
    let Some(saved) = state.recipes.get(idx) else {
        return String::new();
    };

    let dash = || "—".to_string();
    let nutrition = match saved.recipe.nutrition() {
        Some(n) => format!(
            "Calories: {} | Protein: {} | Carbs: {} | Fat: {} | Fiber: {}",
            n.calories.unwrap_or_else(dash),
            n.protein.unwrap_or_else(dash),
            n.carbs.unwrap_or_else(dash),
            n.fat.unwrap_or_else(dash),
            n.fiber.unwrap_or_else(dash),
        ),
        None => "No nutrition data.".to_string(),
    };

    format!(
        "{}\n{} ingredients, {} steps\n{}",
        saved.recipe.recipe_name,
        saved.recipe.ingredient_items().len(),
        saved.recipe.instruction_steps().len(),
        nutrition
    )
}

fn selected_item_details(state: &AppState) -> String {
    let Some(idx) = state.get_selected_master_index() else {
        return String::new();
    };
    let item = &state.list.items()[idx];
    format!(
        "{}\nAisle: {} ({} needed)",
        item.name,
        item.category,
        state.list.needed_count(item.category)
    )
}
