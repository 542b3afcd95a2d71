//! Sidebar key handling
//!
//! Navigation over the template list plus template selection. Selecting an
//! unknown index is a no-op; the catalog is fixed, so that only happens on
//! an empty catalog.

use super::helpers::log_debug;
use super::{yank, EventHandler};
use crate::catalog::Catalog;
use crate::state::ConsoleState;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

pub fn handle_key(
    handler: &mut EventHandler,
    key: KeyEvent,
    state: Arc<RwLock<ConsoleState>>,
    list_state: &mut ListState,
    catalog: &Catalog,
) {
    match key.code {
        KeyCode::Char('q') => {
            handler.should_quit = true;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if handler.selected_template > 0 {
                handler.selected_template -= 1;
                list_state.select(Some(handler.selected_template));
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let max_index = catalog.len().saturating_sub(1);
            if handler.selected_template < max_index {
                handler.selected_template += 1;
                list_state.select(Some(handler.selected_template));
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let name = catalog
                .get_index(handler.selected_template)
                .map(|t| t.name.clone());
            if let Some(name) = name {
                select_template_by_name(&state, catalog, &name);
            }
        }
        KeyCode::Tab => {
            state.write().unwrap().focus_next_field();
        }
        KeyCode::Char('y') => {
            yank::handle_yank_response(state);
        }
        _ => {}
    }
}

/// Populate the form from the named template.
/// An unknown name is a catalog mistake and selects nothing.
fn select_template_by_name(state: &Arc<RwLock<ConsoleState>>, catalog: &Catalog, name: &str) {
    if let Some(template) = catalog.get(name) {
        log_debug(&format!("Selected template: {}", template.name));
        state.write().unwrap().select_template(template);
    }
}
