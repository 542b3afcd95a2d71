//! Event handling
//!
//! Translates key events into state transitions. Focus decides the
//! dispatch target:
//! - Sidebar: navigate templates, Enter selects one into the form
//! - Form: text editing per field, Enter in the URL field submits
//!
//! Ctrl+S submits from anywhere and Ctrl+B toggles the sidebar (a
//! presentation toggle only). Submit while a request is in flight is a
//! no-op; `ConsoleState::submit` refuses re-entry.

mod form;
mod helpers;
mod sidebar;
mod submit;
mod yank;

use crate::catalog::Catalog;
use crate::state::{ConsoleState, Focus};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// Event handler for managing user input and state updates
#[derive(Debug)]
pub struct EventHandler {
    pub should_quit: bool,
    pub selected_template: usize,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            selected_template: 0,
        }
    }

    /// Poll for one key event and dispatch it
    pub fn handle_events(
        &mut self,
        state: Arc<RwLock<ConsoleState>>,
        list_state: &mut ListState,
        catalog: &Catalog,
        client: &reqwest::Client,
    ) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Global shortcuts work regardless of focus
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('s') => {
                            submit::handle_submit(&state, client);
                            return Ok(());
                        }
                        KeyCode::Char('b') => {
                            let mut s = state.write().unwrap();
                            s.sidebar_visible = !s.sidebar_visible;
                            if !s.sidebar_visible && s.focus == Focus::Sidebar {
                                s.focus_next_field();
                            }
                            return Ok(());
                        }
                        _ => {}
                    }
                }

                let focus = state.read().unwrap().focus;
                match focus {
                    Focus::Sidebar => {
                        sidebar::handle_key(self, key, state, list_state, catalog);
                    }
                    Focus::Form(field) => {
                        form::handle_key(key, field, state, client);
                    }
                }
            }
        }
        Ok(())
    }
}
