//! Form key handling
//!
//! Each field interprets keys its own way: the method selector cycles, the
//! URL field submits on Enter (matching the browser convention of sending
//! from the address-like field), and the headers/body fields accept
//! multi-line JSON.

use super::submit;
use crate::state::{ConsoleState, Focus, FormField};
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::{Arc, RwLock};

pub fn handle_key(
    key: KeyEvent,
    field: FormField,
    state: Arc<RwLock<ConsoleState>>,
    client: &reqwest::Client,
) {
    // Focus movement is shared by all fields
    match key.code {
        KeyCode::Esc => {
            state.write().unwrap().focus = Focus::Sidebar;
            return;
        }
        KeyCode::Tab => {
            state.write().unwrap().focus_next_field();
            return;
        }
        KeyCode::BackTab => {
            state.write().unwrap().focus_prev_field();
            return;
        }
        _ => {}
    }

    match field {
        FormField::Method => handle_method_key(key, &state),
        FormField::Url => {
            if key.code == KeyCode::Enter {
                // Enter in the URL field submits
                submit::handle_submit(&state, client);
            } else {
                let mut s = state.write().unwrap();
                s.url.handle_key_event(key);
            }
        }
        FormField::Headers => {
            let mut s = state.write().unwrap();
            if key.code == KeyCode::Enter {
                s.headers.insert_newline();
            } else {
                s.headers.handle_key_event(key);
            }
        }
        FormField::Body => {
            let mut s = state.write().unwrap();
            if key.code == KeyCode::Enter {
                s.body.insert_newline();
            } else {
                s.body.handle_key_event(key);
            }
        }
    }
}

fn handle_method_key(key: KeyEvent, state: &Arc<RwLock<ConsoleState>>) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            let mut s = state.write().unwrap();
            let next = s.method.next();
            s.change_method(next);
        }
        KeyCode::Left | KeyCode::Char('h') => {
            let mut s = state.write().unwrap();
            let prev = s.method.prev();
            s.change_method(prev);
        }
        _ => {}
    }
}
