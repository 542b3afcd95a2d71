//! Yank (copy) handlers
//!
//! Copies the rendered response body to the system clipboard.

use super::helpers::log_debug;
use crate::state::ConsoleState;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};

/// Copy the displayed outcome body to the clipboard, if there is one
pub fn handle_yank_response(state: Arc<RwLock<ConsoleState>>) {
    let body = {
        let s = state.read().unwrap();
        s.outcome_body_text()
    };

    let Some(body) = body else {
        log_debug("Nothing to yank: no response displayed");
        return;
    };

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(body) {
            Ok(()) => log_debug("Yanked response body to clipboard"),
            Err(e) => log_debug(&format!("Clipboard write failed: {}", e)),
        },
        Err(e) => log_debug(&format!("Clipboard unavailable: {}", e)),
    }
}
