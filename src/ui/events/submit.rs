//! Submit handling
//!
//! Runs the submit transition on the console state and, if it produced a
//! draft, dispatches it in the background. Validation failures and the
//! in-flight guard both surface through the state itself.

use super::helpers::log_debug;
use crate::request::execute_request_background;
use crate::state::ConsoleState;
use std::sync::{Arc, RwLock};

pub fn handle_submit(state: &Arc<RwLock<ConsoleState>>, client: &reqwest::Client) {
    let draft = {
        let mut s = state.write().unwrap();
        s.submit()
    };

    if let Some(draft) = draft {
        log_debug(&format!("Dispatching: {} {}", draft.method, draft.url));
        execute_request_background(Arc::clone(state), client.clone(), draft);
    }
}
