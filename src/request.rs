//! HTTP execution
//!
//! One request at a time, dispatched on a background task so the UI loop
//! keeps drawing. The shared client carries a cookie store, so session
//! cookies set by login-style calls ride along on later requests
//! automatically. No retries, no timeout beyond the client defaults, no
//! cancellation: a dispatched request always settles, and settling always
//! re-enables submit via `ConsoleState::finish`.

use crate::state::ConsoleState;
use crate::types::{Rendered, RequestDraft, RequestOutcome};
use color_eyre::Result;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Build the process-wide client. Cookie persistence is the point: it is the
/// terminal equivalent of `credentials: 'include'`.
pub fn build_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().cookie_store(true).build()?;
    Ok(client)
}

/// Dispatch the draft on a background task and record the outcome in state
pub fn execute_request_background(
    state: Arc<RwLock<ConsoleState>>,
    client: reqwest::Client,
    draft: RequestDraft,
) {
    tokio::spawn(async move {
        let outcome = execute_request(&client, draft).await;
        let mut s = state.write().unwrap();
        s.finish(outcome);
    });
}

async fn execute_request(client: &reqwest::Client, draft: RequestDraft) -> RequestOutcome {
    let mut request = client.request(draft.method.into(), &draft.url);

    for (name, value) in &draft.headers {
        // JSON string values go through as-is; anything else keeps its
        // JSON rendering
        let value = value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string());
        request = request.header(name, value);
    }

    if let Some(body) = draft.body {
        request = request.body(body);
    }

    // Wall clock from just before dispatch to response headers available
    let start = Instant::now();

    match request.send().await {
        Ok(response) => {
            let duration = start.elapsed();

            let status = response.status().as_u16();
            let status_text = response
                .status()
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string();

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            match response.text().await {
                Ok(body) => outcome_from_parts(
                    status,
                    status_text,
                    duration,
                    content_type.as_deref(),
                    &body,
                ),
                Err(e) => RequestOutcome::TransportFailure {
                    error_message: format!("Failed to read response body: {e}"),
                },
            }
        }
        Err(e) => RequestOutcome::TransportFailure {
            error_message: e.to_string(),
        },
    }
}

/// Assemble a response outcome, deciding JSON vs text rendering from the
/// declared content type
fn outcome_from_parts(
    status: u16,
    status_text: String,
    duration: Duration,
    content_type: Option<&str>,
    body: &str,
) -> RequestOutcome {
    RequestOutcome::Response {
        status,
        status_text,
        duration,
        rendered: Rendered::from_parts(content_type, body),
    }
}
