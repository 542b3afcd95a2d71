//! Console state machine
//!
//! All form and display state lives in `ConsoleState` and changes only
//! through the named transitions below (select_template, change_method,
//! submit, finish). The UI layer renders this state and feeds key events
//! into it, so every behavioral contract is testable without a terminal.

use crate::editor::FieldEditor;
use crate::types::{EndpointTemplate, HttpMethod, RequestDraft, RequestOutcome, SubmitError};

/// Default message shown in the response panel before any request
pub const DEFAULT_PLACEHOLDER: &str = "Press [Ctrl+S] to send this request.";

/// Shown while a request is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// Which form field currently receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Method,
    Url,
    Headers,
    Body,
}

/// Where keyboard focus is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Form(FormField),
}

/// What the response panel currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    Placeholder,
    /// Template note shown in place of the placeholder
    Note(String),
    SubmitError(SubmitError),
    Loading,
    Outcome(RequestOutcome),
}

/// The status line above the response panel
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIndicator {
    Hidden,
    Shown { text: String, success: bool },
}

#[derive(Debug)]
pub struct ConsoleState {
    pub method: HttpMethod,
    pub url: FieldEditor,
    pub headers: FieldEditor,
    pub body: FieldEditor,

    /// Body section visibility. A display concern only: hiding never clears
    /// the field's content.
    pub body_visible: bool,

    pub display: Display,
    pub status: StatusIndicator,

    /// True while a request is in flight; submit is disabled until the
    /// request settles
    pub sending: bool,

    pub focus: Focus,
    pub sidebar_visible: bool,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            url: FieldEditor::new(),
            headers: FieldEditor::new(),
            body: FieldEditor::new(),
            body_visible: false,
            display: Display::Placeholder,
            status: StatusIndicator::Hidden,
            sending: false,
            focus: Focus::Sidebar,
            sidebar_visible: true,
        }
    }
}

impl ConsoleState {
    /// Populate the form from a template.
    ///
    /// Method and URL are copied verbatim; headers are pretty-printed JSON.
    /// A present body forces the body section visible regardless of method;
    /// an absent body clears the field and falls back to the method rule.
    pub fn select_template(&mut self, template: &EndpointTemplate) {
        self.method = template.method;
        self.url.set_content(template.url.clone());
        self.headers.set_content(template.headers_json());

        if let Some(body) = &template.body {
            let pretty =
                serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
            self.body.set_content(pretty);
            self.body_visible = true;
        } else {
            self.body.clear();
            self.body_visible = template.method.allows_body();
        }

        self.display = match &template.note {
            Some(note) => Display::Note(note.clone()),
            None => Display::Placeholder,
        };
        self.status = StatusIndicator::Hidden;
    }

    /// Change the selected method. GET/DELETE hide the body section, other
    /// methods show it; the body field content is preserved underneath.
    pub fn change_method(&mut self, method: HttpMethod) {
        self.method = method;
        self.body_visible = method.allows_body();
    }

    /// Validate the form and build the outgoing request
    pub fn build_draft(&self) -> Result<RequestDraft, SubmitError> {
        let url = self.url.content().trim().to_string();
        if url.is_empty() {
            return Err(SubmitError::MissingUrl);
        }

        let headers = if self.headers.is_blank() {
            serde_json::Map::new()
        } else {
            serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(
                self.headers.content(),
            )
            .map_err(|_| SubmitError::InvalidHeadersJson)?
        };

        let body = if self.method.allows_body() && !self.body.is_blank() {
            // Validate only; the raw text is sent, never re-serialized
            serde_json::from_str::<serde_json::Value>(self.body.content())
                .map_err(|_| SubmitError::InvalidBodyJson)?;
            Some(self.body.content().to_string())
        } else {
            None
        };

        Ok(RequestDraft {
            method: self.method,
            url,
            headers,
            body,
        })
    }

    /// Submit transition. Returns the draft to dispatch, or None when
    /// validation failed or a request is already in flight.
    pub fn submit(&mut self) -> Option<RequestDraft> {
        if self.sending {
            return None;
        }

        match self.build_draft() {
            Ok(draft) => {
                self.begin_submit();
                Some(draft)
            }
            Err(err) => {
                self.display = Display::SubmitError(err);
                self.status = StatusIndicator::Hidden;
                None
            }
        }
    }

    /// Show the loading placeholder and disable submit.
    /// Replaces whatever outcome was displayed before.
    fn begin_submit(&mut self) {
        self.display = Display::Loading;
        self.status = StatusIndicator::Hidden;
        self.sending = true;
    }

    /// Record the settled outcome. Always re-enables submit, whether the
    /// request succeeded, returned an error status, or failed in transport.
    pub fn finish(&mut self, outcome: RequestOutcome) {
        self.status = StatusIndicator::Shown {
            text: outcome.status_line(),
            success: outcome.ok(),
        };
        self.display = Display::Outcome(outcome);
        self.sending = false;
    }

    /// The response panel text for the current display state
    pub fn display_text(&self) -> String {
        match &self.display {
            Display::Placeholder => DEFAULT_PLACEHOLDER.to_string(),
            Display::Note(note) => format!("Note: {note}\n\n{DEFAULT_PLACEHOLDER}"),
            Display::SubmitError(err) => err.message().to_string(),
            Display::Loading => LOADING_TEXT.to_string(),
            Display::Outcome(outcome) => outcome.body_text(),
        }
    }

    /// The form field with focus, if the form has it at all
    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            Focus::Form(field) => Some(field),
            Focus::Sidebar => None,
        }
    }

    /// Move focus to the next form field, skipping the body field while the
    /// body section is hidden
    pub fn focus_next_field(&mut self) {
        let current = match self.focus {
            Focus::Form(field) => field,
            Focus::Sidebar => {
                self.focus = Focus::Form(FormField::Method);
                return;
            }
        };

        let next = match current {
            FormField::Method => FormField::Url,
            FormField::Url => FormField::Headers,
            FormField::Headers => {
                if self.body_visible {
                    FormField::Body
                } else {
                    FormField::Method
                }
            }
            FormField::Body => FormField::Method,
        };
        self.focus = Focus::Form(next);
    }

    /// Move focus to the previous form field, skipping a hidden body section
    pub fn focus_prev_field(&mut self) {
        let current = match self.focus {
            Focus::Form(field) => field,
            Focus::Sidebar => {
                self.focus = Focus::Form(FormField::Method);
                return;
            }
        };

        let prev = match current {
            FormField::Method => {
                if self.body_visible {
                    FormField::Body
                } else {
                    FormField::Headers
                }
            }
            FormField::Url => FormField::Method,
            FormField::Headers => FormField::Url,
            FormField::Body => FormField::Headers,
        };
        self.focus = Focus::Form(prev);
    }

    /// The copyable body panel text, when an outcome is displayed
    pub fn outcome_body_text(&self) -> Option<String> {
        match &self.display {
            Display::Outcome(outcome) => Some(outcome.body_text()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::Rendered;
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn template(
        name: &str,
        method: HttpMethod,
        body: Option<serde_json::Value>,
        note: Option<&str>,
    ) -> EndpointTemplate {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        EndpointTemplate {
            name: name.to_string(),
            method,
            url: format!("http://localhost:8080/api/{name}"),
            headers,
            body,
            note: note.map(str::to_string),
        }
    }

    #[test]
    fn test_select_template_populates_form_verbatim() {
        let mut state = ConsoleState::default();
        let t = template(
            "create",
            HttpMethod::Post,
            Some(serde_json::json!({"name": "Jane"})),
            None,
        );

        state.select_template(&t);

        assert_eq!(state.method, HttpMethod::Post);
        assert_eq!(state.url.content(), "http://localhost:8080/api/create");
        assert_eq!(
            state.headers.content(),
            "{\n  \"Content-Type\": \"application/json\"\n}"
        );
        assert_eq!(state.body.content(), "{\n  \"name\": \"Jane\"\n}");
        assert!(state.body_visible);
        assert_eq!(state.display, Display::Placeholder);
        assert_eq!(state.status, StatusIndicator::Hidden);
    }

    #[test]
    fn test_select_template_without_body_hides_section_for_get() {
        let mut state = ConsoleState::default();
        state.body.set_content("leftover".to_string());
        state.body_visible = true;

        state.select_template(&template("list", HttpMethod::Get, None, None));

        assert_eq!(state.body.content(), "");
        assert!(!state.body_visible);
    }

    #[test]
    fn test_select_template_without_body_shows_section_for_put() {
        let mut state = ConsoleState::default();

        state.select_template(&template("update", HttpMethod::Put, None, None));

        assert_eq!(state.body.content(), "");
        assert!(state.body_visible);
    }

    #[test]
    fn test_select_template_with_body_always_shows_section() {
        // A declared body wins over the method rule even for GET
        let mut state = ConsoleState::default();
        let t = template("odd", HttpMethod::Get, Some(serde_json::json!({"q": 1})), None);

        state.select_template(&t);

        assert!(state.body_visible);
    }

    #[test]
    fn test_select_template_note_replaces_placeholder() {
        let mut state = ConsoleState::default();
        let t = template("logout", HttpMethod::Post, None, Some("Cookie sent automatically"));

        state.select_template(&t);

        assert_eq!(
            state.display,
            Display::Note("Cookie sent automatically".to_string())
        );
        assert!(state.display_text().starts_with("Note: Cookie sent automatically"));
    }

    #[test]
    fn test_select_template_clears_previous_status() {
        let mut state = ConsoleState::default();
        state.status = StatusIndicator::Shown {
            text: "200 OK (5ms)".to_string(),
            success: true,
        };

        state.select_template(&template("health", HttpMethod::Get, None, None));

        assert_eq!(state.status, StatusIndicator::Hidden);
    }

    #[test]
    fn test_select_every_builtin_template_matches_declaration() {
        let catalog = Catalog::builtin();
        for t in catalog.iter() {
            let mut state = ConsoleState::default();
            state.select_template(t);

            assert_eq!(state.method, t.method);
            assert_eq!(state.url.content(), t.url);
            assert_eq!(state.headers.content(), t.headers_json());
            match &t.body {
                Some(body) => {
                    assert_eq!(
                        state.body.content(),
                        serde_json::to_string_pretty(body).unwrap()
                    );
                    assert!(state.body_visible);
                }
                None => assert_eq!(state.body.content(), ""),
            }
        }
    }

    #[test]
    fn test_change_method_toggles_visibility_preserves_content() {
        let mut state = ConsoleState::default();
        state.body.set_content("{\"keep\": true}".to_string());

        state.change_method(HttpMethod::Post);
        assert!(state.body_visible);

        state.change_method(HttpMethod::Delete);
        assert!(!state.body_visible);
        assert_eq!(state.body.content(), "{\"keep\": true}");

        state.change_method(HttpMethod::Patch);
        assert!(state.body_visible);
        assert_eq!(state.body.content(), "{\"keep\": true}");
    }

    #[test]
    fn test_submit_empty_url_never_dispatches() {
        let mut state = ConsoleState::default();
        state.url.set_content("   ".to_string());

        assert!(state.submit().is_none());
        assert_eq!(state.display, Display::SubmitError(SubmitError::MissingUrl));
        assert_eq!(
            state.display_text(),
            "Please enter a URL or select an endpoint"
        );
        assert_eq!(state.status, StatusIndicator::Hidden);
        assert!(!state.sending);
    }

    #[test]
    fn test_submit_invalid_headers_never_dispatches() {
        let mut state = ConsoleState::default();
        state.url.set_content("http://localhost:8080/health".to_string());
        state.headers.set_content("{invalid".to_string());

        assert!(state.submit().is_none());
        assert_eq!(
            state.display,
            Display::SubmitError(SubmitError::InvalidHeadersJson)
        );
        assert_eq!(state.display_text(), "Invalid JSON in headers");
        assert_eq!(state.status, StatusIndicator::Hidden);
    }

    #[test]
    fn test_submit_invalid_body_never_dispatches_for_post() {
        let mut state = ConsoleState::default();
        state.change_method(HttpMethod::Post);
        state.url.set_content("http://localhost:8080/api/register".to_string());
        state.body.set_content("{bad json".to_string());

        assert!(state.submit().is_none());
        assert_eq!(
            state.display,
            Display::SubmitError(SubmitError::InvalidBodyJson)
        );
        assert_eq!(state.display_text(), "Invalid JSON in body");
    }

    #[test]
    fn test_submit_ignores_body_for_get() {
        // Body validation only applies to body-bearing methods
        let mut state = ConsoleState::default();
        state.url.set_content("http://localhost:8080/health".to_string());
        state.body.set_content("{not json at all".to_string());

        let draft = state.submit().expect("GET submit should dispatch");
        assert!(draft.body.is_none());
    }

    #[test]
    fn test_submit_blank_headers_yield_empty_set() {
        let mut state = ConsoleState::default();
        state.url.set_content("http://localhost:8080/health".to_string());
        state.headers.set_content("  \n ".to_string());

        let draft = state.submit().unwrap();
        assert!(draft.headers.is_empty());
    }

    #[test]
    fn test_submit_builds_draft_and_shows_loading() {
        let mut state = ConsoleState::default();
        state.change_method(HttpMethod::Post);
        state.url.set_content("  http://localhost:8080/api/login  ".to_string());
        state
            .headers
            .set_content("{\"Content-Type\": \"application/json\"}".to_string());
        state.body.set_content("{\"email\":\"a@b.c\"}".to_string());

        let draft = state.submit().unwrap();

        assert_eq!(draft.method, HttpMethod::Post);
        assert_eq!(draft.url, "http://localhost:8080/api/login"); // trimmed
        assert_eq!(
            draft.headers.get("Content-Type").and_then(|v| v.as_str()),
            Some("application/json")
        );
        // Raw text attached, not re-serialized
        assert_eq!(draft.body.as_deref(), Some("{\"email\":\"a@b.c\"}"));

        assert_eq!(state.display, Display::Loading);
        assert_eq!(state.display_text(), "Loading...");
        assert_eq!(state.status, StatusIndicator::Hidden);
        assert!(state.sending);
    }

    #[test]
    fn test_submit_disabled_while_sending() {
        let mut state = ConsoleState::default();
        state.url.set_content("http://localhost:8080/health".to_string());

        assert!(state.submit().is_some());
        assert!(state.submit().is_none()); // still in flight
    }

    #[test]
    fn test_finish_success_renders_status_and_body() {
        let mut state = ConsoleState::default();
        state.url.set_content("http://localhost:8080/health".to_string());
        state.submit().unwrap();

        state.finish(RequestOutcome::Response {
            status: 200,
            status_text: "OK".to_string(),
            duration: Duration::from_millis(12),
            rendered: Rendered::Json(serde_json::json!({"a": 1})),
        });

        assert_eq!(
            state.status,
            StatusIndicator::Shown {
                text: "200 OK (12ms)".to_string(),
                success: true,
            }
        );
        assert_eq!(state.display_text(), "{\n  \"a\": 1\n}");
        assert!(!state.sending);
    }

    #[test]
    fn test_finish_non_2xx_is_error_styled_but_normal() {
        let mut state = ConsoleState::default();
        state.url.set_content("http://localhost:8080/missing".to_string());
        state.submit().unwrap();

        state.finish(RequestOutcome::Response {
            status: 404,
            status_text: "Not Found".to_string(),
            duration: Duration::from_millis(7),
            rendered: Rendered::Text("not found".to_string()),
        });

        assert_eq!(
            state.status,
            StatusIndicator::Shown {
                text: "404 Not Found (7ms)".to_string(),
                success: false,
            }
        );
        assert_eq!(state.display_text(), "not found");
        assert!(!state.sending);
    }

    #[test]
    fn test_finish_transport_failure_reenables_submit() {
        let mut state = ConsoleState::default();
        state.url.set_content("http://unreachable.invalid/".to_string());
        state.submit().unwrap();

        state.finish(RequestOutcome::TransportFailure {
            error_message: "dns error".to_string(),
        });

        assert_eq!(
            state.status,
            StatusIndicator::Shown {
                text: "Request Failed".to_string(),
                success: false,
            }
        );
        assert_eq!(state.display_text(), "Error: dns error");
        assert!(!state.sending);

        // The console keeps working: a new submit goes through
        assert!(state.submit().is_some());
    }

    #[test]
    fn test_new_submit_replaces_displayed_outcome() {
        let mut state = ConsoleState::default();
        state.url.set_content("http://localhost:8080/health".to_string());
        state.submit().unwrap();
        state.finish(RequestOutcome::Response {
            status: 200,
            status_text: "OK".to_string(),
            duration: Duration::from_millis(1),
            rendered: Rendered::Text("ok".to_string()),
        });

        state.submit().unwrap();
        assert_eq!(state.display, Display::Loading);
        assert_eq!(state.status, StatusIndicator::Hidden);
    }

    #[test]
    fn test_focus_cycle_skips_hidden_body() {
        let mut state = ConsoleState::default();
        state.focus = Focus::Form(FormField::Headers);
        assert!(!state.body_visible);

        state.focus_next_field();
        assert_eq!(state.focus, Focus::Form(FormField::Method));

        state.focus_prev_field();
        assert_eq!(state.focus, Focus::Form(FormField::Headers));
    }

    #[test]
    fn test_focus_cycle_includes_visible_body() {
        let mut state = ConsoleState::default();
        state.change_method(HttpMethod::Post);
        state.focus = Focus::Form(FormField::Headers);

        state.focus_next_field();
        assert_eq!(state.focus, Focus::Form(FormField::Body));

        state.focus_next_field();
        assert_eq!(state.focus, Focus::Form(FormField::Method));
    }

    #[test]
    fn test_outcome_body_text_only_for_outcomes() {
        let mut state = ConsoleState::default();
        assert!(state.outcome_body_text().is_none());

        state.finish(RequestOutcome::Response {
            status: 200,
            status_text: "OK".to_string(),
            duration: Duration::from_millis(1),
            rendered: Rendered::Text("ok".to_string()),
        });
        assert_eq!(state.outcome_body_text().as_deref(), Some("ok"));
    }
}
