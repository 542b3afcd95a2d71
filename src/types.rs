use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// The HTTP methods selectable in the console form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Selector cycling order (matches the form's method dropdown)
const METHOD_ORDER: [HttpMethod; 5] = [
    HttpMethod::Get,
    HttpMethod::Post,
    HttpMethod::Put,
    HttpMethod::Patch,
    HttpMethod::Delete,
];

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether a request body is sent for this method.
    /// GET and DELETE never carry one; the body section is hidden for them.
    pub fn allows_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    /// Next method in selector order (wraps around)
    pub fn next(&self) -> Self {
        let idx = METHOD_ORDER.iter().position(|m| m == self).unwrap_or(0);
        METHOD_ORDER[(idx + 1) % METHOD_ORDER.len()]
    }

    /// Previous method in selector order (wraps around)
    pub fn prev(&self) -> Self {
        let idx = METHOD_ORDER.iter().position(|m| m == self).unwrap_or(0);
        METHOD_ORDER[(idx + METHOD_ORDER.len() - 1) % METHOD_ORDER.len()]
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A named request preset shown in the sidebar.
///
/// Templates are read-only: defined once at startup (built-in catalog or a
/// TOML file) and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointTemplate {
    pub name: String,
    pub method: HttpMethod,
    pub url: String,

    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Optional JSON body, pretty-printed into the body field on selection
    #[serde(default)]
    pub body: Option<serde_json::Value>,

    /// Optional note rendered in place of the usual placeholder
    #[serde(default)]
    pub note: Option<String>,
}

impl EndpointTemplate {
    /// Headers as pretty-printed JSON, exactly as they appear in the form field
    pub fn headers_json(&self) -> String {
        serde_json::to_string_pretty(&self.headers).unwrap_or_else(|_| "{}".to_string())
    }
}

/// The outgoing request derived from form state on submit.
/// Built fresh each time and discarded after dispatch.
#[derive(Debug, Clone)]
pub struct RequestDraft {
    pub method: HttpMethod,
    pub url: String,
    pub headers: serde_json::Map<String, serde_json::Value>,
    /// Raw body text, attached verbatim (validated but never re-serialized)
    pub body: Option<String>,
}

/// Recoverable submit-time validation failures.
/// Each one renders its message, hides the status indicator, and aborts
/// before any network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    MissingUrl,
    InvalidHeadersJson,
    InvalidBodyJson,
}

impl SubmitError {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitError::MissingUrl => "Please enter a URL or select an endpoint",
            SubmitError::InvalidHeadersJson => "Invalid JSON in headers",
            SubmitError::InvalidBodyJson => "Invalid JSON in body",
        }
    }
}

/// Response body, tagged by how it will be displayed
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Json(serde_json::Value),
    Text(String),
}

impl Rendered {
    /// Decide rendering from the declared content type.
    ///
    /// A content type containing "application/json" gets parsed and
    /// pretty-printed; anything else (or a JSON content type whose body does
    /// not actually parse) falls back to the raw text.
    pub fn from_parts(content_type: Option<&str>, body: &str) -> Self {
        let is_json = content_type
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        if is_json {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
                return Rendered::Json(value);
            }
        }

        Rendered::Text(body.to_string())
    }

    /// The body panel text: pretty JSON (2-space indent) or the raw text
    pub fn display(&self) -> String {
        match self {
            Rendered::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Rendered::Text(text) => text.clone(),
        }
    }
}

/// The result of one request attempt.
///
/// A non-2xx HTTP status is a normal `Response` (styled as an error but not a
/// failure); `TransportFailure` covers network-level errors where no status
/// line ever arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Response {
        status: u16,
        status_text: String,
        duration: Duration,
        rendered: Rendered,
    },
    TransportFailure {
        error_message: String,
    },
}

impl RequestOutcome {
    /// True when the response status is in the 2xx success range
    pub fn ok(&self) -> bool {
        match self {
            RequestOutcome::Response { status, .. } => (200..300).contains(status),
            RequestOutcome::TransportFailure { .. } => false,
        }
    }

    /// Status indicator text: `"<code> <statusText> (<duration>ms)"`,
    /// or `"Request Failed"` for transport-level errors
    pub fn status_line(&self) -> String {
        match self {
            RequestOutcome::Response {
                status,
                status_text,
                duration,
                ..
            } => format!("{} {} ({}ms)", status, status_text, duration.as_millis()),
            RequestOutcome::TransportFailure { .. } => "Request Failed".to_string(),
        }
    }

    /// The body panel text for this outcome
    pub fn body_text(&self) -> String {
        match self {
            RequestOutcome::Response { rendered, .. } => rendered.display(),
            RequestOutcome::TransportFailure { error_message } => {
                format!("Error: {error_message}")
            }
        }
    }
}
