//! Styling utilities shared across the UI

use crate::types::HttpMethod;
use ratatui::style::Color;

/// Get the color for an HTTP method
pub fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Patch => Color::Cyan,
        HttpMethod::Delete => Color::Red,
    }
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

/// Status indicator color: success style for 2xx, error style otherwise
pub fn status_color(success: bool) -> Color {
    if success {
        Color::Green
    } else {
        Color::Red
    }
}
