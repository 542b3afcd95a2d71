//! Main panel rendering
//!
//! Three panels: the sidebar with the endpoint templates, the request form
//! (method, URL, headers, body), and the response panel (status indicator
//! plus body display).

use super::styling;
use crate::catalog::Catalog;
use crate::editor::FieldEditor;
use crate::state::{ConsoleState, Display, FormField, StatusIndicator};
use crate::types::RequestOutcome;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Render the sidebar listing the endpoint templates
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    list_state: &mut ListState,
    focused: bool,
) {
    let items: Vec<ListItem> = catalog
        .iter()
        .map(|template| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:7}", template.method.as_str()),
                    Style::default()
                        .fg(styling::method_color(template.method))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(template.name.as_str()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let border_color = if focused {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("[1] Endpoints ({})", catalog.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Render the request form: method selector, URL, headers, and (when
/// visible) body fields
pub fn render_form_panel(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let constraints = if state.body_visible {
        vec![
            Constraint::Length(3), // Method
            Constraint::Length(3), // URL
            Constraint::Percentage(40),
            Constraint::Min(0),
        ]
    } else {
        vec![Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_method_field(frame, chunks[0], state);
    render_text_field(
        frame,
        chunks[1],
        "URL",
        &state.url,
        state.focused_field() == Some(FormField::Url),
        false,
    );
    render_text_field(
        frame,
        chunks[2],
        "Headers (JSON)",
        &state.headers,
        state.focused_field() == Some(FormField::Headers),
        true,
    );

    if state.body_visible {
        render_text_field(
            frame,
            chunks[3],
            "Body (JSON)",
            &state.body,
            state.focused_field() == Some(FormField::Body),
            true,
        );
    }
}

/// Render the response panel: status indicator line plus the body display
pub fn render_response_panel(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let block = Block::default()
        .title("[2] Response")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::unfocused_border()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status indicator
            Constraint::Min(0),    // Body display
        ])
        .split(inner_area);

    match &state.status {
        StatusIndicator::Shown { text, success } => {
            let status = Paragraph::new(Span::styled(
                text.clone(),
                Style::default()
                    .fg(styling::status_color(*success))
                    .add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(status, chunks[0]);
        }
        StatusIndicator::Hidden => {}
    }

    let body_style = match &state.display {
        Display::Placeholder | Display::Note(_) => Style::default().fg(Color::DarkGray),
        Display::SubmitError(_) => Style::default().fg(Color::Red),
        Display::Loading => Style::default().fg(Color::Yellow),
        Display::Outcome(RequestOutcome::TransportFailure { .. }) => {
            Style::default().fg(Color::Red)
        }
        Display::Outcome(RequestOutcome::Response { .. }) => Style::default(),
    };

    let body = Paragraph::new(state.display_text())
        .style(body_style)
        .wrap(Wrap { trim: false });

    frame.render_widget(body, chunks[1]);
}

// ============================================================================
// Private Helper Functions
// ============================================================================

/// Render the method selector field
fn render_method_field(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let focused = state.focused_field() == Some(FormField::Method);

    let text = if focused {
        format!("◀ {} ▶", state.method)
    } else {
        state.method.to_string()
    };

    let field = Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(styling::method_color(state.method))
            .add_modifier(Modifier::BOLD),
    ))
    .block(field_block("Method", focused));

    frame.render_widget(field, area);
}

/// Render a text field with a cursor marker when focused.
/// Multi-line fields show the cursor position in the title.
fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    editor: &FieldEditor,
    focused: bool,
    multiline: bool,
) {
    let text = if focused {
        let (before, after) = editor.split_at_cursor();
        format!("{before}▊{after}")
    } else {
        editor.content().to_string()
    };

    let title = if focused && multiline {
        let (line, col) = editor.cursor_line_col();
        format!("{title} [{}:{}]", line + 1, col + 1)
    } else {
        title.to_string()
    };

    let field = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(field_block(&title, focused));

    frame.render_widget(field, area);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}
