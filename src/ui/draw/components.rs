//! Header and footer components

use crate::state::{ConsoleState, Focus, FormField};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Render the application header with catalog size and in-flight indicator
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    template_count: usize,
    sending: bool,
    spinner_index: usize,
) {
    let spinner = ["⠋", "⠙", "⠹", "⠸"];
    let activity = if sending {
        format!(" {} sending", spinner[spinner_index])
    } else {
        String::new()
    };

    let header_text = format!("request console - {template_count} endpoints{activity}");

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the footer with command help for the current focus
pub fn render_footer(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let footer_text = match state.focus {
        Focus::Sidebar => {
            "j/k/↑/↓:Nav Enter:Select Tab:Form | Ctrl+S:Send y:Yank Ctrl+B:Sidebar q:Quit"
        }
        Focus::Form(FormField::Method) => {
            "←/→/Space:Method Tab:Next field Esc:Endpoints | Ctrl+S:Send"
        }
        Focus::Form(FormField::Url) => {
            "Type URL Enter:Send Tab:Next field Esc:Endpoints | Ctrl+S:Send"
        }
        Focus::Form(FormField::Headers) | Focus::Form(FormField::Body) => {
            "Type JSON Enter:Newline Tab:Next field Esc:Endpoints | Ctrl+S:Send"
        }
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}
