use crate::catalog::Catalog;
use crate::config::Config;
use crate::request;
use crate::state::{ConsoleState, Focus};
use crate::ui;
use color_eyre::Result;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<ConsoleState>>,
    list_state: ListState,
    catalog: Catalog,
    client: reqwest::Client,
    event_handler: ui::EventHandler,
    spinner_index: usize,
    last_tick: Instant,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;

        // External catalog when configured, built-in presets otherwise
        let catalog = match &config.console.templates_path {
            Some(path) => Catalog::load_from_path(path)?,
            None => Catalog::builtin(),
        };

        let client = request::build_client()?;

        let mut list_state = ListState::default();
        if !catalog.is_empty() {
            list_state.select(Some(0));
        }

        Ok(Self {
            state: Arc::new(RwLock::new(ConsoleState::default())),
            list_state,
            catalog,
            client,
            event_handler: ui::EventHandler::new(),
            spinner_index: 0,
            last_tick: Instant::now(),
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            self.event_handler.handle_events(
                Arc::clone(&self.state),
                &mut self.list_state,
                &self.catalog,
                &self.client,
            )?;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let state = self.state.read().unwrap();

        // Create main layout: Header, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        ui::draw::render_header(
            frame,
            main_chunks[0],
            self.catalog.len(),
            state.sending,
            self.spinner_index,
        );

        // Body: sidebar (toggleable), form, response
        let body_chunks = if state.sidebar_visible {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(28),
                    Constraint::Percentage(40),
                    Constraint::Min(0),
                ])
                .split(main_chunks[1])
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Min(0)])
                .split(main_chunks[1])
        };

        if state.sidebar_visible {
            ui::draw::render_sidebar(
                frame,
                body_chunks[0],
                &self.catalog,
                &mut self.list_state,
                state.focus == Focus::Sidebar,
            );
            ui::draw::render_form_panel(frame, body_chunks[1], &state);
            ui::draw::render_response_panel(frame, body_chunks[2], &state);
        } else {
            ui::draw::render_form_panel(frame, body_chunks[0], &state);
            ui::draw::render_response_panel(frame, body_chunks[1], &state);
        }

        ui::draw::render_footer(frame, main_chunks[2], &state);
    }
}
