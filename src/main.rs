mod app;
mod catalog;
mod config;
mod editor;
mod request;
mod state;
mod types;
mod ui;

use app::App;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let app_result = App::new()?.run(terminal).await;
    ratatui::restore();
    app_result
}
