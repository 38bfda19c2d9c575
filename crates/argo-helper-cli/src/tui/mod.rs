//! Interactive terminal UI: a menu and two guided forms.
//!
//! The event loop owns the terminal; everything else is plain state that
//! tests drive with synthetic key events.

mod app;
mod field;
mod form;
mod menu;
mod view;
mod workflows;

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{info, instrument};

use argo_helper_core::application::{PathResolver, ScaffoldService, SilentReporter};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

use app::App;

/// Run the interactive session until the user quits.
#[instrument(skip_all)]
pub fn run(global: &GlobalArgs, config: &AppConfig) -> CliResult<()> {
    let mode = crate::commands::execution_mode(global, config);
    // Progress lines would corrupt the alternate screen.
    let service: ScaffoldService = crate::commands::scaffold_service(mode, Box::new(SilentReporter))?;
    let mut app = App::new(&service, PathResolver::current(), config.defaults.clone());

    info!(dry_run = mode.is_dry_run(), "Starting interactive session");
    let mut terminal =
        ratatui::try_init().map_err(terminal_error("Failed to initialise the terminal"))?;
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    info!("Interactive session ended");

    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App<'_>) -> CliResult<()> {
    while !app.should_quit() {
        terminal
            .draw(|frame| view::render(frame, app))
            .map_err(terminal_error("Failed to draw the screen"))?;

        if !event::poll(Duration::from_millis(100)).map_err(terminal_error("Failed to poll input"))? {
            continue;
        }
        if let Event::Key(key) = event::read().map_err(terminal_error("Failed to read input"))? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

fn terminal_error(message: &'static str) -> impl FnOnce(std::io::Error) -> CliError {
    move |source| CliError::Terminal {
        message: message.into(),
        source,
    }
}
