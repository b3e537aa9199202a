mod app;
mod banner;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Grid;
use anyhow::Context;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
};
use ratatui::layout::Size;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e
                .downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
            {
                return ExitCode::SUCCESS;
            }
            eprintln!("boostsnake: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = match Config::default_path() {
        Ok(path) => Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        Err(_) => Config::default(),
    };
    match logging::init(&config.log) {
        Ok(Some(path)) => log::info!("Logging to {}", path.display()),
        Ok(None) => (),
        Err(e) => eprintln!(
            "boostsnake: continuing without logging: {:#}",
            anyhow::Error::new(e)
        ),
    }
    let (width, height) = crossterm::terminal::size().context("failed to get terminal size")?;
    // The top row is taken by the status bar.
    let display = Size::new(width, height.saturating_sub(1));
    let grid = Grid::new(display, config.game.cell_size, config.game.wall_thickness)
        .context("terminal cannot fit the arena")?;
    log::debug!("Using {:?} with {:?}", config.game, grid);
    let app = App::new(config.game, grid, rand::rng())?;
    let terminal = ratatui::init();
    let enhanced = match enable_key_event_kinds() {
        Ok(b) => b,
        Err(e) => {
            log::warn!("Could not enable key release reporting: {e}");
            false
        }
    };
    let r = app.run(terminal);
    if enhanced {
        if let Err(e) = execute!(io::stdout(), PopKeyboardEnhancementFlags) {
            log::warn!("Could not restore keyboard mode: {e}");
        }
    }
    ratatui::restore();
    r?;
    Ok(())
}

/// Ask the terminal to report key repeats & releases as such, so that a held
/// key is seen as a single press.  Returns `false` if the terminal can't do
/// that, in which case auto-repeat arrives as ordinary presses.
fn enable_key_event_kinds() -> io::Result<bool> {
    if !crossterm::terminal::supports_keyboard_enhancement()? {
        return Ok(false);
    }
    execute!(
        io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )?;
    Ok(true)
}
