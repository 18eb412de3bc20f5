// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Movie Discovery TUI.
//!
//! A terminal-based movie finder backed by the OMDb API.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** runs fetch cycles (search, then per-movie
//!   detail enrichment) on a `tokio` runtime.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state, including the search debounce.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Results flow back
//! from the worker over a `std::sync::mpsc` channel, tagged with the fetch
//! cycle they belong to.

mod components;
mod config;
mod debounce;
mod events;
mod fetch;
mod model;
mod omdb;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

use crate::{
    components::{MovieGrid, SearchBox},
    debounce::Debouncer,
    events::{AppEvent, process_events},
    model::{CycleId, ViewState},
    omdb::{OMDB_BASE_URL, OmdbClient},
    tasks::AppTask,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, PartialEq)]
enum Focus {
    SearchInput,
    Results,
}

/// Application state.
struct App {
    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: UnboundedSender<AppTask>,

    pub search_box: SearchBox,
    pub movie_grid: MovieGrid,

    pub debouncer: Debouncer,

    /// The most recently started fetch cycle, only its results are shown.
    pub cycle: CycleId,
    pub view_state: ViewState,

    pub ticks: u64,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(task_tx: UnboundedSender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            theme: Theme::default(),
            focus: Focus::SearchInput,
            event_tx,
            event_rx,
            task_tx,
            search_box: SearchBox::new(),
            movie_grid: MovieGrid::new(),
            debouncer: Debouncer::default(),
            cycle: 0,
            view_state: ViewState::default(),
            ticks: 0,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the movie provider, starts the task worker, manages
/// the terminal lifecycle, and returns an error if any part of the execution
/// fails.
fn main() -> Result<()> {
    let log_path = util::log::init_logging().context("Failed to initialise logging")?;

    let config = config::load_config();
    let api_key = config.api_key(config::env_api_key())?;

    tracing::info!(log = %log_path.display(), base_url = OMDB_BASE_URL, "starting");

    let provider = Arc::new(OmdbClient::new(api_key));

    let (task_tx, task_rx) = unbounded_channel();
    let mut app = App::new(task_tx);

    tasks::spawn_task_worker(provider, task_rx, app.event_tx.clone())?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        tracing::error!(error = %e, "application error");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * An input thread to poll for system keyboard events.
/// * A tick thread that drives the debounce and the loading spinner.
///
/// It then starts the first fetch cycle for the empty query, so the popular
/// listing shows without any input, and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let message = format!("Failed to read input: {e}");
                    let _ = tx_keys.send(AppEvent::FatalError(message));
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" and also the resolution of the
    // search debounce.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Initial fetch cycle for the default listing
    events::start_cycle(app)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
