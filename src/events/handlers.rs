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

use std::time::Instant;

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App, Focus,
    components::{GridAction, SearchBoxAction},
    events::AppEvent,
    model::{CycleId, ViewState},
    tasks::AppTask,
};

/// Maps keyboard input to the component that currently has focus.
///
/// `Ctrl-C` always quits, everything else goes to the search box or the
/// result grid.
///
/// # Errors
///
/// Returns an error if an event cannot be sent back to the event loop.
pub(super) fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    match app.focus {
        Focus::SearchInput => match app.search_box.process_event(&event) {
            Some(SearchBoxAction::Changed(value)) => app.debouncer.input(&value, Instant::now()),
            Some(SearchBoxAction::Leave) => set_focus(app, Focus::Results),
            None => {}
        },

        Focus::Results => {
            let len = app.view_state.movies().len();
            match app.movie_grid.process_event(&event, len) {
                Some(GridAction::FocusSearch) => set_focus(app, Focus::SearchInput),
                Some(GridAction::Quit) => app.event_tx.send(AppEvent::ExitApplication)?,
                None => {}
            }
        }
    }

    Ok(())
}

pub(super) fn set_focus(app: &mut App, focus: Focus) {
    app.search_box.is_active = focus == Focus::SearchInput;
    app.movie_grid.is_active = focus == Focus::Results;
    app.focus = focus;
}

/// Advances the spinner and lets the debouncer publish a settled query.
///
/// A settled query of only whitespace updates the heading but starts no
/// cycle, the current results stay on screen.
///
/// # Errors
///
/// Returns an error if a new fetch cycle cannot be started.
pub(super) fn handle_tick(app: &mut App, now: Instant) -> Result<()> {
    app.ticks = app.ticks.wrapping_add(1);

    match app.debouncer.poll(now) {
        Some(query) if query.is_blank() => {
            tracing::debug!("blank query settled, keeping current results");
        }
        Some(_) => start_cycle(app)?,
        None => {}
    }

    Ok(())
}

/// Starts a fetch cycle for the current settled query.
///
/// The result area switches to loading straight away. Any cycle still in
/// flight becomes stale, its results will be dropped when they arrive.
///
/// # Errors
///
/// Returns an error if the task worker has stopped.
pub(crate) fn start_cycle(app: &mut App) -> Result<()> {
    app.cycle += 1;
    app.view_state = ViewState::Loading;
    let query = app.debouncer.settled().clone();

    tracing::info!(cycle = app.cycle, %query, "starting fetch cycle");

    app.task_tx
        .send(AppTask::FetchMovies {
            cycle: app.cycle,
            query,
        })
        .map_err(|_| anyhow!("Task worker has stopped"))
}

pub(super) fn handle_view_state_changed(app: &mut App, cycle: CycleId, state: ViewState) {
    if cycle != app.cycle {
        tracing::debug!(cycle, current = app.cycle, "ignoring stale fetch cycle");
        return;
    }

    if !state.is_loading() {
        tracing::debug!(cycle, "fetch cycle finished");
    }

    if let ViewState::Ready(movies) = &state {
        app.movie_grid.reset_selection(movies.len());
    }

    app.view_state = state;
}
