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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload network
//! requests from the main UI thread. It provides a dedicated worker thread,
//! running a single-threaded `tokio` runtime, that translates [`AppTask`]
//! requests into calls to the movie provider and broadcasts the results back
//! to the application via [`AppEvent`]s.
//!
//! Every task is spawned onto the runtime as soon as it arrives, so a new
//! fetch cycle never waits for an older one to finish. The event loop decides
//! which results are still wanted.

mod handlers;

use std::{
    sync::{Arc, mpsc::Sender},
    thread,
};

use anyhow::{Context, Result};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    events::AppEvent,
    model::{CycleId, Query},
    omdb::MovieProvider,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchMovies { cycle: CycleId, query: Query },
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `provider` - The movie data provider shared by all tasks.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
///
/// # Errors
///
/// Returns an error if the worker thread cannot be spawned. Failure to start
/// the runtime inside the thread is reported as [`AppEvent::FatalError`].
pub(crate) fn spawn_task_worker(
    provider: Arc<dyn MovieProvider>,
    mut task_rx: UnboundedReceiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    thread::Builder::new()
        .name("task-worker".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    let _ = event_tx.send(AppEvent::FatalError(format!(
                        "Failed to start task runtime: {e}"
                    )));
                    return;
                }
            };

            runtime.block_on(async move {
                while let Some(task) = task_rx.recv().await {
                    let ctx = TaskContext {
                        provider: Arc::clone(&provider),
                        event_tx: event_tx.clone(),
                    };

                    tokio::spawn(handle_task(task, ctx));
                }
            });

            tracing::debug!("task worker stopped");
        })
        .context("Failed to spawn task worker")?;

    Ok(())
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext {
    provider: Arc<dyn MovieProvider>,
    event_tx: Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
async fn handle_task(task: AppTask, ctx: TaskContext) {
    match task {
        AppTask::FetchMovies { cycle, query } => handlers::fetch_movies(&ctx, cycle, query).await,
    }
}
