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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the
//! application, bridging user input (keyboard), audio backend updates, and
//! the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    mpsc channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`]
//!    state, routing keys to the modal dialog, the search bar, the entry
//!    table, or the transport, and recomputing the derived views after
//!    every catalog or query change.
//! 3. **Render**: After each event is processed, the UI is re-drawn using
//!    the `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    components::{DialogOutcome, SearchOutcome},
    render::draw,
};

const SEEK_DELTA_SECONDS: f64 = 10.0;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// The audio backend reported the duration of the loaded resource.
    DurationChanged(f64),
    /// The audio backend reported its playback position.
    TimeChanged(f64),
    /// The audio backend reached the end of the loaded resource.
    PlaybackFinished,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event
/// channel is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::DurationChanged(duration) => {
                if let Some(playback) = app.playback.as_mut() {
                    playback.on_metadata_loaded(duration);
                }
            }
            AppEvent::TimeChanged(time) => {
                if let Some(playback) = app.playback.as_mut() {
                    playback.on_time_tick(time);
                }
            }
            AppEvent::PlaybackFinished => {
                if let Some(playback) = app.playback.as_mut() {
                    playback.on_finished();
                }
            }

            AppEvent::Tick => {}

            AppEvent::Error(message) => app.last_error = Some(message),
            AppEvent::FatalError(message) => anyhow::bail!(message),

            AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Routes a key press to whichever surface owns the keyboard.
///
/// The modal dialog takes precedence, then the focused search bar, then
/// table navigation; anything left over is a global binding.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.add_form.handle_key(key) {
        DialogOutcome::Submitted(draft) => {
            app.library.add(draft);
            app.refresh_views();
            return Ok(());
        }
        DialogOutcome::Cancelled | DialogOutcome::Handled => return Ok(()),
        DialogOutcome::Ignored => {}
    }

    match app.search.handle_key(key) {
        SearchOutcome::QueryChanged => {
            app.refresh_views();
            return Ok(());
        }
        SearchOutcome::Handled | SearchOutcome::Blurred => return Ok(()),
        SearchOutcome::Ignored => {}
    }

    if app.entry_table.handle_key(key) {
        app.bind_playback();
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('/') => app.search.focus(),
        KeyCode::Char('a') => app.add_form.open(),

        KeyCode::Char(' ') => {
            if let Some(playback) = app.playback.as_mut() {
                playback.toggle();
            }
        }
        KeyCode::Left => seek_relative(app, -SEEK_DELTA_SECONDS),
        KeyCode::Right => seek_relative(app, SEEK_DELTA_SECONDS),

        _ => {}
    }

    Ok(())
}

// The scrubber works in absolute positions; a relative nudge is computed
// from the last known position and clamped by the controller.
fn seek_relative(app: &mut App, delta: f64) {
    if let Some(playback) = app.playback.as_mut() {
        let target = playback.current_time() + delta;
        playback.seek(target);
    }
}
