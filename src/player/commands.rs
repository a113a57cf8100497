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

//! MPV-backed audio playback engine and event processing.
//!
//! This module provides the audio backend, leveraging `libmpv` for decoding
//! and playback control. It manages a background worker thread that bridges
//! the application's command-based interface and the low-level MPV property
//! observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`AudioPlayerCommand`]s from the
//!    playback controller (load, play, pause, seek, stop).
//! 2. **Event Channel**: Broadcasts [`AppEvent`]s notifying the UI of
//!    reported duration, playback position, and end of file.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::actions::events::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AudioPlayerCommand {
    /// Load an audio file, paused, replacing whatever was loaded before.
    Load(String),
    Play,
    Pause,
    /// Jump to an absolute position in seconds. The controller has already
    /// clamped the value.
    SeekTo(f64),
    Stop,
}

/// Spawns the audio worker thread to process playback commands.
///
/// This function takes ownership of the command receiver and the event
/// sender, moving them into a dedicated background thread.
///
/// If the internal worker returns an error, it is caught here and broadcast
/// as a fatal application event.
///
/// # Arguments
///
/// * `command_rx` - The receiving end of the player command channel.
/// * `event_tx` - The channel used to broadcast playback updates and errors.
pub(crate) fn spawn_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the audio player backend.
///
/// This function initializes a local `libmpv` context and alternates
/// between draining pending commands and polling MPV for property-change
/// events.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the
/// internal command/event loops encounter an unrecoverable failure.
fn audio_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;

    loop {
        process_commands(&mut handler, &command_rx, &event_tx)?;
        process_mpv_events(&mut handler, &event_tx)?;
    }
}

/// Drains and executes all pending commands from the application channel.
///
/// A command MPV rejects (a missing or unreadable file, say) is reported as
/// a non-fatal [`AppEvent::Error`] rather than taking the worker down; the
/// worker only stops when the event channel itself is gone.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &mpsc::Receiver<AudioPlayerCommand>,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    while let Ok(command) = command_rx.try_recv() {
        if let Err(e) = run_command(handler, &command) {
            event_tx
                .send(AppEvent::Error(format!("Playback error: {:#}", e)))
                .context("Failed to send event")?;
        }
    }

    Ok(())
}

fn run_command(handler: &mut mpv::MpvHandler, command: &AudioPlayerCommand) -> Result<()> {
    match command {
        AudioPlayerCommand::Load(filename) => {
            handler
                .command(&["loadfile", filename, "replace"])
                .context(format!("Failed to load file: {}", filename))?;
            // Loading never implies playback; the controller sends an
            // explicit Play.
            handler.set_property("pause", true)?;
        }
        AudioPlayerCommand::Play => {
            handler.set_property("pause", false)?;
        }
        AudioPlayerCommand::Pause => {
            handler.set_property("pause", true)?;
        }
        AudioPlayerCommand::SeekTo(seconds) => {
            handler.command(&["seek", &seconds.to_string(), "absolute"])?;
        }
        AudioPlayerCommand::Stop => {
            handler.command(&["stop"])?;
        }
    }

    Ok(())
}

/// Polls for MPV events and forwards them to the application.
///
/// This function waits for up to 50ms for an event from the MPV context,
/// mapping duration and position changes plus end-of-file onto the matching
/// [`AppEvent`]s.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let app_event = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("duration", Format::Double(duration)) if duration >= 0.0 => {
                    Some(AppEvent::DurationChanged(duration))
                }
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    Some(AppEvent::TimeChanged(seconds))
                }
                _ => None,
            },
            mpv::Event::EndFile(result) => match result {
                Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => {
                    Some(AppEvent::PlaybackFinished)
                }
                _ => None,
            },
            _ => None,
        };

        if let Some(event) = app_event {
            event_tx.send(event).context("Failed to send event")?;
        }
    }

    Ok(())
}
