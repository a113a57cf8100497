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

//! Audio playback control and state management.
//!
//! This module provides the transport logic for the selected library entry.
//! It is split into two halves:
//!
//! * [`AudioPlayer`] — a handle to the background worker thread that owns
//!   the MPV context (see [`commands`]). Heavy audio operations never run
//!   on the main thread.
//! * [`PlaybackController`] — the per-entry transport state machine. It
//!   issues commands over the worker channel and consumes the backend's
//!   duration/position events, which keeps the logic testable with nothing
//!   more than a bare channel standing in for the worker.

mod commands;

use std::sync::mpsc::{self, Sender};

use anyhow::Result;

use crate::actions::events::AppEvent;

pub(crate) use commands::AudioPlayerCommand;

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio
/// processing itself but hands instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    command_tx: Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel used to send playback progress updates and
    ///   errors back to the main event loop.
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }

    /// A sender that a [`PlaybackController`] issues its commands on.
    pub(crate) fn commands(&self) -> Sender<AudioPlayerCommand> {
        self.command_tx.clone()
    }
}

/// Transport state machine for one library entry.
///
/// A controller is bound to the selected entry and lives until the
/// selection changes; reselecting discards it and starts a fresh one with
/// zeroed position and unknown duration. When the entry has no audio
/// reference every transport operation is a guarded no-op, so a missing or
/// broken resource never surfaces as an error.
pub(crate) struct PlaybackController {
    entry_id: u64,
    source: Option<String>,
    is_playing: bool,
    current_time: f64,
    total_duration: f64,
    loaded: bool,
    command_tx: Sender<AudioPlayerCommand>,
}

impl PlaybackController {
    /// Binds a controller to an entry.
    ///
    /// # Arguments
    ///
    /// * `entry_id` - The id of the entry this controller transports.
    /// * `source` - The resolved path of the audio resource, or `None` for
    ///   an entry without one.
    /// * `command_tx` - The backend command channel.
    pub(crate) fn new(
        entry_id: u64,
        source: Option<String>,
        command_tx: Sender<AudioPlayerCommand>,
    ) -> Self {
        Self {
            entry_id,
            source,
            is_playing: false,
            current_time: 0.0,
            total_duration: 0.0,
            loaded: false,
            command_tx,
        }
    }

    pub(crate) fn entry_id(&self) -> u64 {
        self.entry_id
    }

    pub(crate) fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Current playback position in seconds.
    pub(crate) fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Total duration in seconds; `0.0` until the backend has reported
    /// metadata.
    pub(crate) fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Position as a `[0, 1]` ratio for the progress gauge.
    pub(crate) fn progress(&self) -> f64 {
        if self.total_duration > 0.0 {
            (self.current_time / self.total_duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Flips between playing and paused, issuing the matching backend
    /// command. The first play lazily loads the source. No-op without a
    /// source or when the worker is gone.
    pub(crate) fn toggle(&mut self) {
        let Some(source) = self.source.clone() else {
            return;
        };

        if self.is_playing {
            if self.send(AudioPlayerCommand::Pause) {
                self.is_playing = false;
            }
        } else {
            if !self.loaded {
                if !self.send(AudioPlayerCommand::Load(source)) {
                    return;
                }
                self.loaded = true;
            }
            if self.send(AudioPlayerCommand::Play) {
                self.is_playing = true;
            }
        }
    }

    /// Jumps to an absolute position, clamped into `[0, total_duration]`.
    ///
    /// Seeking never changes the play/pause state: seeking while paused
    /// stays paused, seeking while playing continues from the new position.
    /// Before the first play nothing is loaded in the backend, so the
    /// position is only recorded locally.
    pub(crate) fn seek(&mut self, time: f64) {
        if self.source.is_none() {
            return;
        }

        let clamped = time.clamp(0.0, self.total_duration.max(0.0));
        self.current_time = clamped;
        if self.loaded {
            self.send(AudioPlayerCommand::SeekTo(clamped));
        }
    }

    /// Records the duration reported by the backend. Valid in any state;
    /// the position is re-clamped so it never exceeds the known duration.
    pub(crate) fn on_metadata_loaded(&mut self, duration: f64) {
        self.total_duration = duration.max(0.0);
        if self.current_time > self.total_duration {
            self.current_time = self.total_duration;
        }
    }

    /// Records the position reported by the backend. The latest tick always
    /// wins; a stale tick after pausing is harmless and simply reflects the
    /// last known position.
    pub(crate) fn on_time_tick(&mut self, time: f64) {
        self.current_time = time.max(0.0);
        if self.total_duration > 0.0 && self.current_time > self.total_duration {
            self.current_time = self.total_duration;
        }
    }

    /// The backend reached the end of the file; drop back to paused at the
    /// last reported position.
    pub(crate) fn on_finished(&mut self) {
        self.is_playing = false;
    }

    /// Stops the backend when the controller is discarded on reselection.
    pub(crate) fn release(&self) {
        if self.loaded {
            self.send(AudioPlayerCommand::Stop);
        }
    }

    // A failed send means the worker has gone away; the transport simply
    // goes inert.
    fn send(&self, command: AudioPlayerCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::Receiver;

    fn controller(source: Option<&str>) -> (PlaybackController, Receiver<AudioPlayerCommand>) {
        let (tx, rx) = mpsc::channel();
        let controller = PlaybackController::new(7, source.map(str::to_string), tx);
        (controller, rx)
    }

    fn drain(rx: &Receiver<AudioPlayerCommand>) -> Vec<AudioPlayerCommand> {
        let mut commands = vec![];
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }
        commands
    }

    #[test]
    fn starts_paused_with_unknown_duration() {
        let (controller, _rx) = controller(Some("dune.mp3"));

        assert!(!controller.is_playing());
        assert_eq!(controller.current_time(), 0.0);
        assert_eq!(controller.total_duration(), 0.0);
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn toggle_round_trip_issues_play_then_pause() {
        let (mut controller, rx) = controller(Some("dune.mp3"));

        controller.toggle();
        assert!(controller.is_playing());

        controller.toggle();
        assert!(!controller.is_playing());

        assert_eq!(
            drain(&rx),
            vec![
                AudioPlayerCommand::Load("dune.mp3".to_string()),
                AudioPlayerCommand::Play,
                AudioPlayerCommand::Pause,
            ]
        );
    }

    #[test]
    fn second_play_does_not_reload_the_source() {
        let (mut controller, rx) = controller(Some("dune.mp3"));

        controller.toggle();
        controller.toggle();
        controller.toggle();

        let loads = drain(&rx)
            .into_iter()
            .filter(|c| matches!(c, AudioPlayerCommand::Load(_)))
            .count();
        assert_eq!(loads, 1);
        assert!(controller.is_playing());
    }

    #[test]
    fn toggle_without_source_is_a_no_op() {
        let (mut controller, rx) = controller(None);

        controller.toggle();
        assert!(!controller.is_playing());
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn toggle_with_dead_worker_is_a_no_op() {
        let (mut controller, rx) = controller(Some("dune.mp3"));
        drop(rx);

        controller.toggle();
        assert!(!controller.is_playing());
    }

    #[test]
    fn seek_before_first_play_sends_no_backend_command() {
        let (mut controller, rx) = controller(Some("dune.mp3"));

        controller.seek(30.0);
        assert!(!controller.is_playing());
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn seek_clamps_to_known_duration() {
        let (mut controller, rx) = controller(Some("dune.mp3"));
        controller.toggle();
        controller.on_metadata_loaded(120.0);
        let _ = drain(&rx);

        controller.seek(500.0);
        assert_eq!(controller.current_time(), 120.0);

        controller.seek(-3.0);
        assert_eq!(controller.current_time(), 0.0);

        controller.seek(60.0);
        assert_eq!(controller.current_time(), 60.0);

        assert_eq!(
            drain(&rx),
            vec![
                AudioPlayerCommand::SeekTo(120.0),
                AudioPlayerCommand::SeekTo(0.0),
                AudioPlayerCommand::SeekTo(60.0),
            ]
        );
    }

    #[test]
    fn seek_does_not_change_play_state() {
        let (mut controller, _rx) = controller(Some("dune.mp3"));
        controller.on_metadata_loaded(120.0);

        controller.seek(30.0);
        assert!(!controller.is_playing());

        controller.toggle();
        controller.seek(45.0);
        assert!(controller.is_playing());
    }

    #[test]
    fn latest_tick_overwrites_a_seek() {
        let (mut controller, _rx) = controller(Some("dune.mp3"));
        controller.on_metadata_loaded(120.0);

        controller.seek(90.0);
        controller.on_time_tick(91.5);
        assert_eq!(controller.current_time(), 91.5);
    }

    #[test]
    fn metadata_reclamps_position() {
        let (mut controller, _rx) = controller(Some("dune.mp3"));

        controller.on_time_tick(300.0);
        controller.on_metadata_loaded(120.0);
        assert_eq!(controller.current_time(), 120.0);
        assert_eq!(controller.total_duration(), 120.0);
    }

    #[test]
    fn finished_drops_back_to_paused() {
        let (mut controller, _rx) = controller(Some("dune.mp3"));
        controller.on_metadata_loaded(120.0);

        controller.toggle();
        controller.on_time_tick(120.0);
        controller.on_finished();

        assert!(!controller.is_playing());
        assert_eq!(controller.current_time(), 120.0);
        assert_eq!(controller.progress(), 1.0);
    }

    #[test]
    fn release_stops_a_loaded_backend_only() {
        let (mut controller, rx) = controller(Some("dune.mp3"));

        controller.release();
        assert!(drain(&rx).is_empty());

        controller.toggle();
        controller.release();
        assert!(drain(&rx).contains(&AudioPlayerCommand::Stop));
    }
}
