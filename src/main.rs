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

//! # AudioQueue TUI.
//!
//! A terminal-based tracker for a personal audiobook and podcast library,
//! with inline playback of entries that carry an audio resource.
//!
//! This application coordinates a TUI frontend built with `ratatui` and an
//! audio backend worker.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all
//!   application state, and renders the UI.
//! * An **Audio Worker** owns the MPV context and processes transport
//!   commands off the main thread.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure
//! the terminal state is preserved even in the event of a crash.
//! Communication between the UI and the audio worker is handled via
//! `std::sync::mpsc` channels.

mod actions;
mod components;
mod config;
mod model;
mod player;
mod render;
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
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::events::{AppEvent, process_events},
    components::{AddEntryDialog, EntryTable, SearchBar},
    config::AppConfig,
    model::{
        Category, EntryDraft, Status,
        filter::filter_entries,
        library::Library,
        stats::{LibraryStats, aggregate},
    },
    player::{AudioPlayer, PlaybackController},
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub audio_player: AudioPlayer,

    pub library: Library,
    pub stats: LibraryStats,

    pub search: SearchBar,
    pub entry_table: EntryTable,
    pub add_form: AddEntryDialog,

    /// Transport bound to the selected entry, if any.
    pub playback: Option<PlaybackController>,

    pub last_error: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_player_event_tx = event_tx.clone();

        let mut app = Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            audio_player: AudioPlayer::new(audio_player_event_tx)?,
            library: Library::new(),
            stats: LibraryStats::default(),
            search: SearchBar::new(),
            entry_table: EntryTable::new(),
            add_form: AddEntryDialog::new(),
            playback: None,
            last_error: None,
        };

        seed_library(&mut app.library);
        app.refresh_views();

        Ok(app)
    }

    /// Recomputes the filtered table and the stats tiles from the catalog.
    ///
    /// Called after every catalog mutation and every search edit, so the
    /// derived views can never go stale.
    pub fn refresh_views(&mut self) {
        let visible = filter_entries(self.library.entries(), self.search.query());
        self.entry_table.set_entries(visible);
        self.stats = aggregate(self.library.entries());
        self.bind_playback();
    }

    /// Binds the playback controller to the selected entry.
    ///
    /// A fresh controller (zeroed position, unknown duration) replaces the
    /// old one whenever the selection lands on a different entry; the
    /// replaced controller stops the backend on its way out.
    pub fn bind_playback(&mut self) {
        let selected_id = self.entry_table.selected_entry().map(|e| e.id);
        if selected_id == self.playback.as_ref().map(|p| p.entry_id()) {
            return;
        }

        if let Some(playback) = &self.playback {
            playback.release();
        }

        self.playback = self.entry_table.selected_entry().map(|entry| {
            let source = entry
                .audio
                .as_deref()
                .map(|name| self.config.resolve_audio(name));
            PlaybackController::new(entry.id, source, self.audio_player.commands())
        });
    }
}

/// Populates the catalog with the demonstration entries.
///
/// Added oldest-last so the newest-first catalog shows them in their
/// canonical order.
fn seed_library(library: &mut Library) {
    let seeds = [
        EntryDraft {
            title: "Design Better".to_string(),
            author: "Aarron Walter & Eli Woolery".to_string(),
            duration: "4h 12m".to_string(),
            category: Some(Category::Technology),
            status: Status::ToListen,
            description: "A guide to human-centered design and the principles that drive great user experiences.".to_string(),
            audio: None,
        },
        EntryDraft {
            title: "The Joe Rogan Experience".to_string(),
            author: "Joe Rogan".to_string(),
            duration: "2h 45m".to_string(),
            category: Some(Category::Podcast),
            status: Status::ToListen,
            description: "Long-form conversations with fascinating guests from all walks of life.".to_string(),
            audio: None,
        },
        EntryDraft {
            title: "Sapiens".to_string(),
            author: "Yuval Noah Harari".to_string(),
            duration: "15h 17m".to_string(),
            category: Some(Category::History),
            status: Status::Completed,
            description: "A Brief History of Humankind. How humans came to dominate the planet and what that means for our future.".to_string(),
            audio: None,
        },
        EntryDraft {
            title: "The Psychology of Money".to_string(),
            author: "Morgan Housel".to_string(),
            duration: "5h 39m".to_string(),
            category: Some(Category::Business),
            status: Status::Listening,
            description: "Timeless lessons on wealth, greed, and happiness.".to_string(),
            audio: None,
        },
        EntryDraft {
            title: "Alchemist".to_string(),
            author: "Paul Coelho".to_string(),
            duration: "5h 35m".to_string(),
            category: Some(Category::SelfHelp),
            status: Status::ToListen,
            description: "Follow your dreams, and the universe will conspire to help you.".to_string(),
            audio: Some("alchemist.mp3".to_string()),
        },
    ];

    for draft in seeds {
        library.add(draft);
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let mut app = App::new(config).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

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
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd
    // get a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including
/// disabling raw mode, leaving the alternate screen, and resetting the
/// background color. It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a
/// result, as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background threads and enters the main event
/// loop.
///
/// This function spawns two long-running background threads:
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// (The audio worker is spawned earlier, when the [`AudioPlayer`] handle is
/// created.) After spawning, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an
/// unrecoverable application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI
    // application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
