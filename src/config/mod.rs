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

//! Application configuration.
//!
//! This module manages the application configuration file. The only
//! substantive setting is the audio-assets directory that entry audio file
//! names resolve against.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "audioqueue";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub audio_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            audio_dir: "audio".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves an entry's audio file name against the configured assets
    /// directory.
    pub fn resolve_audio(&self, filename: &str) -> String {
        let mut path = PathBuf::from(&self.audio_dir);
        path.push(filename);
        path.to_string_lossy().into_owned()
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_audio_dir_and_filename() {
        let config = AppConfig {
            version: 1,
            audio_dir: "/media/audio".to_string(),
        };

        assert_eq!(
            config.resolve_audio("alchemist.mp3"),
            "/media/audio/alchemist.mp3"
        );
    }
}
