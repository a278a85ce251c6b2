use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::card::{Call, PlayingCard};
use crate::display::DisplaySettings;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Everything the display shows, persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub settings: Settings,
    pub trump: Option<PlayingCard>,
    pub calls: Vec<Call>,
}

impl AppState {
    /// Reads the state file, or starts fresh when it does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No state file yet, starting with defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(Error::Io { path: path.to_path_buf(), source }),
        };
        let state = serde_json::from_str(&text)
            .map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "Loaded state file");
        Ok(state)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
        fs::write(path, text).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        info!(path = %path.display(), "Saved state file");
        Ok(())
    }

    /// False when there are no calls, or auto-hide is on and every call is found.
    pub fn show_calls(&self) -> bool {
        let all_found = self.calls.iter().all(Call::is_complete);
        !self.calls.is_empty() && !(self.settings.auto_hide_calls && all_found)
    }

    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            auto_hide_calls: self.settings.auto_hide_calls,
            vertical_order: self.settings.vertical_order,
            perpendicular_mode: self.settings.perpendicular_mode,
            horizontal_orientation: self.settings.horizontal_orientation,
            auto_switch: self.settings.auto_switch,
            has_trump: self.trump.is_some(),
            show_calls: self.show_calls(),
        }
    }

    pub fn set_trump(&mut self, trump: Option<PlayingCard>) {
        self.trump = trump;
    }

    pub fn add_call(&mut self, call: Call) {
        self.calls.push(call);
    }

    pub fn remove_call(&mut self, index: usize) -> Option<Call> {
        (index < self.calls.len()).then(|| self.calls.remove(index))
    }

    /// Steps the found count of one call forwards (or backwards). Returns
    /// false when there is no call at `index`.
    pub fn cycle_call_found(&mut self, index: usize, backwards: bool) -> bool {
        let Some(call) = self.calls.get_mut(index) else {
            return false;
        };
        if backwards {
            call.retreat_found();
        } else {
            call.advance_found();
        }
        debug!(index, found = call.found, number = call.number, "Call found count changed");
        true
    }
}
