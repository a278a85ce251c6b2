//! Application settings and the auto-switch interval model.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Error, Result};

/// Which content sits on the top half when the screen is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VerticalOrder {
    /// Both halves show the same content and switch between trump and calls.
    #[default]
    Auto,
    TrumpOnTop,
    CallsOnTop,
}

impl VerticalOrder {
    pub fn next(self) -> Self {
        match self {
            VerticalOrder::Auto => VerticalOrder::TrumpOnTop,
            VerticalOrder::TrumpOnTop => VerticalOrder::CallsOnTop,
            VerticalOrder::CallsOnTop => VerticalOrder::Auto,
        }
    }
}

/// Side the top half faces in perpendicular mode. The bottom half faces the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalOrientation {
    #[default]
    Auto,
    Left,
    Right,
}

impl HorizontalOrientation {
    pub fn next(self) -> Self {
        match self {
            HorizontalOrientation::Auto => HorizontalOrientation::Left,
            HorizontalOrientation::Left => HorizontalOrientation::Right,
            HorizontalOrientation::Right => HorizontalOrientation::Auto,
        }
    }
}

/// How often automatic modes advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "StoredAutoSwitch")]
pub enum AutoSwitch {
    Off,
    Every { seconds: u32 },
}

/// On-disk shape of [`AutoSwitch`]; stored seconds go through
/// [`AutoSwitch::from_seconds`] like command line input does.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum StoredAutoSwitch {
    Off,
    Every { seconds: u32 },
}

impl From<StoredAutoSwitch> for AutoSwitch {
    fn from(stored: StoredAutoSwitch) -> Self {
        match stored {
            StoredAutoSwitch::Off => AutoSwitch::Off,
            StoredAutoSwitch::Every { seconds } => AutoSwitch::from_seconds(seconds),
        }
    }
}

impl Default for AutoSwitch {
    fn default() -> Self {
        AutoSwitch::Every { seconds: DEFAULT_AUTO_SWITCH_SECONDS }
    }
}

impl AutoSwitch {
    /// `0` and the legacy "50 years" value both mean off.
    pub fn from_seconds(seconds: u32) -> Self {
        if seconds == 0 || seconds >= LEGACY_DISABLED_SECONDS {
            AutoSwitch::Off
        } else {
            AutoSwitch::Every { seconds }
        }
    }

    pub fn interval(self) -> Option<Duration> {
        match self {
            AutoSwitch::Off => None,
            AutoSwitch::Every { seconds } => Some(Duration::from_secs(u64::from(seconds))),
        }
    }

    /// Steps through the presets, then off, then back to the first preset.
    /// A custom interval moves to the next larger preset.
    pub fn next_preset(self) -> Self {
        match self {
            AutoSwitch::Off => AutoSwitch::Every { seconds: AUTO_SWITCH_PRESETS[0] },
            AutoSwitch::Every { seconds } => AUTO_SWITCH_PRESETS
                .iter()
                .find(|preset| **preset > seconds)
                .map(|preset| AutoSwitch::Every { seconds: *preset })
                .unwrap_or(AutoSwitch::Off),
        }
    }
}

impl fmt::Display for AutoSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AutoSwitch::Off => write!(f, "Off"),
            AutoSwitch::Every { seconds: 1 } => write!(f, "1 second"),
            AutoSwitch::Every { seconds } if seconds % 60 == 0 => match seconds / 60 {
                1 => write!(f, "1 minute"),
                minutes => write!(f, "{minutes} minutes"),
            },
            AutoSwitch::Every { seconds } => write!(f, "{seconds} seconds"),
        }
    }
}

impl FromStr for AutoSwitch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("off") {
            return Ok(AutoSwitch::Off);
        }
        trimmed
            .trim_end_matches('s')
            .parse::<u32>()
            .map(AutoSwitch::from_seconds)
            .map_err(|_| Error::InvalidInterval(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fullscreen: bool,
    pub show_clock: bool,
    /// Flips which end of the control bar shows its clock upside-down.
    pub clock_orientation: bool,
    pub vertical_order: VerticalOrder,
    pub auto_hide_calls: bool,
    pub perpendicular_mode: bool,
    pub horizontal_orientation: HorizontalOrientation,
    pub auto_switch: AutoSwitch,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: false,
            show_clock: true,
            clock_orientation: false,
            vertical_order: VerticalOrder::Auto,
            auto_hide_calls: false,
            perpendicular_mode: false,
            horizontal_orientation: HorizontalOrientation::Auto,
            auto_switch: AutoSwitch::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_sentinel_is_off() {
        assert_eq!(AutoSwitch::from_seconds(LEGACY_DISABLED_SECONDS), AutoSwitch::Off);
        assert_eq!(AutoSwitch::from_seconds(0), AutoSwitch::Off);
        assert_eq!(AutoSwitch::from_seconds(10), AutoSwitch::Every { seconds: 10 });
    }

    #[test]
    fn test_interval_labels() {
        assert_eq!(AutoSwitch::Every { seconds: 3 }.to_string(), "3 seconds");
        assert_eq!(AutoSwitch::Every { seconds: 60 }.to_string(), "1 minute");
        assert_eq!(AutoSwitch::Every { seconds: 300 }.to_string(), "5 minutes");
        assert_eq!(AutoSwitch::Off.to_string(), "Off");
    }

    #[test]
    fn test_next_preset_cycles_through_off() {
        let mut interval = AutoSwitch::Off;
        let mut seen = Vec::new();
        for _ in 0..7 {
            interval = interval.next_preset();
            seen.push(interval);
        }
        assert_eq!(seen.last(), Some(&AutoSwitch::Off));
        assert_eq!(seen[0], AutoSwitch::Every { seconds: 3 });
        assert_eq!(seen[5], AutoSwitch::Every { seconds: 300 });
    }

    #[test]
    fn test_custom_interval_moves_to_next_larger_preset() {
        let custom = AutoSwitch::Every { seconds: 7 };
        assert_eq!(custom.next_preset(), AutoSwitch::Every { seconds: 10 });
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!("off".parse::<AutoSwitch>().unwrap(), AutoSwitch::Off);
        assert_eq!("20".parse::<AutoSwitch>().unwrap(), AutoSwitch::Every { seconds: 20 });
        assert_eq!("20s".parse::<AutoSwitch>().unwrap(), AutoSwitch::Every { seconds: 20 });
        assert!("soon".parse::<AutoSwitch>().is_err());
    }

    #[test]
    fn test_settings_json_fills_missing_fields() {
        let settings: Settings =
            serde_json::from_str(r#"{"vertical_order":"calls_on_top"}"#).unwrap();
        assert_eq!(settings.vertical_order, VerticalOrder::CallsOnTop);
        assert_eq!(settings.auto_switch, AutoSwitch::default());
        assert!(settings.show_clock);
    }

    #[test]
    fn test_interval_json_shape() {
        let json = serde_json::to_string(&AutoSwitch::Every { seconds: 5 }).unwrap();
        assert_eq!(json, r#"{"every":{"seconds":5}}"#);
        assert_eq!(serde_json::to_string(&AutoSwitch::Off).unwrap(), r#""off""#);
    }

    #[test]
    fn test_stored_interval_normalised() {
        let zero: Settings =
            serde_json::from_str(r#"{"auto_switch":{"every":{"seconds":0}}}"#).unwrap();
        assert_eq!(zero.auto_switch, AutoSwitch::Off);
        assert_eq!(zero.auto_switch.interval(), None);

        let legacy: Settings =
            serde_json::from_str(r#"{"auto_switch":{"every":{"seconds":1577847600}}}"#).unwrap();
        assert_eq!(legacy.auto_switch, AutoSwitch::Off);

        let kept: AutoSwitch = serde_json::from_str(r#"{"every":{"seconds":20}}"#).unwrap();
        assert_eq!(kept, AutoSwitch::Every { seconds: 20 });
    }
}
