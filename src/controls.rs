//! User controls of the display window, independent of the input backend.

use tracing::{debug, info};

use crate::display::DisplayScheduler;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ToggleAutoPlay,
    CycleVerticalOrder,
    TogglePerpendicular,
    CycleHorizontalOrientation,
    ToggleAutoHideCalls,
    CycleAutoSwitch,
    ToggleClock,
    ToggleClockOrientation,
    ToggleFullscreen,
    /// Tap (or, backwards, long press) on the call at `index`.
    CallFound { index: usize, backwards: bool },
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    /// Only the scheduler's auto-play flag changed; nothing to persist.
    AutoPlay(bool),
    StateChanged,
    SaveRequested,
}

/// Applies one control. State changes are forwarded to the scheduler right
/// away so the halves never show stale content.
pub fn apply(control: Control, state: &mut AppState, scheduler: &mut DisplayScheduler) -> Outcome {
    let settings = &mut state.settings;
    match control {
        Control::ToggleAutoPlay => {
            if !scheduler.auto_axis_active() {
                debug!("Auto play toggle ignored, no automatic mode selected");
                return Outcome::Unchanged;
            }
            let enabled = scheduler.toggle_auto_play();
            info!(enabled, "Auto play toggled");
            return Outcome::AutoPlay(enabled);
        }
        Control::Save => return Outcome::SaveRequested,
        Control::CycleVerticalOrder => settings.vertical_order = settings.vertical_order.next(),
        Control::TogglePerpendicular => settings.perpendicular_mode = !settings.perpendicular_mode,
        Control::CycleHorizontalOrientation => {
            settings.horizontal_orientation = settings.horizontal_orientation.next()
        }
        Control::ToggleAutoHideCalls => settings.auto_hide_calls = !settings.auto_hide_calls,
        Control::CycleAutoSwitch => settings.auto_switch = settings.auto_switch.next_preset(),
        Control::ToggleClock => settings.show_clock = !settings.show_clock,
        Control::ToggleClockOrientation => settings.clock_orientation = !settings.clock_orientation,
        Control::ToggleFullscreen => settings.fullscreen = !settings.fullscreen,
        Control::CallFound { index, backwards } => {
            if !state.cycle_call_found(index, backwards) {
                return Outcome::Unchanged;
            }
        }
    }

    debug!(?control, "Settings changed");
    scheduler.on_settings_changed(state.display_settings());
    Outcome::StateChanged
}
