use std::time::Duration;

/// Frame-time accumulator driving `DisplayScheduler::on_auto_tick`.
///
/// The interval is re-read every frame; any change to it (including pausing,
/// which passes `None`) restarts the countdown from zero.
#[derive(Debug, Clone, Default)]
pub struct AutoSwitchTimer {
    elapsed: f32,
    armed: Option<Duration>,
}

impl AutoSwitchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds. Returns true when a tick is due.
    pub fn update(&mut self, dt: f32, interval: Option<Duration>) -> bool {
        if interval != self.armed {
            self.armed = interval;
            self.elapsed = 0.0;
        }
        let Some(interval) = interval else {
            return false;
        };

        self.elapsed += dt;
        if self.elapsed >= interval.as_secs_f32() {
            self.elapsed = 0.0;
            return true;
        }
        false
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
