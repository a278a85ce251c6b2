//! Wall clock shown in the control bar, refreshed on minute boundaries.

use std::time::{SystemTime, UNIX_EPOCH};

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

use crate::constants::MINUTE_MS;

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Wait until the next minute boundary. A time exactly on a boundary waits a
/// whole minute.
pub fn millis_until_next_minute(now_ms: u64) -> u64 {
    MINUTE_MS - now_ms % MINUTE_MS
}

const CLOCK_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute]");

/// 12-hour `h:mm`.
pub fn format_time(time: OffsetDateTime) -> Result<String, time::error::Format> {
    time.format(CLOCK_FORMAT)
}

pub struct Clock {
    offset: UtcOffset,
    next_refresh_ms: u64,
    text: String,
}

impl Clock {
    pub fn new(now_ms: u64) -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|e| {
            warn!("Local time offset unavailable, showing UTC: {}", e);
            UtcOffset::UTC
        });
        Self::with_offset(offset, now_ms)
    }

    pub fn with_offset(offset: UtcOffset, now_ms: u64) -> Self {
        let mut clock = Self { offset, next_refresh_ms: 0, text: String::new() };
        clock.refresh(now_ms);
        clock
    }

    /// Returns true when the text changed.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_refresh_ms {
            return false;
        }
        self.refresh(now_ms);
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn refresh(&mut self, now_ms: u64) {
        let nanos = i128::from(now_ms) * 1_000_000;
        let time = OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
            .to_offset(self.offset);
        match format_time(time) {
            Ok(text) => self.text = text,
            Err(e) => warn!("Could not format clock time: {}", e),
        }
        self.next_refresh_ms = now_ms + millis_until_next_minute(now_ms);
    }
}
