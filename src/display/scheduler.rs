//! Decides what the top and bottom halves of the screen show.
//!
//! The scheduler is a plain state machine: the host feeds it settings
//! snapshots, timer ticks and the auto-play toggle, and reads back the
//! `(top, bottom)` pair. It never reads global state and never blocks.

use std::time::Duration;

use tracing::debug;

use crate::display::content::{ContentKind, Direction, DisplayContent};
use crate::settings::{AutoSwitch, HorizontalOrientation, VerticalOrder};

/// The subset of application state that drives the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub auto_hide_calls: bool,
    pub vertical_order: VerticalOrder,
    pub perpendicular_mode: bool,
    pub horizontal_orientation: HorizontalOrientation,
    pub auto_switch: AutoSwitch,
    pub has_trump: bool,
    /// Calls exist and are not hidden by auto-hide.
    pub show_calls: bool,
}

impl DisplaySettings {
    pub fn is_available(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Trump => self.has_trump,
            ContentKind::Calls => self.show_calls,
        }
    }

    pub fn vertical_auto(&self) -> bool {
        self.vertical_order == VerticalOrder::Auto
    }

    pub fn horizontal_auto(&self) -> bool {
        self.perpendicular_mode && self.horizontal_orientation == HorizontalOrientation::Auto
    }

    fn pick(&self, kind: ContentKind) -> Option<ContentKind> {
        self.is_available(kind).then_some(kind)
    }
}

#[derive(Debug, Clone)]
pub struct DisplayScheduler {
    settings: DisplaySettings,
    cycle: ContentKind, // vertical auto-cycle selection
    facing: Direction,  // side the top half faces in perpendicular mode
    auto_play: bool,
    top: DisplayContent,
    bottom: DisplayContent,
}

impl DisplayScheduler {
    pub fn new(settings: DisplaySettings) -> Self {
        let mut scheduler = Self {
            settings,
            cycle: ContentKind::Trump,
            facing: Direction::Left,
            auto_play: true,
            top: DisplayContent::None,
            bottom: DisplayContent::None,
        };
        scheduler.on_settings_changed(settings);
        scheduler
    }

    pub fn top(&self) -> DisplayContent {
        self.top
    }

    pub fn bottom(&self) -> DisplayContent {
        self.bottom
    }

    pub fn contents(&self) -> (DisplayContent, DisplayContent) {
        (self.top, self.bottom)
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    /// True when at least one axis switches on its own; the auto-play toggle
    /// only matters then.
    pub fn auto_axis_active(&self) -> bool {
        self.settings.vertical_auto() || self.settings.horizontal_auto()
    }

    /// Interval the host timer should tick at, if ticking would do anything.
    pub fn tick_interval(&self) -> Option<Duration> {
        if self.auto_play && self.auto_axis_active() {
            self.settings.auto_switch.interval()
        } else {
            None
        }
    }

    pub fn on_settings_changed(
        &mut self,
        settings: DisplaySettings,
    ) -> (DisplayContent, DisplayContent) {
        self.settings = settings;
        match settings.horizontal_orientation {
            HorizontalOrientation::Left => self.facing = Direction::Left,
            HorizontalOrientation::Right => self.facing = Direction::Right,
            HorizontalOrientation::Auto => {}
        }
        // Follow the substitution so reappearing content does not cause a jump
        if !settings.is_available(self.cycle) && settings.is_available(self.cycle.other()) {
            self.cycle = self.cycle.other();
        }
        self.recompute();
        self.contents()
    }

    pub fn on_auto_tick(&mut self) -> (DisplayContent, DisplayContent) {
        if !self.auto_play {
            return self.contents();
        }
        if self.settings.vertical_auto() && self.settings.is_available(self.cycle.other()) {
            self.cycle = self.cycle.other();
        }
        if self.settings.horizontal_auto() && !(self.top.is_none() && self.bottom.is_none()) {
            self.facing = self.facing.opposite();
        }
        self.recompute();
        debug!(top = ?self.top, bottom = ?self.bottom, "Auto switch");
        self.contents()
    }

    pub fn set_auto_play(&mut self, enabled: bool) {
        self.auto_play = enabled;
    }

    pub fn toggle_auto_play(&mut self) -> bool {
        self.auto_play = !self.auto_play;
        self.auto_play
    }

    fn recompute(&mut self) {
        let settings = self.settings;
        let place = |kind: Option<ContentKind>, direction: Direction| {
            kind.map_or(DisplayContent::None, |kind| kind.with(direction))
        };

        if settings.perpendicular_mode {
            let top_kind = match settings.vertical_order {
                VerticalOrder::Auto => self.cycle,
                VerticalOrder::TrumpOnTop => ContentKind::Trump,
                VerticalOrder::CallsOnTop => ContentKind::Calls,
            };
            self.top = place(settings.pick(top_kind), self.facing);
            self.bottom = place(settings.pick(top_kind.other()), self.facing.opposite());
            return;
        }

        match settings.vertical_order {
            VerticalOrder::Auto => {
                let shown = place(settings.pick(self.cycle), Direction::Center);
                self.top = shown;
                self.bottom = shown;
            }
            VerticalOrder::TrumpOnTop => {
                self.top = place(settings.pick(ContentKind::Trump), Direction::Center);
                self.bottom = place(settings.pick(ContentKind::Calls), Direction::Center);
            }
            VerticalOrder::CallsOnTop => {
                self.top = place(settings.pick(ContentKind::Calls), Direction::Center);
                self.bottom = place(settings.pick(ContentKind::Trump), Direction::Center);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(
        vertical_order: VerticalOrder,
        has_trump: bool,
        show_calls: bool,
    ) -> DisplaySettings {
        DisplaySettings {
            auto_hide_calls: false,
            vertical_order,
            perpendicular_mode: false,
            horizontal_orientation: HorizontalOrientation::Auto,
            auto_switch: AutoSwitch::default(),
            has_trump,
            show_calls,
        }
    }

    fn perpendicular(
        vertical_order: VerticalOrder,
        horizontal_orientation: HorizontalOrientation,
    ) -> DisplaySettings {
        DisplaySettings {
            perpendicular_mode: true,
            horizontal_orientation,
            ..settings(vertical_order, true, true)
        }
    }

    #[test]
    fn test_trump_on_top_splits_content() {
        let scheduler = DisplayScheduler::new(settings(VerticalOrder::TrumpOnTop, true, true));
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Center));
        assert_eq!(scheduler.bottom(), DisplayContent::Calls(Direction::Center));
    }

    #[test]
    fn test_calls_on_top_splits_content() {
        let scheduler = DisplayScheduler::new(settings(VerticalOrder::CallsOnTop, true, true));
        assert_eq!(scheduler.top(), DisplayContent::Calls(Direction::Center));
        assert_eq!(scheduler.bottom(), DisplayContent::Trump(Direction::Center));
    }

    #[test]
    fn test_fixed_order_substitutes_none_for_missing_content() {
        let scheduler = DisplayScheduler::new(settings(VerticalOrder::TrumpOnTop, false, true));
        assert_eq!(scheduler.top(), DisplayContent::None);
        assert_eq!(scheduler.bottom(), DisplayContent::Calls(Direction::Center));
    }

    #[test]
    fn test_auto_with_only_trump_never_changes() {
        let mut scheduler = DisplayScheduler::new(settings(VerticalOrder::Auto, true, false));
        let expected = (
            DisplayContent::Trump(Direction::Center),
            DisplayContent::Trump(Direction::Center),
        );
        assert_eq!(scheduler.contents(), expected);
        for _ in 0..5 {
            assert_eq!(scheduler.on_auto_tick(), expected);
        }
    }

    #[test]
    fn test_auto_tick_moves_from_trump_to_calls() {
        let mut scheduler = DisplayScheduler::new(settings(VerticalOrder::Auto, true, true));
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Center));
        scheduler.on_auto_tick();
        assert_eq!(scheduler.top(), DisplayContent::Calls(Direction::Center));
        assert_eq!(scheduler.bottom(), DisplayContent::Calls(Direction::Center));
    }

    #[test]
    fn test_auto_starts_on_calls_when_no_trump() {
        let scheduler = DisplayScheduler::new(settings(VerticalOrder::Auto, false, true));
        assert_eq!(scheduler.top(), DisplayContent::Calls(Direction::Center));
    }

    #[test]
    fn test_nothing_to_show() {
        let mut scheduler = DisplayScheduler::new(settings(VerticalOrder::Auto, false, false));
        assert_eq!(scheduler.contents(), (DisplayContent::None, DisplayContent::None));
        scheduler.on_auto_tick();
        assert_eq!(scheduler.contents(), (DisplayContent::None, DisplayContent::None));
    }

    #[test]
    fn test_paused_ticks_are_ignored() {
        let mut scheduler = DisplayScheduler::new(settings(VerticalOrder::Auto, true, true));
        scheduler.set_auto_play(false);
        scheduler.on_auto_tick();
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Center));
    }

    #[test]
    fn test_resume_continues_from_current_selection() {
        let mut scheduler = DisplayScheduler::new(settings(VerticalOrder::Auto, true, true));
        scheduler.on_auto_tick();
        let before = scheduler.contents();
        scheduler.set_auto_play(false);
        assert_eq!(scheduler.contents(), before);
        scheduler.set_auto_play(true);
        assert_eq!(scheduler.contents(), before);
        scheduler.on_auto_tick();
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Center));
    }

    #[test]
    fn test_hiding_calls_substitutes_trump_without_tick() {
        let mut scheduler = DisplayScheduler::new(settings(VerticalOrder::Auto, true, true));
        scheduler.on_auto_tick();
        assert_eq!(scheduler.top(), DisplayContent::Calls(Direction::Center));
        scheduler.on_settings_changed(settings(VerticalOrder::Auto, true, false));
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Center));
        assert_eq!(scheduler.bottom(), DisplayContent::Trump(Direction::Center));
    }

    #[test]
    fn test_reappearing_calls_do_not_jump() {
        let mut scheduler = DisplayScheduler::new(settings(VerticalOrder::Auto, true, true));
        scheduler.on_auto_tick();
        scheduler.on_settings_changed(settings(VerticalOrder::Auto, true, false));
        scheduler.on_settings_changed(settings(VerticalOrder::Auto, true, true));
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Center));
    }

    #[test]
    fn test_tick_interval_requires_auto_axis_and_auto_play() {
        let mut scheduler = DisplayScheduler::new(settings(VerticalOrder::TrumpOnTop, true, true));
        assert!(!scheduler.auto_axis_active());
        assert_eq!(scheduler.tick_interval(), None);

        scheduler.on_settings_changed(settings(VerticalOrder::Auto, true, true));
        assert_eq!(scheduler.tick_interval(), Some(Duration::from_secs(5)));

        scheduler.set_auto_play(false);
        assert_eq!(scheduler.tick_interval(), None);
    }

    #[test]
    fn test_tick_interval_off() {
        let scheduler = DisplayScheduler::new(DisplaySettings {
            auto_switch: AutoSwitch::Off,
            ..settings(VerticalOrder::Auto, true, true)
        });
        assert!(scheduler.auto_axis_active());
        assert_eq!(scheduler.tick_interval(), None);
    }

    #[test]
    fn test_perpendicular_fixed_left() {
        let layout = perpendicular(VerticalOrder::TrumpOnTop, HorizontalOrientation::Left);
        let scheduler = DisplayScheduler::new(layout);
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Left));
        assert_eq!(scheduler.bottom(), DisplayContent::Calls(Direction::Right));
    }

    #[test]
    fn test_perpendicular_fixed_right_ignores_ticks() {
        let layout = perpendicular(VerticalOrder::CallsOnTop, HorizontalOrientation::Right);
        let mut scheduler = DisplayScheduler::new(layout);
        let expected = (
            DisplayContent::Calls(Direction::Right),
            DisplayContent::Trump(Direction::Left),
        );
        assert_eq!(scheduler.contents(), expected);
        assert!(!scheduler.auto_axis_active());
        assert_eq!(scheduler.on_auto_tick(), expected);
    }

    #[test]
    fn test_perpendicular_auto_swaps_sides() {
        let layout = perpendicular(VerticalOrder::TrumpOnTop, HorizontalOrientation::Auto);
        let mut scheduler = DisplayScheduler::new(layout);
        assert!(scheduler.auto_axis_active());
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Left));
        scheduler.on_auto_tick();
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Right));
        assert_eq!(scheduler.bottom(), DisplayContent::Calls(Direction::Left));
        scheduler.on_auto_tick();
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Left));
    }

    #[test]
    fn test_perpendicular_with_vertical_auto_swaps_halves() {
        let layout = perpendicular(VerticalOrder::Auto, HorizontalOrientation::Left);
        let mut scheduler = DisplayScheduler::new(layout);
        let trump_left = (
            DisplayContent::Trump(Direction::Left),
            DisplayContent::Calls(Direction::Right),
        );
        assert_eq!(scheduler.contents(), trump_left);
        scheduler.on_auto_tick();
        let calls_left = (
            DisplayContent::Calls(Direction::Left),
            DisplayContent::Trump(Direction::Right),
        );
        assert_eq!(scheduler.contents(), calls_left);
    }

    #[test]
    fn test_auto_facing_survives_switch_to_fixed_and_back() {
        let layout = perpendicular(VerticalOrder::TrumpOnTop, HorizontalOrientation::Right);
        let mut scheduler = DisplayScheduler::new(layout);
        let auto = perpendicular(VerticalOrder::TrumpOnTop, HorizontalOrientation::Auto);
        scheduler.on_settings_changed(auto);
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Right));
    }

    #[test]
    fn test_leaving_perpendicular_mode_recenters() {
        let layout = perpendicular(VerticalOrder::TrumpOnTop, HorizontalOrientation::Left);
        let mut scheduler = DisplayScheduler::new(layout);
        scheduler.on_settings_changed(settings(VerticalOrder::TrumpOnTop, true, true));
        assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Center));
        assert_eq!(scheduler.bottom(), DisplayContent::Calls(Direction::Center));
    }
}
