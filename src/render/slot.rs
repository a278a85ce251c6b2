use raylib::prelude::*;

use crate::constants::*;
use crate::display::{Direction, DisplayContent};

/// Cross-fade and slide between the previous and the current content of one
/// half of the screen.
pub struct SlotTransition {
    top: bool,
    pub current: DisplayContent,
    pub previous: Option<DisplayContent>,

    animation_timer: f32,
    progress: f32,
    tween: ease::Tween,
}

impl SlotTransition {
    pub fn new(top: bool, content: DisplayContent) -> Self {
        Self {
            top,
            current: content,
            previous: None,
            animation_timer: 0.0,
            progress: 1.0,
            tween: ease::Tween::new(ease::cubic_out, 0.0, 1.0, ANIMATION_DURATION),
        }
    }

    pub fn is_top(&self) -> bool {
        self.top
    }

    /// Starts a transition when the content changed.
    pub fn set(&mut self, content: DisplayContent) {
        if content == self.current {
            return;
        }
        self.previous = Some(self.current);
        self.current = content;
        self.animation_timer = 0.0;
        self.progress = 0.0;
        self.tween = ease::Tween::new(ease::cubic_out, 0.0, 1.0, ANIMATION_DURATION);
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating() {
            return;
        }
        self.animation_timer += dt;
        self.progress = self.tween.apply(dt).clamp(0.0, 1.0);

        if self.animation_timer >= ANIMATION_DURATION {
            self.previous = None;
            self.progress = 1.0;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.previous.is_some()
    }

    /// 0 when the transition starts, 1 once the new content has settled.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Offset (in render pixels) of the incoming content.
    pub fn entering_offset(&self) -> Vector2 {
        let towards = slide_towards(self.current, self.top, true);
        scale_offset(towards, -(1.0 - self.progress))
    }

    /// Offset (in render pixels) of the outgoing content.
    pub fn exiting_offset(&self) -> Vector2 {
        match self.previous {
            Some(previous) => scale_offset(slide_towards(previous, self.top, false), self.progress),
            None => Vector2::zero(),
        }
    }
}

/// Unit vector (screen coordinates, y down) the content slides along.
/// Incoming content moves away from the control bar, outgoing content moves
/// back towards it.
pub fn slide_towards(content: DisplayContent, top: bool, entering: bool) -> Vector2 {
    let down = Vector2::new(0.0, 1.0);
    let up = Vector2::new(0.0, -1.0);
    let right = Vector2::new(1.0, 0.0);
    let left = Vector2::new(-1.0, 0.0);

    match (content.direction(), entering) {
        (Some(Direction::Center), true) => if top { down } else { up },
        (Some(Direction::Center), false) => if top { up } else { down },
        (Some(Direction::Left), true) => right,
        (Some(Direction::Left), false) => left,
        (Some(Direction::Right), true) => left,
        (Some(Direction::Right), false) => right,
        (None, true) => down,
        (None, false) => up,
    }
}

fn scale_offset(towards: Vector2, amount: f32) -> Vector2 {
    Vector2::new(
        towards.x * amount * SLIDE_FRACTION * RENDER_WIDTH as f32,
        towards.y * amount * SLIDE_FRACTION * SLOT_HEIGHT as f32,
    )
}
