//! raylib drawing of the display: both halves, their labels and the control
//! bar. Everything is drawn into a fixed portrait framebuffer which is then
//! scaled into the window.

pub mod slot;
pub mod widgets;

use raylib::prelude::*;

use crate::constants::*;
use crate::display::{DisplayContent, DisplayScheduler};
use crate::error::{Error, Result};
use crate::state::AppState;

use self::slot::SlotTransition;
use self::widgets::*;

const LAYER_SIZE: i32 = RENDER_WIDTH; // square, fits a slot in either orientation
const CLOCK_WIDTH: i32 = 240;
const LABEL_FONT: i32 = 32;
const CLOCK_FONT: i32 = 56;
const STATUS_FONT: i32 = 30;

/// What one frame shows besides the slot contents.
pub struct FrameView<'a> {
    pub state: &'a AppState,
    pub scheduler: &'a DisplayScheduler,
    pub clock: &'a str,
    pub status: Option<&'a str>,
}

pub struct Renderer {
    framebuffer: RenderTexture2D,
    // top current, top previous, bottom current, bottom previous
    layers: [RenderTexture2D; 4],
    label: RenderTexture2D,
    clock: RenderTexture2D,

    top: SlotTransition,
    bottom: SlotTransition,
}

fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    width: i32,
    height: i32,
) -> Result<RenderTexture2D> {
    rl.load_render_texture(thread, width as u32, height as u32).map_err(|e| {
        Error::Render(format!("Failed to create {}x{} render texture: {}", width, height, e))
    })
}

impl Renderer {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        scheduler: &DisplayScheduler,
    ) -> Result<Self> {
        Ok(Self {
            framebuffer: load_texture(rl, thread, RENDER_WIDTH, RENDER_HEIGHT)?,
            layers: [
                load_texture(rl, thread, LAYER_SIZE, LAYER_SIZE)?,
                load_texture(rl, thread, LAYER_SIZE, LAYER_SIZE)?,
                load_texture(rl, thread, LAYER_SIZE, LAYER_SIZE)?,
                load_texture(rl, thread, LAYER_SIZE, LAYER_SIZE)?,
            ],
            label: load_texture(rl, thread, RENDER_WIDTH, LABEL_HEIGHT)?,
            clock: load_texture(rl, thread, CLOCK_WIDTH, BAR_HEIGHT)?,
            top: SlotTransition::new(true, scheduler.top()),
            bottom: SlotTransition::new(false, scheduler.bottom()),
        })
    }

    /// Picks up content changes and advances running transitions.
    pub fn update(&mut self, dt: f32, scheduler: &DisplayScheduler) {
        self.top.set(scheduler.top());
        self.bottom.set(scheduler.bottom());
        self.top.update(dt);
        self.bottom.update(dt);
    }

    pub fn draw(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, view: &FrameView) {
        let Self { framebuffer, layers, label, clock, top, bottom } = self;
        let [top_current, top_previous, bottom_current, bottom_previous] = layers;

        // --- Slot contents, drawn upright into their layers ---
        render_layer(rl, thread, top_current, Some(top.current), view.state);
        render_layer(rl, thread, top_previous, top.previous, view.state);
        render_layer(rl, thread, bottom_current, Some(bottom.current), view.state);
        render_layer(rl, thread, bottom_previous, bottom.previous, view.state);

        rl.draw_texture_mode(thread, label, |mut tmd| {
            tmd.clear_background(Color::BLANK);
            let center = Vector2::new(RENDER_WIDTH as f32 * 0.5, LABEL_HEIGHT as f32 * 0.5);
            draw_text_centered(&mut tmd, top.current.label(), center, LABEL_FONT, ON_SURFACE);
        });

        rl.draw_texture_mode(thread, clock, |mut tmd| {
            tmd.clear_background(Color::BLANK);
            let center = Vector2::new(CLOCK_WIDTH as f32 * 0.5, BAR_HEIGHT as f32 * 0.5);
            draw_text_centered(&mut tmd, view.clock, center, CLOCK_FONT, ON_SURFACE);
        });

        // --- Compose the portrait frame ---
        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            tmd.clear_background(BACKGROUND);

            let center_x = RENDER_WIDTH as f32 * 0.5;
            let top_center = Vector2::new(center_x, SLOT_HEIGHT as f32 * 0.5);
            let bottom_center = Vector2::new(center_x, (RENDER_HEIGHT - SLOT_HEIGHT / 2) as f32);
            draw_slot(&mut tmd, top, top_current, top_previous, top_center);
            draw_slot(&mut tmd, bottom, bottom_current, bottom_previous, bottom_center);

            let top_label_y = SLOT_HEIGHT;
            let bar_y = top_label_y + LABEL_HEIGHT;
            let bottom_label_y = bar_y + BAR_HEIGHT;

            tmd.draw_rectangle(0, top_label_y, RENDER_WIDTH, LABEL_HEIGHT, BACKGROUND);
            let top_label_center = Vector2::new(center_x, (top_label_y + LABEL_HEIGHT / 2) as f32);
            draw_rotated(
                &mut tmd,
                label,
                RENDER_WIDTH,
                LABEL_HEIGHT,
                top_label_center,
                180.0,
                Color::WHITE,
            );

            tmd.draw_rectangle(0, bar_y, RENDER_WIDTH, BAR_HEIGHT, SURFACE);
            draw_status(&mut tmd, view, bar_y);
            if view.state.settings.show_clock {
                let orientation = view.state.settings.clock_orientation;
                let clock_y = (bar_y + BAR_HEIGHT / 2) as f32;
                for left_side in [true, false] {
                    let x = if left_side {
                        CLOCK_WIDTH / 2
                    } else {
                        RENDER_WIDTH - CLOCK_WIDTH / 2
                    };
                    let rotation = if orientation ^ left_side { 0.0 } else { 180.0 };
                    let center = Vector2::new(x as f32, clock_y);
                    draw_rotated(
                        &mut tmd,
                        clock,
                        CLOCK_WIDTH,
                        BAR_HEIGHT,
                        center,
                        rotation,
                        Color::WHITE,
                    );
                }
            }

            tmd.draw_rectangle(0, bottom_label_y, RENDER_WIDTH, LABEL_HEIGHT, BACKGROUND);
            let bottom_label_center =
                Vector2::new(center_x, (bottom_label_y + LABEL_HEIGHT / 2) as f32);
            let bottom_label = bottom.current.label();
            draw_text_centered(&mut tmd, bottom_label, bottom_label_center, LABEL_FONT, ON_SURFACE);
        });

        // --- Scale the frame into the window, letterboxed ---
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        let scale = (sw / RENDER_WIDTH as f32).min(sh / RENDER_HEIGHT as f32);
        let width = RENDER_WIDTH as f32 * scale;
        let height = RENDER_HEIGHT as f32 * scale;

        d.draw_texture_pro(
            &*framebuffer,
            Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, -(RENDER_HEIGHT as f32)),
            Rectangle::new((sw - width) * 0.5, (sh - height) * 0.5, width, height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

fn render_layer(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    layer: &mut RenderTexture2D,
    content: Option<DisplayContent>,
    state: &AppState,
) {
    let Some(content) = content else {
        return;
    };
    rl.draw_texture_mode(thread, layer, |mut tmd| {
        tmd.clear_background(Color::BLANK);

        // Sideways content is laid out in a tall strip that becomes a wide one once rotated
        let inset = (LAYER_SIZE - SLOT_HEIGHT) as f32 * 0.5;
        let area = match content.direction() {
            Some(direction) if direction.is_sideways() => {
                Rectangle::new(inset, 0.0, SLOT_HEIGHT as f32, LAYER_SIZE as f32)
            }
            _ => Rectangle::new(0.0, inset, LAYER_SIZE as f32, SLOT_HEIGHT as f32),
        };

        match content {
            DisplayContent::Trump(_) => draw_trump(&mut tmd, state.trump.as_ref(), area),
            DisplayContent::Calls(_) => draw_calls(&mut tmd, &state.calls, area),
            DisplayContent::None => {}
        }
    });
}

fn draw_slot<D: RaylibDraw>(
    d: &mut D,
    slot: &SlotTransition,
    current: &RenderTexture2D,
    previous: &RenderTexture2D,
    center: Vector2,
) {
    let top = slot.is_top();
    let progress = slot.progress();

    if let Some(content) = slot.previous {
        if let Some(direction) = content.direction() {
            let offset = slot.exiting_offset();
            draw_rotated(
                d,
                previous,
                LAYER_SIZE,
                LAYER_SIZE,
                Vector2::new(center.x + offset.x, center.y + offset.y),
                direction.rotation_degrees(top),
                with_alpha(Color::WHITE, 1.0 - progress),
            );
        }
    }

    if let Some(direction) = slot.current.direction() {
        let offset = slot.entering_offset();
        draw_rotated(
            d,
            current,
            LAYER_SIZE,
            LAYER_SIZE,
            Vector2::new(center.x + offset.x, center.y + offset.y),
            direction.rotation_degrees(top),
            with_alpha(Color::WHITE, progress),
        );
    }
}

/// Draws a render texture centered on `center`, rotated clockwise.
fn draw_rotated<D: RaylibDraw>(
    d: &mut D,
    texture: &RenderTexture2D,
    width: i32,
    height: i32,
    center: Vector2,
    rotation: f32,
    tint: Color,
) {
    let (w, h) = (width as f32, height as f32);
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, w, -h), // render textures are stored upside-down
        Rectangle::new(center.x, center.y, w, h),
        Vector2::new(w * 0.5, h * 0.5),
        rotation,
        tint,
    );
}

fn draw_status<D: RaylibDraw>(d: &mut D, view: &FrameView, bar_y: i32) {
    let center_x = RENDER_WIDTH as f32 * 0.5;
    let scheduler = view.scheduler;

    let mode = if scheduler.auto_axis_active() {
        if scheduler.auto_play() {
            format!("AUTO  {}  [Space]", view.state.settings.auto_switch)
        } else {
            "PAUSED  [Space]".to_string()
        }
    } else {
        "FIXED".to_string()
    };
    let mode_center = Vector2::new(center_x, (bar_y + BAR_HEIGHT / 3) as f32);
    draw_text_centered(d, &mode, mode_center, STATUS_FONT, ON_SURFACE);

    let hint = view.status.unwrap_or("[V]ertical [P]erp [H]oriz [A]uto-hide [I]nterval [S]ave");
    let hint_center = Vector2::new(center_x, (bar_y + 2 * BAR_HEIGHT / 3) as f32);
    draw_text_centered(d, hint, hint_center, STATUS_FONT / 2 + 4, OUTLINE);
}
