use raylib::prelude::*;

use crate::card::{Call, PlayingCard, Suit};

pub const BACKGROUND: Color = Color::new(28, 27, 31, 255);
pub const SURFACE: Color = Color::new(43, 41, 48, 255);
pub const OUTLINE: Color = Color::new(147, 143, 153, 255);
pub const ON_SURFACE: Color = Color::new(230, 225, 229, 255);
pub const CARD_FACE: Color = Color::new(250, 250, 250, 255);
pub const CARD_RED: Color = Color::new(200, 30, 40, 255);
pub const CARD_BLACK: Color = Color::new(20, 20, 20, 255);

const TRUMP_RANK_SIZE: i32 = 260;
const TRUMP_SUIT_SIZE: i32 = 70;
const CALL_CELL: f32 = 300.0;
const CALL_GAP: f32 = 24.0;
const CALL_CARD_SIZE: i32 = 110;
const CALL_FOUND_SIZE: i32 = 56;
const CALLS_PER_ROW: usize = 2;
const COMPLETE_ALPHA: f32 = 0.4;

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

pub fn draw_text_centered<D: RaylibDraw>(
    d: &mut D,
    text: &str,
    center: Vector2,
    font_size: i32,
    color: Color,
) {
    let width = measure_text(text, font_size);
    d.draw_text(
        text,
        center.x as i32 - width / 2,
        center.y as i32 - font_size / 2,
        font_size,
        color,
    );
}

fn suit_color(card: &PlayingCard) -> Color {
    if card.suit.is_red() { CARD_RED } else { CARD_BLACK }
}

fn suit_name(card: &PlayingCard) -> &'static str {
    match card.suit {
        Suit::Spades => "SPADES",
        Suit::Hearts => "HEARTS",
        Suit::Diamonds => "DIAMONDS",
        Suit::Clubs => "CLUBS",
    }
}

/// The trump card, large, centered in `area`.
pub fn draw_trump<D: RaylibDraw>(d: &mut D, trump: Option<&PlayingCard>, area: Rectangle) {
    let center = Vector2::new(area.x + area.width * 0.5, area.y + area.height * 0.5);
    let Some(card) = trump else {
        draw_text_centered(d, "No trump card selected", center, 40, ON_SURFACE);
        return;
    };

    let card_height = (area.height * 0.8).min(520.0);
    let card_width = card_height * 0.7;
    let face = Rectangle::new(
        center.x - card_width * 0.5,
        center.y - card_height * 0.5,
        card_width,
        card_height,
    );
    d.draw_rectangle_rounded(face, 0.08, 8, CARD_FACE);

    let color = suit_color(card);
    let rank_center = Vector2::new(center.x, center.y - 40.0);
    draw_text_centered(d, card.rank.as_str(), rank_center, TRUMP_RANK_SIZE, color);
    let suit_center = Vector2::new(center.x, center.y + 150.0);
    draw_text_centered(d, suit_name(card), suit_center, TRUMP_SUIT_SIZE, color);
}

/// Calls in a grid, two per row, centered in `area`. Each cell shows its
/// number key in the corner.
pub fn draw_calls<D: RaylibDraw>(d: &mut D, calls: &[Call], area: Rectangle) {
    let center = Vector2::new(area.x + area.width * 0.5, area.y + area.height * 0.5);
    if calls.is_empty() {
        draw_text_centered(d, "No calls added", center, 40, ON_SURFACE);
        return;
    }

    let rows = calls.len().div_ceil(CALLS_PER_ROW);
    let grid_height = rows as f32 * CALL_CELL + (rows as f32 - 1.0) * CALL_GAP;
    let scale = (area.height / grid_height).min(1.0);
    let cell = CALL_CELL * scale;
    let gap = CALL_GAP * scale;
    let top = center.y - (rows as f32 * cell + (rows as f32 - 1.0) * gap) * 0.5;

    for (index, call) in calls.iter().enumerate() {
        let row = index / CALLS_PER_ROW;
        let in_row = (calls.len() - row * CALLS_PER_ROW).min(CALLS_PER_ROW);
        let row_width = in_row as f32 * cell + (in_row as f32 - 1.0) * gap;
        let column = index % CALLS_PER_ROW;
        let x = center.x - row_width * 0.5 + column as f32 * (cell + gap);
        let y = top + row as f32 * (cell + gap);
        draw_call(d, index, call, Rectangle::new(x, y, cell, cell), scale);
    }
}

fn draw_call<D: RaylibDraw>(d: &mut D, index: usize, call: &Call, cell: Rectangle, scale: f32) {
    let alpha = if call.is_complete() { COMPLETE_ALPHA } else { 1.0 };
    let center = Vector2::new(cell.x + cell.width * 0.5, cell.y + cell.height * 0.5);

    d.draw_rectangle_lines_ex(cell, 3.0 * scale, with_alpha(OUTLINE, alpha));
    d.draw_text(
        &(index + 1).to_string(),
        (cell.x + 14.0 * scale) as i32,
        (cell.y + 10.0 * scale) as i32,
        (28.0 * scale) as i32,
        with_alpha(OUTLINE, alpha),
    );

    let card_color = with_alpha(if call.card.suit.is_red() { CARD_RED } else { ON_SURFACE }, alpha);
    draw_text_centered(
        d,
        &call.card.ascii_label(),
        Vector2::new(center.x, center.y - 40.0 * scale),
        (CALL_CARD_SIZE as f32 * scale) as i32,
        card_color,
    );
    draw_text_centered(
        d,
        &format!("{}/{}", call.found, call.number),
        Vector2::new(center.x, center.y + 70.0 * scale),
        (CALL_FOUND_SIZE as f32 * scale) as i32,
        with_alpha(ON_SURFACE, alpha),
    );

    if call.is_complete() {
        let half = cell.width * 0.5 * 0.5;
        d.draw_line_ex(
            Vector2::new(center.x - half, center.y + half),
            Vector2::new(center.x + half, center.y - half),
            12.0 * scale,
            with_alpha(OUTLINE, 0.8),
        );
    }
}
