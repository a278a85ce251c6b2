pub const RENDER_WIDTH: i32 = 1080;           // Width of the portrait render texture
pub const RENDER_HEIGHT: i32 = 1920;          // Height of the portrait render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const BAR_HEIGHT: i32 = 120;              // Control bar between the two halves
pub const LABEL_HEIGHT: i32 = 60;             // "Trump card" / "Calls" label strips
pub const SLOT_HEIGHT: i32 = (RENDER_HEIGHT - BAR_HEIGHT - 2 * LABEL_HEIGHT) / 2;

pub const ANIMATION_DURATION: f32 = 1.0;      // Slot content transition (seconds)
pub const SLIDE_FRACTION: f32 = 1.0 / 3.0;    // Share of the slot a transition slides across

pub const DEFAULT_AUTO_SWITCH_SECONDS: u32 = 5;
pub const AUTO_SWITCH_PRESETS: [u32; 6] = [3, 5, 10, 20, 60, 300];
pub const LEGACY_DISABLED_SECONDS: u32 = 1_577_847_600; // "50 years", the old off switch

pub const MINUTE_MS: u64 = 60_000;
pub const MAX_CALL_KEYS: usize = 9;           // Calls reachable from the number keys
pub const MAX_CALL_NUMBER: u32 = 99;          // Copies of one card a call can target
