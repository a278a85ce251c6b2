use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shengji_display::card::{Call, PlayingCard};
use shengji_display::clock::{now_ms, Clock};
use shengji_display::constants::*;
use shengji_display::controls::{self, Control, Outcome};
use shengji_display::display::{AutoSwitchTimer, DisplayScheduler};
use shengji_display::render::{FrameView, Renderer};
use shengji_display::settings::{AutoSwitch, HorizontalOrientation, VerticalOrder};
use shengji_display::state::AppState;

const STATUS_SECONDS: f32 = 2.0;

#[derive(Parser)]
#[command(name = "shengji-display")]
#[command(about = "Shows the trump card and the calls of a Sheng Ji game to the whole table")]
struct Args {
    /// State file holding settings, trump and calls
    #[arg(long, default_value = "shengji-display.json")]
    state: PathBuf,

    /// Trump card, e.g. `A:spades` or `10h`
    #[arg(short, long)]
    trump: Option<PlayingCard>,

    /// Forget the saved trump card
    #[arg(long, conflicts_with = "trump")]
    no_trump: bool,

    /// Call as card and copy number, e.g. `K:hearts:2` (repeatable, replaces saved calls)
    #[arg(short = 'c', long = "call")]
    calls: Vec<Call>,

    /// Forget the saved calls
    #[arg(long, conflicts_with = "calls")]
    no_calls: bool,

    /// Which content goes on top
    #[arg(long)]
    vertical_order: Option<VerticalOrder>,

    /// Sideways layout for players seated left and right of the screen
    #[arg(long)]
    perpendicular: Option<bool>,

    /// Side the top half faces in perpendicular mode
    #[arg(long)]
    horizontal: Option<HorizontalOrientation>,

    /// Auto switch interval in seconds, or `off`
    #[arg(long)]
    auto_switch: Option<AutoSwitch>,

    /// Hide the calls once every call is found
    #[arg(long)]
    auto_hide_calls: Option<bool>,

    /// Start fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Start with auto switching paused
    #[arg(long)]
    paused: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

const KEY_BINDINGS: [(KeyboardKey, Control); 10] = [
    (KeyboardKey::KEY_SPACE, Control::ToggleAutoPlay),
    (KeyboardKey::KEY_V, Control::CycleVerticalOrder),
    (KeyboardKey::KEY_P, Control::TogglePerpendicular),
    (KeyboardKey::KEY_H, Control::CycleHorizontalOrientation),
    (KeyboardKey::KEY_A, Control::ToggleAutoHideCalls),
    (KeyboardKey::KEY_I, Control::CycleAutoSwitch),
    (KeyboardKey::KEY_C, Control::ToggleClock),
    (KeyboardKey::KEY_O, Control::ToggleClockOrientation),
    (KeyboardKey::KEY_F, Control::ToggleFullscreen),
    (KeyboardKey::KEY_S, Control::Save),
];

const CALL_KEYS: [KeyboardKey; MAX_CALL_KEYS] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

fn apply_args(state: &mut AppState, args: &Args) {
    if let Some(trump) = args.trump {
        state.set_trump(Some(trump));
    } else if args.no_trump {
        state.set_trump(None);
    }
    if !args.calls.is_empty() {
        state.calls = args.calls.clone();
    } else if args.no_calls {
        state.calls.clear();
    }

    let settings = &mut state.settings;
    if let Some(vertical_order) = args.vertical_order {
        settings.vertical_order = vertical_order;
    }
    if let Some(perpendicular) = args.perpendicular {
        settings.perpendicular_mode = perpendicular;
    }
    if let Some(horizontal) = args.horizontal {
        settings.horizontal_orientation = horizontal;
    }
    if let Some(auto_switch) = args.auto_switch {
        settings.auto_switch = auto_switch;
    }
    if let Some(auto_hide_calls) = args.auto_hide_calls {
        settings.auto_hide_calls = auto_hide_calls;
    }
    if args.fullscreen {
        settings.fullscreen = true;
    }
}

fn pressed_controls(rl: &RaylibHandle) -> Vec<Control> {
    let mut pressed: Vec<Control> = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| rl.is_key_pressed(*key))
        .map(|(_, control)| *control)
        .collect();

    // Shift steps a call back, like a long press
    let backwards = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT)
        || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);
    for (index, key) in CALL_KEYS.iter().enumerate() {
        if rl.is_key_pressed(*key) {
            pressed.push(Control::CallFound { index, backwards });
        }
    }
    pressed
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // --- Load State ---
    let mut state = AppState::load(&args.state)
        .with_context(|| format!("Could not load state from {}", args.state.display()))?;
    let loaded = state.clone();
    apply_args(&mut state, &args);
    info!(
        trump = ?state.trump,
        calls = state.calls.len(),
        vertical_order = ?state.settings.vertical_order,
        perpendicular = state.settings.perpendicular_mode,
        "Starting display"
    );

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Sheng Ji Display")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    if state.settings.fullscreen {
        rl.toggle_fullscreen();
    }

    // --- Display State ---
    let mut scheduler = DisplayScheduler::new(state.display_settings());
    scheduler.set_auto_play(!args.paused);
    let mut timer = AutoSwitchTimer::new();
    let mut clock = Clock::new(now_ms());
    let mut renderer = Renderer::new(&mut rl, &thread, &scheduler)?;
    let mut status: Option<(String, f32)> = None;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // 1. Input
        for control in pressed_controls(&rl) {
            let fullscreen = state.settings.fullscreen;
            match controls::apply(control, &mut state, &mut scheduler) {
                Outcome::Unchanged => {}
                Outcome::AutoPlay(enabled) => {
                    let text = if enabled {
                        "Auto switching resumed"
                    } else {
                        "Auto switching paused"
                    };
                    status = Some((text.to_string(), STATUS_SECONDS));
                }
                Outcome::StateChanged => {
                    if control == Control::CycleAutoSwitch {
                        let text = format!("Auto switch: {}", state.settings.auto_switch);
                        status = Some((text, STATUS_SECONDS));
                    }
                    if state.settings.fullscreen != fullscreen {
                        rl.toggle_fullscreen();
                    }
                }
                Outcome::SaveRequested => {
                    let text = match state.save(&args.state) {
                        Ok(()) => "Saved".to_string(),
                        Err(e) => {
                            warn!("{}", e);
                            "Save failed".to_string()
                        }
                    };
                    status = Some((text, STATUS_SECONDS));
                }
            }
        }

        // 2. Auto switching and clock
        if timer.update(dt, scheduler.tick_interval()) {
            scheduler.on_auto_tick();
        }
        clock.update(now_ms());

        status = status
            .and_then(|(text, remaining)| (remaining > dt).then(|| (text, remaining - dt)));

        // 3. Draw
        renderer.update(dt, &scheduler);
        let view = FrameView {
            state: &state,
            scheduler: &scheduler,
            clock: clock.text(),
            status: status.as_ref().map(|(text, _)| text.as_str()),
        };
        renderer.draw(&mut rl, &thread, &view);
    }

    if state != loaded {
        state
            .save(&args.state)
            .with_context(|| format!("Could not save state to {}", args.state.display()))?;
    }
    Ok(())
}
