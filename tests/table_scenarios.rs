//! End-to-end scenarios going through the persisted application state.

use shengji_display::card::{Call, PlayingCard, Rank, Suit};
use shengji_display::controls::{self, Control, Outcome};
use shengji_display::display::{Direction, DisplayContent, DisplayScheduler};
use shengji_display::settings::{AutoSwitch, VerticalOrder};
use shengji_display::state::AppState;
use shengji_display::Error;

fn trump() -> PlayingCard {
    PlayingCard::new(Rank::Seven, Suit::Diamonds)
}

fn call(card: &str) -> Call {
    card.parse().unwrap()
}

#[test]
fn trump_on_top_with_calls() {
    let mut state = AppState::default();
    state.settings.vertical_order = VerticalOrder::TrumpOnTop;
    state.set_trump(Some(trump()));
    state.add_call(call("A:spades:1"));

    let scheduler = DisplayScheduler::new(state.display_settings());
    assert_eq!(
        scheduler.contents(),
        (DisplayContent::Trump(Direction::Center), DisplayContent::Calls(Direction::Center))
    );
}

#[test]
fn auto_with_trump_only_shows_trump_everywhere() {
    let mut state = AppState::default();
    state.set_trump(Some(trump()));

    let mut scheduler = DisplayScheduler::new(state.display_settings());
    let expected = (
        DisplayContent::Trump(Direction::Center),
        DisplayContent::Trump(Direction::Center),
    );
    assert_eq!(scheduler.contents(), expected);
    scheduler.on_auto_tick();
    scheduler.on_auto_tick();
    assert_eq!(scheduler.contents(), expected);
}

#[test]
fn one_tick_switches_to_calls() {
    let mut state = AppState::default();
    state.set_trump(Some(trump()));
    state.add_call(call("K:hearts:2"));

    let mut scheduler = DisplayScheduler::new(state.display_settings());
    assert!(scheduler.auto_play());
    assert_eq!(scheduler.top(), DisplayContent::Trump(Direction::Center));
    scheduler.on_auto_tick();
    assert_eq!(
        scheduler.contents(),
        (DisplayContent::Calls(Direction::Center), DisplayContent::Calls(Direction::Center))
    );
}

#[test]
fn finding_every_call_with_auto_hide_falls_back_to_trump() {
    let mut state = AppState::default();
    state.settings.auto_hide_calls = true;
    state.set_trump(Some(trump()));
    state.add_call(call("A:spades:1"));
    state.add_call(call("K:hearts:2"));

    let mut scheduler = DisplayScheduler::new(state.display_settings());
    scheduler.on_auto_tick();
    assert_eq!(scheduler.top(), DisplayContent::Calls(Direction::Center));

    let find = |index| Control::CallFound { index, backwards: false };
    assert_eq!(controls::apply(find(0), &mut state, &mut scheduler), Outcome::StateChanged);
    assert_eq!(controls::apply(find(1), &mut state, &mut scheduler), Outcome::StateChanged);
    assert_eq!(scheduler.top(), DisplayContent::Calls(Direction::Center));

    // Last copy found: no tick needed
    controls::apply(find(1), &mut state, &mut scheduler);
    assert!(!state.show_calls());
    assert_eq!(
        scheduler.contents(),
        (DisplayContent::Trump(Direction::Center), DisplayContent::Trump(Direction::Center))
    );
}

#[test]
fn state_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = AppState::default();
    state.settings.auto_switch = AutoSwitch::Off;
    state.settings.perpendicular_mode = true;
    state.set_trump(Some(trump()));
    state.add_call(call("10:clubs:3"));
    state.save(&path).unwrap();

    assert_eq!(AppState::load(&path).unwrap(), state);
}

#[test]
fn missing_state_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::load(&dir.path().join("nothing-here.json")).unwrap();
    assert_eq!(state, AppState::default());
}

#[test]
fn malformed_state_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(AppState::load(&path), Err(Error::Json { .. })));
}

#[test]
fn stored_zero_and_legacy_intervals_disable_switching() {
    let dir = tempfile::tempdir().unwrap();
    for seconds in [0, 1_577_847_600] {
        let path = dir.path().join(format!("state-{seconds}.json"));
        let json =
            format!(r#"{{"settings":{{"auto_switch":{{"every":{{"seconds":{seconds}}}}}}}}}"#);
        std::fs::write(&path, json).unwrap();

        let state = AppState::load(&path).unwrap();
        assert_eq!(state.settings.auto_switch, AutoSwitch::Off);
        let scheduler = DisplayScheduler::new(state.display_settings());
        assert_eq!(scheduler.tick_interval(), None);
    }
}

#[test]
fn stored_oversized_call_cycles_without_overflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = AppState::default();
    state.calls.push(Call { card: trump(), number: u32::MAX, found: 0 });
    state.save(&path).unwrap();

    let mut state = AppState::load(&path).unwrap();
    let mut scheduler = DisplayScheduler::new(state.display_settings());
    let tap = Control::CallFound { index: 0, backwards: false };
    assert_eq!(controls::apply(tap, &mut state, &mut scheduler), Outcome::StateChanged);
    assert_eq!(state.calls[0].found, 1);
}
