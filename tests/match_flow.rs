//! Plays matches on the shipped asset tree

use std::path::Path;

use glam::Vec2;
use pixel_pong::assets::AssetBank;
use pixel_pong::consts::*;
use pixel_pong::platform::{HeadlessPresenter, Key, KeySet, Presenter};
use pixel_pong::renderer::{FrameBuffer, draw_scene};
use pixel_pong::sim::{AiPolicy, Control, Flow, GameState, KeyBindings, MenuMode, TickInput, tick};
use pixel_pong::virtual_to_window;

fn assets() -> AssetBank {
    AssetBank::load(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))).unwrap()
}

fn new_game(left: Control, right: Control, seed: u64) -> GameState {
    GameState::new(assets(), left, right, seed, (WINDOW_WIDTH, WINDOW_HEIGHT)).unwrap()
}

fn click_at(state: &GameState, virtual_point: Vec2) -> TickInput {
    TickInput {
        pointer: Some(virtual_to_window(virtual_point, state.window())),
        pointer_down: true,
        ..Default::default()
    }
}

#[test]
fn test_shipped_assets_load() {
    let bank = assets();
    assert_eq!(bank.background.width(), VIRTUAL_WIDTH);
    assert_eq!(bank.background.height(), VIRTUAL_HEIGHT);
    let ball = bank.ball.action("idle").unwrap();
    assert_eq!(ball.len(), 1);
    // hit is two frames held three ticks each
    assert_eq!(bank.ball.action("hit").unwrap().len(), 6);
    assert!(bank.play_button.action("click").is_some());
}

#[test]
fn test_missing_asset_root_fails_with_path() {
    let err = AssetBank::load(Path::new("/definitely/not/here")).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here"));
}

#[test]
fn test_ai_match_runs_and_renders() {
    let mut state = new_game(
        Control::Ai(AiPolicy::Predict),
        Control::Ai(AiPolicy::TrackBall),
        2024,
    );
    let click = click_at(&state, state.menu.play.bounds().center());
    assert_eq!(tick(&mut state, &click), Flow::Continue);
    assert_eq!(state.mode, MenuMode::Play);

    // present at 2x to keep the test quick
    let mut presenter = HeadlessPresenter::new((400, 300), None);
    let mut frame = FrameBuffer::virtual_frame();
    let idle = TickInput::default();
    for _ in 0..20 * TICK_RATE {
        assert_eq!(tick(&mut state, &idle), Flow::Continue);
        draw_scene(&state, &mut frame);
        presenter.present(&frame).unwrap();

        for paddle in [&state.court.left, &state.court.right] {
            assert!(paddle.bounds().top() >= FIELD_TOP);
            assert!(paddle.bounds().bottom() <= FIELD_BOTTOM);
        }
    }

    assert_eq!(state.court.elapsed_seconds(), 20);
    assert_eq!(presenter.frames_presented(), 20 * TICK_RATE as u64);
    let last = presenter.last_frame().unwrap();
    assert_eq!((last.width(), last.height()), (400, 300));
}

#[test]
fn test_idle_human_loses_points() {
    let mut state = new_game(
        Control::Human(KeyBindings::WS),
        Control::Ai(AiPolicy::Predict),
        9,
    );
    state.start_match();
    let idle = TickInput::default();
    for _ in 0..120 * TICK_RATE {
        tick(&mut state, &idle);
    }
    assert!(state.court.right.score() > 0);
}

#[test]
fn test_full_menu_round_trip() {
    let mut state = new_game(
        Control::Ai(AiPolicy::Predict),
        Control::Ai(AiPolicy::Predict),
        5,
    );
    let release = TickInput::default();

    let click = click_at(&state, state.menu.play.bounds().center());
    tick(&mut state, &click);
    tick(&mut state, &release);
    assert_eq!(state.mode, MenuMode::Play);

    let escape: KeySet = [Key::Escape].into_iter().collect();
    tick(&mut state, &TickInput::from_keys(escape, escape));
    assert_eq!(state.mode, MenuMode::Pause);

    let click = click_at(&state, state.menu.home.bounds().center());
    tick(&mut state, &click);
    tick(&mut state, &release);
    assert_eq!(state.mode, MenuMode::Home);

    let click = click_at(&state, state.menu.exit.bounds().center());
    assert_eq!(tick(&mut state, &click), Flow::Quit);
}
