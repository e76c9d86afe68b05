//! Pixel Pong entry point
//!
//! Runs the game loop headlessly: the title screen's Play button is pressed
//! by a scripted pointer, then the configured controls play the match.

use std::process::ExitCode;

use pixel_pong::{Settings, virtual_to_window};
use pixel_pong::assets::AssetBank;
use pixel_pong::platform::{FrameClock, HeadlessPresenter, Presenter};
use pixel_pong::renderer::{FrameBuffer, draw_scene};
use pixel_pong::sim::{Flow, GameState, TickInput, tick};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pixel Pong starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let settings = Settings::load_from_env()?;
    let assets = AssetBank::load(&settings.asset_root)?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Seed: {seed}");

    let window = settings.window();
    let mut state = GameState::new(
        assets,
        settings.left.to_control(),
        settings.right.to_control(),
        seed,
        window,
    )?;
    let mut presenter = HeadlessPresenter::new(window, settings.snapshot_path.clone());
    let mut clock = settings
        .realtime
        .then(|| FrameClock::new(settings.target_fps));
    let mut frame = FrameBuffer::virtual_frame();

    for n in 0..settings.demo_ticks {
        let input = scripted_input(n, &state);
        if tick(&mut state, &input) == Flow::Quit {
            break;
        }
        draw_scene(&state, &mut frame);
        presenter.present(&frame)?;
        if let Some(clock) = clock.as_mut() {
            clock.wait();
        }
    }

    let court = &state.court;
    log::info!(
        "Final score {} - {} after {}s ({} frames)",
        court.left.score(),
        court.right.score(),
        court.elapsed_seconds(),
        presenter.frames_presented()
    );
    presenter.finish()
}

/// Clicks the Play button on the first tick, then stays idle
fn scripted_input(n: u64, state: &GameState) -> TickInput {
    if n > 0 {
        return TickInput::default();
    }

    let play = state.menu.play.bounds().center();
    TickInput {
        pointer: Some(virtual_to_window(play, state.window())),
        pointer_down: true,
        ..Default::default()
    }
}
