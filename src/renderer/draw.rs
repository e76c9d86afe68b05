//! Scene composition per menu mode

use super::frame::{FrameBuffer, colors};
use super::text::{draw_text, text_height, text_width};
use super::Render;
use crate::consts::VIRTUAL_HEIGHT;
use crate::sim::{Court, GameState, MenuMode};

/// Gap between the two score counters and the center line
const SCORE_GAP: i32 = 2;

/// Compose the whole virtual frame for the current mode
pub fn draw_scene(state: &GameState, frame: &mut FrameBuffer) {
    frame.fill(colors::BACKGROUND);
    frame.blit(&state.assets().background, 0, 0);

    let court = &state.court;
    match state.mode {
        MenuMode::Play => {
            court.left.render(frame);
            court.right.render(frame);
            court.ball.render(frame);
            for particle in &court.particles {
                particle.render(frame);
            }
            draw_scores(court, frame);
            draw_clock(court, frame);
        }
        MenuMode::Pause => {
            court.left.render(frame);
            court.ball.render(frame);
            court.right.render(frame);
            draw_clock(court, frame);
            draw_scores(court, frame);
            state.menu.resume.render(frame);
            state.menu.home.render(frame);
        }
        MenuMode::Home => {
            state.menu.play.render(frame);
            state.menu.exit.render(frame);
        }
    }
}

/// Left score right-aligned against the center, right score left-aligned
fn draw_scores(court: &Court, frame: &mut FrameBuffer) {
    let mid = frame.width() as i32 / 2;

    let left = court.left.score().to_string();
    let x = mid - SCORE_GAP - text_width(&left);
    draw_text(frame, &left, x, 0, colors::LEFT_SCORE);

    let right = court.right.score().to_string();
    draw_text(frame, &right, mid + SCORE_GAP, 0, colors::RIGHT_SCORE);
}

/// Whole seconds played, centered on the bottom edge
fn draw_clock(court: &Court, frame: &mut FrameBuffer) {
    let label = format!("{}s", court.elapsed_seconds());
    let x = (frame.width() as i32 - text_width(&label)) / 2;
    let y = VIRTUAL_HEIGHT as i32 - text_height();
    draw_text(frame, &label, x, y, colors::TIME_TEXT);
}
