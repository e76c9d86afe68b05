//! Fixed timestep simulation tick
//!
//! One call per frame: applies the tick's input to the menu state machine
//! and, while a match is running, advances every entity in a fixed order.

use glam::Vec2;

use super::paddle::Side;
use super::state::{GameState, MenuMode};
use crate::consts::*;
use crate::platform::{Key, KeySet};
use crate::ui::ButtonAction;
use crate::window_to_virtual;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys held down this tick
    pub held: KeySet,
    /// Pause toggle (escape pressed)
    pub pause: bool,
    /// Re-serve the ball (R pressed); only honoured mid-match
    pub reset_ball: bool,
    /// Window close requested
    pub quit: bool,
    /// Pointer position in window coordinates
    pub pointer: Option<Vec2>,
    /// Primary pointer button is down
    pub pointer_down: bool,
}

impl TickInput {
    /// Keyboard state for one tick. `held` moves paddles; keys in `pressed`
    /// went down this tick and fire their command once.
    pub fn from_keys(held: KeySet, pressed: KeySet) -> Self {
        Self {
            held,
            pause: pressed.contains(Key::Escape),
            reset_ball: pressed.contains(Key::R),
            ..Default::default()
        }
    }
}

/// Whether the loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Flow {
    if input.quit {
        log::info!("Quit requested");
        return Flow::Quit;
    }

    let pressed = input.pointer_down && !state.pointer_was_down;
    state.pointer_was_down = input.pointer_down;
    let pointer = input.pointer.map(|p| window_to_virtual(p, state.window));

    if input.pause {
        match state.mode {
            MenuMode::Play => state.set_mode(MenuMode::Pause),
            MenuMode::Pause => state.set_mode(MenuMode::Play),
            MenuMode::Home => {}
        }
    }

    match state.mode {
        MenuMode::Play => {
            if input.reset_ball {
                state.reset_ball();
            }
            step_match(state, input.held);
            Flow::Continue
        }
        MenuMode::Pause => {
            let menu = &mut state.menu;
            let resume = menu.resume.update(pointer, pressed);
            let home = menu.home.update(pointer, pressed);
            apply_button(state, resume.or(home))
        }
        MenuMode::Home => {
            let menu = &mut state.menu;
            let play = menu.play.update(pointer, pressed);
            let exit = menu.exit.update(pointer, pressed);
            apply_button(state, play.or(exit))
        }
    }
}

fn apply_button(state: &mut GameState, action: Option<ButtonAction>) -> Flow {
    match action {
        None => {}
        Some(ButtonAction::Play) => state.start_match(),
        Some(ButtonAction::Resume) => state.set_mode(MenuMode::Play),
        Some(ButtonAction::Home) => state.set_mode(MenuMode::Home),
        Some(ButtonAction::Exit) => {
            log::info!("Exit selected");
            return Flow::Quit;
        }
    }
    Flow::Continue
}

/// Ball, paddles, effects, scoring, then the clock
fn step_match(state: &mut GameState, held: KeySet) {
    let court = &mut state.court;
    let rng = &mut state.rng;

    court.ball.update();
    let left_hit = court.left.update(&mut court.ball, held, rng);
    let right_hit = court.right.update(&mut court.ball, held, rng);

    for particle in &mut court.particles {
        particle.update();
    }

    let bb = court.ball.bounds();
    let scorer = if bb.left() < FIELD_LEFT {
        Some(Side::Right)
    } else if bb.right() > FIELD_RIGHT {
        Some(Side::Left)
    } else {
        None
    };

    match scorer {
        Some(side) => state.award_point(side),
        None => {
            // A return changes the flight; the receiving side re-predicts
            for (side, returned) in [(Side::Left, left_hit), (Side::Right, right_hit)] {
                if returned {
                    court.retarget_receiver(side);
                }
            }
        }
    }

    let court = &mut state.court;
    court.particles.retain(|p| p.is_alive());
    court.elapsed_ticks += 1;
}
