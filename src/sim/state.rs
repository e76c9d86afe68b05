//! Game state and the entities it owns
//!
//! [`GameState`] is the single context every tick works on: menu mode, the
//! court with its entities, menu buttons and the RNG.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animation::Animator;
use super::ball::Ball;
use super::paddle::{Control, Paddle, Side};
use super::particle::ScoreParticle;
use crate::assets::AssetBank;
use crate::consts::*;
use crate::ui::Menu;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuMode {
    /// Title screen with Play/Exit
    #[default]
    Home,
    /// Match running
    Play,
    /// Match frozen with Resume/Home
    Pause,
}

impl MenuMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuMode::Home => "home",
            MenuMode::Play => "play",
            MenuMode::Pause => "pause",
        }
    }
}

/// Everything on the pitch
#[derive(Debug, Clone)]
pub struct Court {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    /// Active score effects, unordered
    pub particles: Vec<ScoreParticle>,
    /// Ticks played this match; survives pauses and ball resets
    pub elapsed_ticks: u64,
}

impl Court {
    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// `side` just returned the ball; the other paddle re-predicts
    pub fn retarget_receiver(&mut self, side: Side) {
        let receiver = match side.opposite() {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        receiver.update_target_point(&self.ball);
    }

    /// Whole seconds of play this match
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_ticks / TICK_RATE as u64
    }
}

pub struct GameState {
    pub mode: MenuMode,
    pub court: Court,
    pub menu: Menu,
    pub(crate) rng: Pcg32,
    /// Pointer state last tick, for press-edge detection
    pub(crate) pointer_was_down: bool,
    /// Window size used to map pointer coordinates
    pub(crate) window: (u32, u32),
    assets: AssetBank,
    /// Fresh animator cloned into every new score particle
    particle_anim: Animator,
}

impl GameState {
    /// Build the title-screen state. Fails only if `assets` lacks an action
    /// an entity needs as its default.
    pub fn new(
        assets: AssetBank,
        left: Control,
        right: Control,
        seed: u64,
        window: (u32, u32),
    ) -> anyhow::Result<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);

        let left = Paddle::new(
            Side::Left,
            left,
            Animator::new(assets.left_paddle.clone(), "idle")?,
            &mut rng,
        );
        let right = Paddle::new(
            Side::Right,
            right,
            Animator::new(assets.right_paddle.clone(), "idle")?,
            &mut rng,
        );
        let ball = Ball::new(Animator::new(assets.ball.clone(), "idle")?, &mut rng);

        Ok(Self {
            mode: MenuMode::Home,
            court: Court {
                ball,
                left,
                right,
                particles: Vec::new(),
                elapsed_ticks: 0,
            },
            menu: Menu::new(&assets)?,
            rng,
            pointer_was_down: false,
            window,
            particle_anim: Animator::new(assets.score.clone(), "idle")?,
            assets,
        })
    }

    pub fn assets(&self) -> &AssetBank {
        &self.assets
    }

    pub fn window(&self) -> (u32, u32) {
        self.window
    }

    pub fn set_mode(&mut self, mode: MenuMode) {
        if self.mode != mode {
            log::info!("Menu: {} -> {}", self.mode.as_str(), mode.as_str());
            self.mode = mode;
        }
    }

    /// Fresh match: scores, paddles, targets, ball, clock and effects reset
    pub fn start_match(&mut self) {
        let court = &mut self.court;
        court.left.reset();
        court.right.reset();
        court.ball.reset_to_center(&mut self.rng);
        court.particles.clear();
        court.elapsed_ticks = 0;
        self.set_mode(MenuMode::Play);
    }

    /// Re-serve from the center without touching the score
    pub fn reset_ball(&mut self) {
        self.court.ball.reset_to_center(&mut self.rng);
        log::debug!("Ball reset by player");
    }

    /// `side` won the rally: mark it at the ball, score, and re-serve
    pub fn award_point(&mut self, side: Side) {
        let bb = self.court.ball.bounds();
        let at = IVec2::new(bb.x - PARTICLE_OFFSET, bb.y - PARTICLE_OFFSET);
        self.court
            .particles
            .push(ScoreParticle::new(at, self.particle_anim.clone()));

        let court = &mut self.court;
        court.paddle_mut(side).add_point();
        court.left.reset_target();
        court.right.reset_target();
        court.ball.reset_to_center(&mut self.rng);

        log::info!(
            "{} scores: {} - {} at {}s",
            side.as_str(),
            court.left.score(),
            court.right.score(),
            court.elapsed_seconds()
        );
    }
}

/// Two predicting AIs on the in-memory test assets
#[cfg(test)]
pub(crate) fn test_state() -> GameState {
    use super::ai::AiPolicy;

    GameState::new(
        crate::assets::test_bank(),
        Control::Ai(AiPolicy::Predict),
        Control::Ai(AiPolicy::Predict),
        42,
        (WINDOW_WIDTH, WINDOW_HEIGHT),
    )
    .unwrap()
}
