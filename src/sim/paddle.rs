//! Paddles: human or AI controlled, and the ball/paddle collision response

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ai::{self, AiPolicy, Intercept};
use super::animation::Animator;
use super::ball::Ball;
use super::bounds::Bounds;
use crate::consts::*;
use crate::platform::{Key, KeySet};
use crate::renderer::{FrameBuffer, Render};

/// Which goal a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Whether a ball with horizontal velocity `vx` is heading this way
    pub fn is_approaching(self, vx: f32) -> bool {
        match self {
            Side::Left => vx < 0.0,
            Side::Right => vx > 0.0,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    fn start_position(self) -> Vec2 {
        match self {
            Side::Left => Vec2::new(LEFT_PADDLE_X, PADDLE_START_Y),
            Side::Right => Vec2::new(RIGHT_PADDLE_X, PADDLE_START_Y),
        }
    }
}

/// Up/down keys for a human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
}

impl KeyBindings {
    pub const ARROWS: KeyBindings = KeyBindings {
        up: Key::Up,
        down: Key::Down,
    };
    pub const WS: KeyBindings = KeyBindings {
        up: Key::W,
        down: Key::S,
    };
}

/// Who moves a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Human(KeyBindings),
    Ai(AiPolicy),
}

#[derive(Debug, Clone)]
pub struct Paddle {
    side: Side,
    pos: Vec2,
    size: IVec2,
    bounds: Bounds,
    control: Control,
    score: u32,
    /// Offset added to the AI's aim; re-rolled after every hit
    aim_error: i32,
    /// Predicted intercept height used by [`AiPolicy::Predict`]
    target: f32,
    anim: Animator,
}

impl Paddle {
    pub fn new<R: Rng + ?Sized>(side: Side, control: Control, anim: Animator, rng: &mut R) -> Self {
        let pos = side.start_position();
        Self {
            side,
            pos,
            size: PADDLE_SIZE,
            bounds: Bounds::at(pos, PADDLE_SIZE),
            control,
            score: 0,
            aim_error: roll_aim_error(rng),
            target: AI_TARGET_DEFAULT,
            anim,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn control(&self) -> Control {
        self.control
    }

    pub fn set_control(&mut self, control: Control) {
        self.control = control;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_point(&mut self) {
        self.score += 1;
    }

    pub fn aim_error(&self) -> i32 {
        self.aim_error
    }

    pub fn target_point(&self) -> f32 {
        self.target
    }

    pub fn animator(&self) -> &Animator {
        &self.anim
    }

    /// Forget the predicted intercept
    pub fn reset_target(&mut self) {
        self.target = AI_TARGET_DEFAULT;
    }

    /// New-match state: no points, centered, default target
    pub fn reset(&mut self) {
        self.score = 0;
        self.reset_target();
        self.set_position(self.side.start_position());
    }

    pub fn set_position(&mut self, pos: Vec2) {
        let max_y = (FIELD_BOTTOM - self.size.y) as f32;
        self.pos = Vec2::new(pos.x, pos.y.clamp(FIELD_TOP as f32, max_y));
        self.bounds = Bounds::at(self.pos, self.size);
    }

    /// Recompute the intercept target from the ball's current flight.
    /// A receding or non-finite prediction keeps the previous target.
    pub fn update_target_point(&mut self, ball: &Ball) -> Intercept {
        let intercept = ai::predict_intercept(self.bounds, ball);
        match intercept {
            Intercept::Target(y) => self.target = y,
            Intercept::Receding => {
                log::debug!("{} paddle: ball receding, target kept", self.side.as_str());
            }
            Intercept::Diverged => {
                log::warn!(
                    "{} paddle: intercept prediction not finite, keeping target {}",
                    self.side.as_str(),
                    self.target
                );
            }
        }
        intercept
    }

    /// Advance one tick: animate, move, then resolve contact with the ball.
    /// Returns true when the ball was returned this tick.
    pub fn update<R: Rng + ?Sized>(&mut self, ball: &mut Ball, keys: KeySet, rng: &mut R) -> bool {
        self.anim.advance_frame();

        let dy = match self.control {
            Control::Human(bind) => {
                let down = keys.contains(bind.down) as i32 as f32;
                let up = keys.contains(bind.up) as i32 as f32;
                (down - up) * PADDLE_SPEED
            }
            Control::Ai(policy) => ai::decide_step(
                policy,
                self.side,
                self.bounds,
                ball,
                self.target,
                self.aim_error,
            ),
        };
        if dy != 0.0 {
            self.set_position(self.pos + Vec2::new(0.0, dy));
        }

        self.deflect(ball, rng)
    }

    fn deflect<R: Rng + ?Sized>(&mut self, ball: &mut Ball, rng: &mut R) -> bool {
        // Only a ball still heading at us can be returned; a ball already
        // sent back may overlap for a few more ticks.
        if !self.bounds.overlaps(&ball.bounds()) || !self.side.is_approaching(ball.velocity().x) {
            return false;
        }

        let mut vel = ball.velocity();
        vel.x = -vel.x;
        vel.y += (ball.bounds().center().y - self.bounds.center().y) / SPIN_DIVISOR;
        let bonus = (ball.hit_count() / HITS_PER_SPEED_STEP) as f32 / 2.0;
        vel.x += bonus * vel.x.signum();
        ball.set_velocity(vel);

        self.aim_error = roll_aim_error(rng);
        self.anim.set_action("hit", true);
        ball.record_paddle_hit();
        true
    }
}

impl Render for Paddle {
    fn render(&self, target: &mut FrameBuffer) {
        target.blit(self.anim.current_frame(), self.pos.x as i32, self.pos.y as i32);
    }
}

fn roll_aim_error<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(AIM_ERROR_MIN..AIM_ERROR_MAX)
}
