//! The ball

use glam::{IVec2, Vec2};
use rand::Rng;

use super::animation::Animator;
use super::bounds::Bounds;
use crate::consts::*;
use crate::renderer::{FrameBuffer, Render};

#[derive(Debug, Clone)]
pub struct Ball {
    pos: Vec2,
    size: IVec2,
    bounds: Bounds,
    vel: Vec2,
    /// Paddle hits since the last reset; drives the speed bonus
    hit_count: u32,
    anim: Animator,
}

impl Ball {
    /// A ball at the center spot with a fresh serve
    pub fn new<R: Rng + ?Sized>(anim: Animator, rng: &mut R) -> Self {
        Self {
            pos: BALL_START,
            size: BALL_SIZE,
            bounds: Bounds::at(BALL_START, BALL_SIZE),
            vel: serve_velocity(rng),
            hit_count: 0,
            anim,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
        self.bounds = Bounds::at(self.pos, self.size);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn animator(&self) -> &Animator {
        &self.anim
    }

    /// Count a paddle hit and play the impact animation
    pub fn record_paddle_hit(&mut self) {
        self.hit_count += 1;
        self.anim.set_action("hit", true);
    }

    /// Advance one tick. Returns true when the ball bounced off a wall.
    pub fn update(&mut self) -> bool {
        self.anim.advance_frame();
        self.set_position(self.pos + self.vel);

        let into_top = self.bounds.top() < FIELD_TOP && self.vel.y < 0.0;
        let into_bottom = self.bounds.bottom() > FIELD_BOTTOM && self.vel.y > 0.0;
        if !(into_top || into_bottom) {
            return false;
        }

        self.vel.y = -self.vel.y;
        self.hit_count = 0;
        self.anim.set_action("hit", true);
        true
    }

    /// Back to the center spot with a new horizontal serve
    pub fn reset_to_center<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.set_position(BALL_START);
        self.vel = serve_velocity(rng);
        self.hit_count = 0;
    }
}

impl Render for Ball {
    fn render(&self, target: &mut FrameBuffer) {
        target.blit(self.anim.current_frame(), self.pos.x as i32, self.pos.y as i32);
    }
}

/// Horizontal serve toward a random side, no vertical component
fn serve_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(dir * BALL_SERVE_SPEED, 0.0)
}
