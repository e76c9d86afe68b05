//! Score particles: a short burst drawn where a point was scored

use glam::IVec2;

use super::animation::Animator;
use crate::consts::PARTICLE_LIFETIME;
use crate::renderer::{FrameBuffer, Render};

#[derive(Debug, Clone)]
pub struct ScoreParticle {
    pos: IVec2,
    anim: Animator,
    /// Play-throughs left before the particle is dropped
    lifetime: u32,
}

impl ScoreParticle {
    pub fn new(pos: IVec2, anim: Animator) -> Self {
        Self {
            pos,
            anim,
            lifetime: PARTICLE_LIFETIME,
        }
    }

    pub fn position(&self) -> IVec2 {
        self.pos
    }

    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }

    /// Advance the effect; each completed play-through costs one lifetime
    pub fn update(&mut self) {
        if self.anim.advance_frame() {
            self.lifetime = self.lifetime.saturating_sub(1);
        }
    }
}

impl Render for ScoreParticle {
    fn render(&self, target: &mut FrameBuffer) {
        target.blit(self.anim.current_frame(), self.pos.x, self.pos.y);
    }
}
