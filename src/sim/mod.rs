//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame, no wall-clock time
//! - Seeded RNG only, owned by [`GameState`]
//! - Entities updated in a fixed order
//!
//! Drawing goes through [`crate::renderer::Render`], which only reads state.

pub mod ai;
pub mod animation;
pub mod ball;
pub mod bounds;
pub mod paddle;
pub mod particle;
pub mod state;
pub mod tick;

pub use ai::{AiPolicy, Intercept, fold_into_field, predict_intercept};
pub use animation::{Action, AnimationSet, Animator, PlayMode};
pub use ball::Ball;
pub use bounds::Bounds;
pub use paddle::{Control, KeyBindings, Paddle, Side};
pub use particle::ScoreParticle;
pub use state::{Court, GameState, MenuMode};
pub use tick::{Flow, TickInput, tick};
