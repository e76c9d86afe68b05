//! Pixel Pong - a two-paddle pixel-art Pong
//!
//! Core modules:
//! - `sim`: Tick-based simulation (animation, ball, paddles, AI, match flow)
//! - `assets`: Action descriptions and sprite loading
//! - `ui`: Animated menu buttons
//! - `renderer`: Virtual frame buffer composition and scaling
//! - `platform`: Input keys, frame pacing and presentation seam
//! - `settings`: Startup configuration

pub mod assets;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{ControlSettings, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::{IVec2, Vec2};

    /// Simulation rate; one tick per rendered frame
    pub const TICK_RATE: u32 = 60;

    /// Virtual frame the game draws into before scaling
    pub const VIRTUAL_WIDTH: u32 = 200;
    pub const VIRTUAL_HEIGHT: u32 = 150;

    /// Default window size (4x the virtual frame)
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;

    /// Playable field edges in virtual-frame coordinates
    pub const FIELD_TOP: i32 = 1;
    pub const FIELD_BOTTOM: i32 = 149;
    pub const FIELD_LEFT: i32 = 1;
    pub const FIELD_RIGHT: i32 = 199;
    /// Vertical midpoint an idle AI drifts toward
    pub const FIELD_MID_Y: i32 = 75;
    /// Range the AI folds predicted intercepts into
    pub const FOLD_HEIGHT: f32 = 150.0;

    /// Ball defaults
    pub const BALL_SIZE: IVec2 = IVec2::new(5, 5);
    pub const BALL_START: Vec2 = Vec2::new(98.0, 72.0);
    pub const BALL_SERVE_SPEED: f32 = 1.5;

    /// Paddle defaults
    pub const PADDLE_SIZE: IVec2 = IVec2::new(5, 25);
    pub const PADDLE_START_Y: f32 = 63.0;
    pub const LEFT_PADDLE_X: f32 = 5.0;
    pub const RIGHT_PADDLE_X: f32 = 190.0;
    /// Units per tick for both human and AI movement
    pub const PADDLE_SPEED: f32 = 1.0;
    /// Divisor turning the center offset at impact into vertical spin
    pub const SPIN_DIVISOR: f32 = 12.0;
    /// Hits per half unit of extra horizontal speed
    pub const HITS_PER_SPEED_STEP: u32 = 15;

    /// AI tuning
    pub const AI_TARGET_DEFAULT: f32 = 74.0;
    pub const AI_CHASE_DISTANCE: i32 = 70;
    pub const AIM_ERROR_MIN: i32 = -8;
    pub const AIM_ERROR_MAX: i32 = 9; // exclusive

    /// Score particle defaults
    pub const PARTICLE_SIZE: IVec2 = IVec2::new(22, 22);
    pub const PARTICLE_OFFSET: i32 = 11;
    pub const PARTICLE_LIFETIME: u32 = 2;

    /// Menu button size
    pub const BUTTON_SIZE: IVec2 = IVec2::new(64, 32);
}

/// Map a window-space point into virtual-frame coordinates
#[inline]
pub fn window_to_virtual(point: Vec2, window: (u32, u32)) -> Vec2 {
    let sx = consts::VIRTUAL_WIDTH as f32 / window.0.max(1) as f32;
    let sy = consts::VIRTUAL_HEIGHT as f32 / window.1.max(1) as f32;
    Vec2::new(point.x * sx, point.y * sy)
}

/// Map a virtual-frame point into window coordinates
#[inline]
pub fn virtual_to_window(point: Vec2, window: (u32, u32)) -> Vec2 {
    let sx = window.0 as f32 / consts::VIRTUAL_WIDTH as f32;
    let sy = window.1 as f32 / consts::VIRTUAL_HEIGHT as f32;
    Vec2::new(point.x * sx, point.y * sy)
}
