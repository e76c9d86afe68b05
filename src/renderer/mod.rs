//! Software rendering into the virtual frame
//!
//! Entities draw themselves through [`Render`]; [`draw_scene`] composes a
//! whole frame for the current menu mode.

pub mod draw;
pub mod frame;
pub mod text;

pub use draw::draw_scene;
pub use frame::{FrameBuffer, Rgba, Sprite, colors};

/// Something that can draw itself onto a frame
pub trait Render {
    fn render(&self, target: &mut FrameBuffer);
}
