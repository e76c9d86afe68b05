//! Animated menu buttons
//!
//! Buttons never change game state themselves; activating one returns a
//! [`ButtonAction`] for the state machine to apply.

use std::sync::Arc;

use glam::{IVec2, Vec2};

use crate::assets::AssetBank;
use crate::consts::BUTTON_SIZE;
use crate::renderer::{FrameBuffer, Render};
use crate::sim::animation::{AnimationSet, Animator};
use crate::sim::bounds::Bounds;

/// What a button asks for when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Start a fresh match
    Play,
    /// Leave the game
    Exit,
    /// Continue a paused match
    Resume,
    /// Back to the title screen
    Home,
}

#[derive(Debug, Clone)]
pub struct Button {
    action: ButtonAction,
    bounds: Bounds,
    anim: Animator,
}

impl Button {
    pub fn new(action: ButtonAction, pos: IVec2, anim: Animator) -> Self {
        Self {
            action,
            bounds: Bounds::new(pos.x, pos.y, BUTTON_SIZE.x, BUTTON_SIZE.y),
            anim,
        }
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn animator(&self) -> &Animator {
        &self.anim
    }

    /// Advance one tick. `pointer` is in virtual-frame coordinates and
    /// `pressed` is true only on the tick the pointer went down.
    pub fn update(&mut self, pointer: Option<Vec2>, pressed: bool) -> Option<ButtonAction> {
        self.anim.advance_frame();

        let hover = pointer.is_some_and(|p| self.bounds.contains_inclusive(p));
        if !hover {
            self.anim.set_action("normal", false);
            return None;
        }

        self.anim.set_action("hover", false);
        if pressed {
            self.anim.set_action("click", true);
            return Some(self.action);
        }
        None
    }
}

impl Render for Button {
    fn render(&self, target: &mut FrameBuffer) {
        target.blit(self.anim.current_frame(), self.bounds.x, self.bounds.y);
    }
}

/// The four buttons of the home and pause screens
#[derive(Debug, Clone)]
pub struct Menu {
    pub play: Button,
    pub exit: Button,
    pub resume: Button,
    pub home: Button,
}

impl Menu {
    pub fn new(bank: &AssetBank) -> anyhow::Result<Self> {
        let button = |action: ButtonAction, x: i32, y: i32, set: &Arc<AnimationSet>| {
            anyhow::Ok(Button::new(action, IVec2::new(x, y), Animator::new(set.clone(), "normal")?))
        };
        Ok(Self {
            play: button(ButtonAction::Play, 68, 66, &bank.play_button)?,
            exit: button(ButtonAction::Exit, 68, 114, &bank.exit_button)?,
            resume: button(ButtonAction::Resume, 68, 35, &bank.resume_button)?,
            home: button(ButtonAction::Home, 68, 83, &bank.home_button)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_bank;

    fn play_button() -> Button {
        Menu::new(&test_bank()).unwrap().play
    }

    #[test]
    fn test_hover_and_leave() {
        let mut b = play_button();
        assert_eq!(b.update(Some(Vec2::new(100.0, 80.0)), false), None);
        assert_eq!(b.animator().current_name(), "hover");
        assert_eq!(b.update(Some(Vec2::new(10.0, 10.0)), false), None);
        assert_eq!(b.animator().current_name(), "normal");
        assert_eq!(b.update(None, true), None);
    }

    #[test]
    fn test_click_inside_activates() {
        let mut b = play_button();
        assert_eq!(b.update(Some(Vec2::new(68.0, 98.0)), true), Some(ButtonAction::Play));
        assert_eq!(b.animator().current_name(), "click");

        // moving away does not cut the click animation short
        b.update(Some(Vec2::new(0.0, 0.0)), false);
        assert_eq!(b.animator().current_name(), "click");
    }

    #[test]
    fn test_click_outside_ignored() {
        let mut b = play_button();
        assert_eq!(b.update(Some(Vec2::new(133.0, 80.0)), true), None);
    }

    #[test]
    fn test_menu_layout() {
        let menu = Menu::new(&test_bank()).unwrap();
        assert_eq!(menu.play.bounds(), Bounds::new(68, 66, 64, 32));
        assert_eq!(menu.exit.bounds().top(), 114);
        assert_eq!(menu.resume.action(), ButtonAction::Resume);
        assert_eq!(menu.home.bounds().top(), 83);
    }
}
