//! Asset loading
//!
//! Every entity kind has a directory holding an `actions.txt` description
//! and one PNG per distinct frame:
//!
//! ```text
//! <kind>/actions.txt
//! <kind>/<action>/<action>_<i>.png
//! ```
//!
//! Each description line reads `<action> <loop|once> <hold_0> <hold_1> ...`
//! where `hold_i` is the number of ticks frame `i` stays on screen. Any
//! missing file or malformed line fails the whole load.

mod description;

pub use description::{ActionDecl, parse_description};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::renderer::Sprite;
use crate::sim::animation::{Action, AnimationSet};

/// Actions every in-game entity must declare
pub const ENTITY_ACTIONS: &[&str] = &["idle", "hit"];
/// Actions a score particle must declare
pub const PARTICLE_ACTIONS: &[&str] = &["idle"];
/// Actions every menu button must declare
pub const BUTTON_ACTIONS: &[&str] = &["normal", "hover", "click"];

/// Decode a PNG (or any format `image` was built with) into a sprite
pub fn load_sprite(path: &Path) -> anyhow::Result<Sprite> {
    let image = image::open(path)
        .with_context(|| format!("failed to load image {}", path.display()))?
        .to_rgba8();
    let (w, h) = image.dimensions();
    Sprite::from_rgba_bytes(w, h, image.as_raw())
        .with_context(|| format!("image {} has an unexpected pixel layout", path.display()))
}

/// Expand parsed declarations into an animation set, fetching each distinct
/// frame once through `load_frame(action, index)`.
pub fn build_set<F>(
    kind: &str,
    decls: &[ActionDecl],
    mut load_frame: F,
) -> anyhow::Result<AnimationSet>
where
    F: FnMut(&str, usize) -> anyhow::Result<Arc<Sprite>>,
{
    let mut actions = Vec::with_capacity(decls.len());
    for decl in decls {
        let mut frames = Vec::with_capacity(decl.total_ticks());
        for (i, &hold) in decl.holds.iter().enumerate() {
            let sprite = load_frame(&decl.name, i)?;
            frames.extend(std::iter::repeat_n(sprite, hold as usize));
        }
        actions.push(Action::new(decl.name.clone(), decl.mode, frames));
    }
    AnimationSet::new(kind, actions)
}

/// Load `<dir>/actions.txt` and its frames, then check `required` names
pub fn load_animation_set(dir: &Path, required: &[&str]) -> anyhow::Result<AnimationSet> {
    let kind = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());

    let desc_path = dir.join("actions.txt");
    let text = fs::read_to_string(&desc_path)
        .with_context(|| format!("failed to read {}", desc_path.display()))?;
    let decls = parse_description(&text).with_context(|| format!("in {}", desc_path.display()))?;

    let set = build_set(&kind, &decls, |action, i| {
        let path = dir.join(action).join(format!("{action}_{i}.png"));
        load_sprite(&path).map(Arc::new)
    })?;
    set.require(required)
        .with_context(|| format!("in {}", desc_path.display()))?;

    log::debug!("Loaded {} ({} actions)", kind, decls.len());
    Ok(set)
}

/// Every animation set and image the game needs, loaded once at startup
#[derive(Debug, Clone)]
pub struct AssetBank {
    pub ball: Arc<AnimationSet>,
    pub left_paddle: Arc<AnimationSet>,
    pub right_paddle: Arc<AnimationSet>,
    pub score: Arc<AnimationSet>,
    pub play_button: Arc<AnimationSet>,
    pub exit_button: Arc<AnimationSet>,
    pub resume_button: Arc<AnimationSet>,
    pub home_button: Arc<AnimationSet>,
    pub background: Arc<Sprite>,
}

impl AssetBank {
    /// Load the full asset tree rooted at `root`
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let entity = |name: &str, required: &[&str]| -> anyhow::Result<Arc<AnimationSet>> {
            load_animation_set(&root.join("entities").join(name), required).map(Arc::new)
        };
        let button = |name: &str| -> anyhow::Result<Arc<AnimationSet>> {
            load_animation_set(&root.join("ui").join(name), BUTTON_ACTIONS).map(Arc::new)
        };
        let background_path: PathBuf = root.join("background").join("pitch.png");

        let bank = Self {
            ball: entity("ball", ENTITY_ACTIONS)?,
            left_paddle: entity("blue_bar", ENTITY_ACTIONS)?,
            right_paddle: entity("red_bar", ENTITY_ACTIONS)?,
            score: entity("score", PARTICLE_ACTIONS)?,
            play_button: button("singleplayer")?,
            exit_button: button("exit")?,
            resume_button: button("resume")?,
            home_button: button("home")?,
            background: Arc::new(load_sprite(&background_path)?),
        };
        log::info!("Assets loaded from {}", root.display());
        Ok(bank)
    }
}

/// In-memory bank of flat-colored sprites for unit tests
#[cfg(test)]
pub(crate) fn test_bank() -> AssetBank {
    use crate::consts::{BALL_SIZE, BUTTON_SIZE, PADDLE_SIZE, PARTICLE_SIZE};
    use crate::renderer::Rgba;

    fn set(kind: &str, text: &str, size: glam::IVec2, color: Rgba) -> Arc<AnimationSet> {
        let decls = parse_description(text).unwrap();
        let sprite = Arc::new(Sprite::solid(size.x as u32, size.y as u32, color));
        Arc::new(build_set(kind, &decls, |_, _| Ok(sprite.clone())).unwrap())
    }

    let entity = "idle loop 1\nhit once 2 2";
    let button = "normal loop 1\nhover loop 2\nclick once 3";
    AssetBank {
        ball: set("ball", entity, BALL_SIZE, Rgba::opaque(255, 255, 255)),
        left_paddle: set("blue_bar", entity, PADDLE_SIZE, Rgba::opaque(0, 0, 200)),
        right_paddle: set("red_bar", entity, PADDLE_SIZE, Rgba::opaque(200, 0, 0)),
        score: set("score", "idle once 2 1", PARTICLE_SIZE, Rgba::opaque(255, 220, 0)),
        play_button: set("singleplayer", button, BUTTON_SIZE, Rgba::opaque(0, 150, 0)),
        exit_button: set("exit", button, BUTTON_SIZE, Rgba::opaque(150, 0, 0)),
        resume_button: set("resume", button, BUTTON_SIZE, Rgba::opaque(0, 150, 0)),
        home_button: set("home", button, BUTTON_SIZE, Rgba::opaque(0, 0, 150)),
        background: Arc::new(Sprite::solid(200, 150, Rgba::opaque(30, 120, 30))),
    }
}
