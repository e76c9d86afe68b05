//! Frame-sequence animation playback
//!
//! An [`AnimationSet`] is loaded once per entity kind and shared by every
//! instance through an `Arc`. Each instance owns an [`Animator`] holding the
//! current action and frame index.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};

use crate::renderer::Sprite;

/// Playback mode of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Restart from the first frame when the sequence ends
    Loop,
    /// Play through once, then fall back to the default action
    Once,
}

impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::Loop => "loop",
            PlayMode::Once => "once",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "loop" => Some(PlayMode::Loop),
            "once" => Some(PlayMode::Once),
            _ => None,
        }
    }
}

/// A named, expanded per-tick frame sequence
#[derive(Debug, Clone)]
pub struct Action {
    name: String,
    mode: PlayMode,
    /// One entry per tick; held frames repeat the same `Arc`
    frames: Vec<Arc<Sprite>>,
}

impl Action {
    pub fn new(name: impl Into<String>, mode: PlayMode, frames: Vec<Arc<Sprite>>) -> Self {
        Self {
            name: name.into(),
            mode,
            frames,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Number of ticks one play-through lasts
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// All actions of one entity kind
#[derive(Debug)]
pub struct AnimationSet {
    kind: String,
    actions: Vec<Action>,
    index: HashMap<String, usize>,
}

impl AnimationSet {
    pub fn new(kind: impl Into<String>, actions: Vec<Action>) -> anyhow::Result<Self> {
        let kind = kind.into();
        let mut index = HashMap::with_capacity(actions.len());
        for (i, action) in actions.iter().enumerate() {
            ensure!(
                !action.is_empty(),
                "{kind}: action `{}` has no frames",
                action.name
            );
            if index.insert(action.name.clone(), i).is_some() {
                bail!("{kind}: action `{}` declared twice", action.name);
            }
        }
        Ok(Self {
            kind,
            actions,
            index,
        })
    }

    /// Fail unless every name in `names` is declared
    pub fn require(&self, names: &[&str]) -> anyhow::Result<()> {
        for name in names {
            ensure!(
                self.index.contains_key(*name),
                "{}: missing required action `{name}`",
                self.kind
            );
        }
        Ok(())
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.index.get(name).map(|&i| &self.actions[i])
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

/// Per-instance playback state
#[derive(Debug, Clone)]
pub struct Animator {
    set: Arc<AnimationSet>,
    current: usize,
    default: usize,
    frame: usize,
}

impl Animator {
    /// Start playing `default` from its first frame
    pub fn new(set: Arc<AnimationSet>, default: &str) -> anyhow::Result<Self> {
        let Some(default) = set.id(default) else {
            bail!("{}: default action `{default}` is not declared", set.kind);
        };
        Ok(Self {
            set,
            current: default,
            default,
            frame: 0,
        })
    }

    /// Request a different action.
    ///
    /// A looping action is interrupted by any other name; re-requesting the
    /// same looping action restarts it only when `force` is set. A one-shot
    /// action keeps playing unless `force` is set.
    pub fn set_action(&mut self, name: &str, force: bool) {
        let Some(next) = self.set.id(name) else {
            log::warn!("{}: ignoring unknown action `{name}`", self.set.kind);
            return;
        };
        match self.current_action().mode {
            PlayMode::Loop => {
                if self.current != next {
                    self.current = next;
                    self.frame = 0;
                } else if force {
                    self.frame = 0;
                }
            }
            PlayMode::Once => {
                if force {
                    self.current = next;
                    self.frame = 0;
                }
            }
        }
    }

    /// Step one tick. Returns true when the current action wrapped around,
    /// i.e. one play-through completed.
    pub fn advance_frame(&mut self) -> bool {
        self.frame += 1;
        if self.frame < self.current_action().len() {
            return false;
        }
        if self.current_action().mode == PlayMode::Once {
            self.current = self.default;
        }
        self.frame = 0;
        true
    }

    pub fn current_name(&self) -> &str {
        self.current_action().name()
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    /// Image to draw this tick
    pub fn current_frame(&self) -> &Sprite {
        &self.current_action().frames[self.frame]
    }

    fn current_action(&self) -> &Action {
        &self.set.actions[self.current]
    }
}
