//! Startup settings
//!
//! Read once from the JSON file named by `PIXEL_PONG_SETTINGS`; defaults
//! otherwise. Never written back.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::consts::{TICK_RATE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::platform::Key;
use crate::sim::{AiPolicy, Control, KeyBindings};

/// Who drives one paddle, as written in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlSettings {
    Human { up: Key, down: Key },
    Ai { policy: AiPolicy },
}

impl ControlSettings {
    pub fn to_control(&self) -> Control {
        match *self {
            ControlSettings::Human { up, down } => Control::Human(KeyBindings { up, down }),
            ControlSettings::Ai { policy } => Control::Ai(policy),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `entities/`, `ui/` and `background/`
    pub asset_root: PathBuf,

    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    /// Ticks per second
    pub target_fps: u32,
    /// Pace the loop to `target_fps`; off runs as fast as possible
    pub realtime: bool,

    // === Players ===
    pub left: ControlSettings,
    pub right: ControlSettings,
    /// Fixed RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,

    // === Headless runner ===
    /// Ticks to run before stopping
    pub demo_ticks: u64,
    /// Where to write the last frame as PNG
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),

            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            target_fps: TICK_RATE,
            realtime: true,

            left: ControlSettings::Ai {
                policy: AiPolicy::Predict,
            },
            right: ControlSettings::Ai {
                policy: AiPolicy::TrackBall,
            },
            seed: None,

            demo_ticks: 60 * TICK_RATE as u64,
            snapshot_path: None,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const ENV_VAR: &'static str = "PIXEL_PONG_SETTINGS";

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid settings JSON")
    }

    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing settings {}", path.display()))
    }

    /// Settings from `PIXEL_PONG_SETTINGS` if set, defaults otherwise
    pub fn load_from_env() -> anyhow::Result<Self> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                let settings = Self::load_file(&path)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn window(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
