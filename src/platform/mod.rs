//! Platform abstraction layer
//!
//! Handles the pieces that differ between backends:
//! - Key identifiers and held-key sets
//! - Fixed-rate frame pacing
//! - Presenting a finished frame

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::renderer::FrameBuffer;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Escape,
    R,
}

impl Key {
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Set of keys held down this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySet(u16);

impl KeySet {
    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn remove(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = KeySet::default();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// Paces the loop to a fixed tick rate
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(rate: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / rate.max(1) as f64);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleep until the next frame is due. A late frame resets the schedule
    /// instead of trying to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }
}

/// Backend that shows composed virtual frames
pub trait Presenter {
    /// Show one frame; called once per tick
    fn present(&mut self, frame: &FrameBuffer) -> anyhow::Result<()>;
}

/// Presenter without a window: scales frames to the window size and keeps
/// the last one, optionally writing it to disk on [`Self::finish`].
#[derive(Debug)]
pub struct HeadlessPresenter {
    window: (u32, u32),
    frames: u64,
    last: Option<FrameBuffer>,
    snapshot: Option<PathBuf>,
}

impl HeadlessPresenter {
    pub fn new(window: (u32, u32), snapshot: Option<PathBuf>) -> Self {
        Self {
            window,
            frames: 0,
            last: None,
            snapshot,
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    /// Write the snapshot, if one was requested
    pub fn finish(&self) -> anyhow::Result<()> {
        if let (Some(path), Some(frame)) = (&self.snapshot, &self.last) {
            frame.save_png(path)?;
            log::info!("Wrote final frame to {}", path.display());
        }
        Ok(())
    }
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, frame: &FrameBuffer) -> anyhow::Result<()> {
        self.last = Some(frame.scaled(self.window.0, self.window.1));
        self.frames += 1;
        Ok(())
    }
}
