//! Serializable lerp descriptions.
//!
//! [`LerpSettings`] holds the start value, end value and duration of a lerp in a
//! form that can be loaded from JSON, so hosts can keep transitions in data files.
//!
//! ```json
//! { "start": [0.0, 0.0, 0.0], "end": [10.0, 0.0, 5.0], "duration": 5.0, "autostart": true }
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::lerp::{Interpolatable, TimedLerp};
use crate::utils::time::TimeSource;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LerpSettings<T> {
    pub start: T,
    pub end: T,
    /// Seconds.
    pub duration: f32,
    /// Call [`TimedLerp::start`] right after building.
    #[serde(default)]
    pub autostart: bool,
}

impl<T> LerpSettings<T> {
    #[must_use]
    pub fn new(start: T, end: T, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            autostart: false,
        }
    }

    #[must_use]
    pub fn autostart(mut self, autostart: bool) -> Self {
        self.autostart = autostart;
        self
    }
}

impl<T: DeserializeOwned> LerpSettings<T> {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading lerp settings from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl<T: Interpolatable> LerpSettings<T> {
    /// Builds a lerp driven by `clock`, rejecting non-finite durations.
    pub fn build<C: TimeSource>(&self, clock: C) -> Result<TimedLerp<T, C>> {
        let mut lerp = TimedLerp::try_with_clock(self.start, self.end, self.duration, clock)?;
        if self.autostart {
            lerp.start();
        }
        Ok(lerp)
    }
}
