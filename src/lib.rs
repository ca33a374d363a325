#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! # AutoLerp
//!
//! Time-driven linear interpolation between two values.
//!
//! A [`TimedLerp`] is created from a start value, an end value and a duration in
//! seconds. Once started, every call to [`TimedLerp::get_value`] samples its
//! [`TimeSource`] and returns the value for the time accumulated so far, until the
//! duration has elapsed and the end value is returned exactly.
//!
//! ```rust,ignore
//! use autolerp::{FloatLerp, ManualClock};
//!
//! let clock = ManualClock::new();
//! let mut lerp = FloatLerp::with_clock(0.0, 10.0, 5.0, clock.clone());
//! lerp.start();
//!
//! clock.advance(1.0);
//! assert_eq!(lerp.get_value(), 2.0);
//! ```

pub mod config;
pub mod errors;
pub mod lerp;
pub mod utils;

pub use config::LerpSettings;
pub use errors::{LerpError, Result};
pub use lerp::{
    Color, Color32, Color32Lerp, ColorLerp, FloatLerp, Interpolatable, LerpState,
    QuaternionLerp, TimedLerp, Vector2Lerp, Vector3Lerp,
};
pub use utils::time::{ManualClock, SystemClock, TimeSource};
