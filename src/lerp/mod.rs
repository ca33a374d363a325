//! Timed Interpolation
//!
//! [`TimedLerp`] is the state machine; [`Interpolatable`] supplies the per-type
//! blend. Aliases exist for every supported value type.

pub mod color;
pub mod timed;
pub mod values;

pub use color::{Color, Color32};
pub use timed::{
    Color32Lerp, ColorLerp, FloatLerp, LerpState, QuaternionLerp, TimedLerp, Vector2Lerp,
    Vector3Lerp,
};
pub use values::Interpolatable;
