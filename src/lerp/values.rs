use glam::{Quat, Vec2, Vec3};

use crate::lerp::color::{Color, Color32};

/// Value types that can be linearly blended between two endpoints.
///
/// `interpolate_linear(start, end, 0.0)` must return `start`. Implementations must
/// be pure: the result depends only on the arguments.
pub trait Interpolatable: Copy {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec2 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

/// Spherical blend along the shorter arc, so the result stays a unit rotation.
impl Interpolatable for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}

impl Interpolatable for Color {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        Color::new(
            f32::interpolate_linear(start.r, end.r, t),
            f32::interpolate_linear(start.g, end.g, t),
            f32::interpolate_linear(start.b, end.b, t),
            f32::interpolate_linear(start.a, end.a, t),
        )
    }
}

/// Channels are blended in float space and truncated back to 8 bits.
impl Interpolatable for Color32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        let channel = |s: u8, e: u8| f32::interpolate_linear(f32::from(s), f32::from(e), t) as u8;
        Color32::new(
            channel(start.r, end.r),
            channel(start.g, end.g),
            channel(start.b, end.b),
            channel(start.a, end.a),
        )
    }
}
