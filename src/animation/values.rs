use glam::{Quat, Vec3};

/// Blending between two keyframe values of the same track.
pub trait Interpolate: Copy {
    /// Value at blend factor `t` between `start` (t = 0) and `end` (t = 1).
    #[must_use]
    fn interpolate(start: Self, end: Self, t: f32) -> Self;
}

/// Translation and scale tracks blend component-wise.
impl Interpolate for Vec3 {
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

/// Rotation tracks use spherical linear interpolation, renormalized to
/// counter floating-point drift accumulating over a clip.
impl Interpolate for Quat {
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t).normalize()
    }
}
