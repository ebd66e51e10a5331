//! Vector and angle primitives
//!
//! All directions are radians measured from +x, counter-clockwise.
//! Every helper that takes a direction from a delta vector returns a fixed
//! fallback for zero-length input instead of NaN.

use std::f64::consts::{PI, TAU};

use super::constants::tolerance::SMALL_EPSILON;

/// 2D position / velocity in meters (per tick for velocities)
pub type Vec2 = nalgebra::Vector2<f64>;

/// Wrap an angle into [0, 2π).
#[inline]
pub fn normalize_positive(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle into (−π, π].
#[inline]
pub fn normalize_signed(angle: f64) -> f64 {
    let positive = normalize_positive(angle);
    if positive > PI {
        positive - TAU
    } else {
        positive
    }
}

/// Direction from `from` to `to`; 0.0 when the points coincide.
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    dy.atan2(dx)
}

/// Unit vector pointing along `angle`.
#[inline]
pub fn unit(angle: f64) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Rescale `v` to `length`. A zero vector stays zero.
#[inline]
pub fn resized(v: Vec2, length: f64) -> Vec2 {
    let len = v.norm();
    if len == 0.0 {
        v
    } else {
        v * (length / len)
    }
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    (b - a).norm()
}

/// Squared distance, for comparisons without sqrt.
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f64 {
    (b - a).norm_squared()
}

/// Distance from `p` to the segment `s1`-`s2`.
///
/// A segment collapsed to a point (both components within machine epsilon)
/// falls back to point-to-point distance.
pub fn point_segment_distance(p: Vec2, s1: Vec2, s2: Vec2) -> f64 {
    let d = s2 - s1;
    let dp1 = p - s1;

    if d.x.abs() <= SMALL_EPSILON && d.y.abs() <= SMALL_EPSILON {
        return dp1.norm();
    }

    let u = (dp1.dot(&d) / d.norm_squared()).clamp(0.0, 1.0);
    let closest = s1 + d * u;
    (p - closest).norm()
}

/// Cosine of the angle between `delta` and a body facing `direction`.
///
/// `delta` shorter than machine epsilon counts as dead ahead (1.0).
#[inline]
pub fn facing_cosine(delta: Vec2, direction: f64) -> f64 {
    let len = delta.norm();
    if len <= SMALL_EPSILON {
        return 1.0;
    }
    (delta.x * direction.cos() + delta.y * direction.sin()) / len
}
