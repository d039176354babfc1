use nalgebra::{Point2, Vector3};
use std::ops::{Add, Mul};

/// Types that can be blended with barycentric weights.
///
/// Send + Sync because interpolation runs inside the parallel pixel loop.
pub trait Interpolatable: Copy + Add<Output = Self> + Mul<f32, Output = Self> + Send + Sync {}

impl Interpolatable for f32 {}
impl Interpolatable for Vector3<f32> {}

/// Edge function `E(p, a, b)`.
///
/// Twice the signed area of the triangle `(p, a, b)`. Positive and negative
/// values are the two sides of the line through `a` and `b`; zero is on it.
#[inline(always)]
pub fn edge_function(p: Point2<f32>, a: Point2<f32>, b: Point2<f32>) -> f32 {
    (b.x - p.x) * (a.y - p.y) - (b.y - p.y) * (a.x - p.x)
}

/// Raw (unnormalized) barycentric edge values of `p` against `v0, v1, v2`.
///
/// Component `i` is the sub-area opposite vertex `i`, evaluated against the
/// vertex pairs (v1, v2), (v2, v0), (v0, v1).
#[inline(always)]
pub fn edge_values(p: Point2<f32>, v: &[Point2<f32>; 3]) -> Vector3<f32> {
    Vector3::new(
        edge_function(p, v[1], v[2]),
        edge_function(p, v[2], v[0]),
        edge_function(p, v[0], v[1]),
    )
}

/// Coverage test accepting either winding: all values non-negative, or all
/// strictly negative.
#[inline(always)]
pub fn is_covered(w: &Vector3<f32>) -> bool {
    (w.x >= 0.0 && w.y >= 0.0 && w.z >= 0.0) || (w.x < 0.0 && w.y < 0.0 && w.z < 0.0)
}

/// Normalizes edge values by the triangle's signed double area.
///
/// Not guarded: a zero-area triangle yields non-finite weights, which the
/// depth test later rejects.
#[inline(always)]
pub fn barycentric_weights(w: Vector3<f32>, area: f32) -> Vector3<f32> {
    w / area
}

/// `w.x * values[0] + w.y * values[1] + w.z * values[2]`.
#[inline(always)]
pub fn interpolate<T: Interpolatable>(weights: &Vector3<f32>, values: &[T; 3]) -> T {
    values[0] * weights.x + values[1] * weights.y + values[2] * weights.z
}
