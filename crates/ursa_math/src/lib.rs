// Re-export glam for convenience
pub use glam::*;

// Ursa math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Color type alias.
///
/// Channels are nominally in the 0-255 range but arithmetic never clamps;
/// clamping belongs to whoever encodes the final image.
pub type Color = Vec3;

/// Pure white in 0-255 channel units.
pub const WHITE: Color = Vec3::splat(255.0);

/// Mirror `v` about the unit normal `n`.
///
/// Both vectors point away from the surface, so the result is the direction
/// light arriving along `-v` leaves in.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    (2.0 * v.dot(n) * n - v).normalize_or_zero()
}
