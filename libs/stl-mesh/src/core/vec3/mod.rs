//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! All geometry is computed in f64. Narrowing to f32 only happens when a
//! solid is written to binary STL.

pub use glam::DVec3 as Vec3;

/// Angle between two vectors in radians, in `[0, π]`.
///
/// Returns `0` when either vector has zero length. The cosine is clamped to
/// `[-1, 1]` before `acos` so nearly parallel vectors never leave its domain.
///
/// # Examples
/// ```
/// use stl_mesh::{angle, Vec3};
/// let a = angle(Vec3::X, Vec3::Y);
/// assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert_eq!(angle(Vec3::ZERO, Vec3::Y), 0.0);
/// ```
pub fn angle(u: Vec3, v: Vec3) -> f64 {
    let len_product = u.length() * v.length();
    if len_product == 0.0 {
        return 0.0;
    }
    let cos_angle = (u.dot(v) / len_product).clamp(-1.0, 1.0);
    cos_angle.acos()
}

/// Returns true if every component of `a` and `b` differs by at most `tolerance`.
///
/// # Examples
/// ```
/// use stl_mesh::Vec3;
/// use stl_mesh::core::vec3::almost_equal;
/// assert!(almost_equal(Vec3::ONE, Vec3::splat(1.0 + 1e-9), 1e-6));
/// assert!(!almost_equal(Vec3::ONE, Vec3::ZERO, 1e-6));
/// ```
#[inline]
pub fn almost_equal(a: Vec3, b: Vec3, tolerance: f64) -> bool {
    (a - b).abs().max_element() <= tolerance
}
