//! Homogeneous 4×4 matrices built on `glam::DMat4`.
//!
//! Solid transforms are expressed as column-major affine matrices; the
//! helpers here compose the pivot rotation and classify the linear part.

use glam::DMat3;

use super::vec3::Vec3;

pub use glam::DMat4 as Mat4;

/// Rotation by `angle` radians about the line through `pivot` along `axis`.
///
/// The rotation follows the right-hand rule around the normalized axis.
/// Returns `None` when `axis` has zero (or non-finite) length, since no
/// rotation axis is defined.
///
/// # Examples
/// ```
/// use stl_mesh::Vec3;
/// use stl_mesh::core::mat4::rotation_about;
///
/// let m = rotation_about(Vec3::new(1.0, 0.0, 0.0), Vec3::Z, std::f64::consts::PI).unwrap();
/// let p = m.transform_point3(Vec3::new(2.0, 0.0, 0.0));
/// assert!((p - Vec3::ZERO).length() < 1e-12);
/// ```
pub fn rotation_about(pivot: Vec3, axis: Vec3, angle: f64) -> Option<Mat4> {
    let axis = axis.try_normalize()?;
    Some(
        Mat4::from_translation(pivot)
            * Mat4::from_axis_angle(axis, angle)
            * Mat4::from_translation(-pivot),
    )
}

/// Upper-left 3×3 block of a homogeneous matrix.
#[inline]
pub fn linear_part(matrix: &Mat4) -> DMat3 {
    DMat3::from_mat4(*matrix)
}

/// Returns true if the matrix mirrors space (negative linear determinant).
///
/// Mirroring transforms turn counter-clockwise facets clockwise, so the
/// solid layer reverses winding after applying one.
///
/// # Examples
/// ```
/// use stl_mesh::{Mat4, Vec3};
/// use stl_mesh::core::mat4::is_mirroring;
/// assert!(is_mirroring(&Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0))));
/// assert!(!is_mirroring(&Mat4::from_scale(Vec3::new(-1.0, -1.0, 1.0))));
/// ```
#[inline]
pub fn is_mirroring(matrix: &Mat4) -> bool {
    linear_part(matrix).determinant() < 0.0
}
