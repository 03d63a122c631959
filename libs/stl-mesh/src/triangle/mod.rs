//! # Triangle
//!
//! A single STL facet: stored normal, three vertices and an attribute word.
//!
//! ## Winding
//!
//! Vertices are ordered counter-clockwise when viewed from outside the
//! solid. The normal is derived from that order with the right-hand rule on
//! `(v0 − v2) × (v1 − v2)`, so the ordering is an invariant of the type, not
//! a convention.
//!
//! ## Example
//!
//! ```rust
//! use stl_mesh::{Triangle, Vec3};
//!
//! let t = Triangle::from_vertices([
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! ]);
//! assert_eq!(t.normal, Vec3::Z);
//! assert!((t.area() - 0.5).abs() < 1e-12);
//! ```

use config::constants::VERTEX_TOLERANCE;
use glam::DVec4;
use serde::{Deserialize, Serialize};

use crate::core::mat4::{linear_part, Mat4};
use crate::core::vec3::{almost_equal, angle, Vec3};

// =============================================================================
// TRIANGLE STRUCT
// =============================================================================

/// One facet of a [`Solid`](crate::Solid).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Triangle {
    /// Unit-length outward normal. Redundant with the vertices, stored
    /// because the STL format stores it.
    pub normal: Vec3,
    /// Vertices in counter-clockwise order seen from outside.
    pub vertices: [Vec3; 3],
    /// Format-specific payload, never interpreted by geometry code.
    /// Often used for color; ASCII STL cannot carry it.
    pub attributes: u16,
}

impl Triangle {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Creates a triangle exactly as a parser read it.
    ///
    /// The normal is stored as given; use [`check_normal`](Self::check_normal)
    /// to test it against the vertices.
    #[must_use]
    pub fn new(normal: Vec3, vertices: [Vec3; 3], attributes: u16) -> Self {
        Self {
            normal,
            vertices,
            attributes,
        }
    }

    /// Creates a triangle whose normal is computed from the vertices.
    #[must_use]
    pub fn from_vertices(vertices: [Vec3; 3]) -> Self {
        let mut triangle = Self::new(Vec3::ZERO, vertices, 0);
        triangle.recalculate_normal();
        triangle
    }

    // =========================================================================
    // NORMALS
    // =========================================================================

    /// Computes the normal from the vertices using the right-hand rule.
    ///
    /// Returns the zero vector for a degenerate triangle; check
    /// [`has_equal_vertices`](Self::has_equal_vertices) before trusting it.
    #[must_use]
    pub fn calculate_normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v0 - v2).cross(v1 - v2).normalize_or_zero()
    }

    /// Overwrites the stored normal with [`calculate_normal`](Self::calculate_normal).
    pub fn recalculate_normal(&mut self) {
        self.normal = self.calculate_normal();
    }

    /// Returns true if the stored normal is within `tolerance` radians of the
    /// normal computed from the vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_mesh::{Triangle, Vec3};
    ///
    /// let mut t = Triangle::from_vertices([Vec3::ZERO, Vec3::X, Vec3::Y]);
    /// assert!(t.check_normal(1e-3));
    /// t.normal = -t.normal;
    /// assert!(!t.check_normal(1e-3));
    /// ```
    #[must_use]
    pub fn check_normal(&self, tolerance: f64) -> bool {
        angle(self.normal, self.calculate_normal()) < tolerance
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Returns true if at least two vertices coincide within the default
    /// vertex tolerance, i.e. the triangle is a line or a point.
    #[must_use]
    pub fn has_equal_vertices(&self) -> bool {
        self.has_equal_vertices_within(VERTEX_TOLERANCE)
    }

    /// Same as [`has_equal_vertices`](Self::has_equal_vertices) with an
    /// explicit per-component tolerance.
    #[must_use]
    pub fn has_equal_vertices_within(&self, tolerance: f64) -> bool {
        let [v0, v1, v2] = self.vertices;
        almost_equal(v0, v1, tolerance)
            || almost_equal(v0, v2, tolerance)
            || almost_equal(v1, v2, tolerance)
    }

    /// Triangle area from Heron's formula on the three edge lengths.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [v0, v1, v2] = self.vertices;
        let a = v0.distance(v1);
        let b = v1.distance(v2);
        let c = v2.distance(v0);
        let s = (a + b + c) / 2.0;
        // Rounding can push the radicand of a sliver slightly below zero
        (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
    }

    /// Plane quadric `Q = p pᵀ` with `p = (a, b, c, d)` the plane through the
    /// triangle: `(a, b, c)` is the calculated normal and `d = −n·v0`.
    ///
    /// `vᵀ Q v` for a homogeneous point `v = (x, y, z, 1)` is the squared
    /// distance of the point to the triangle's plane. Simplification
    /// algorithms sum these per vertex to price edge collapses.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_mesh::{Triangle, Vec3};
    /// use glam::DVec4;
    ///
    /// let t = Triangle::from_vertices([Vec3::ZERO, Vec3::X, Vec3::Y]);
    /// let q = t.quadric();
    /// let p = DVec4::new(0.3, 0.7, 2.0, 1.0);
    /// assert!((p.dot(q * p) - 4.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn quadric(&self) -> Mat4 {
        let n = self.calculate_normal();
        let p = DVec4::new(n.x, n.y, n.z, -n.dot(self.vertices[0]));
        Mat4::from_cols(p * p.x, p * p.y, p * p.z, p * p.w)
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Applies the 3×3 linear part of `matrix` to every vertex and
    /// recalculates the normal.
    ///
    /// The translation column is ignored here; solids apply translation
    /// through [`transform_affine_no_recalc`](Self::transform_affine_no_recalc)
    /// or [`translate`](Self::translate).
    pub fn transform(&mut self, matrix: &Mat4) {
        self.transform_no_recalc(matrix);
        self.recalculate_normal();
    }

    /// Applies the 3×3 linear part of `matrix` to every vertex without
    /// touching the normal.
    pub fn transform_no_recalc(&mut self, matrix: &Mat4) {
        let m3 = linear_part(matrix);
        for v in &mut self.vertices {
            *v = m3 * *v;
        }
    }

    /// Applies the full homogeneous transform (translation included) to
    /// every vertex without touching the normal.
    pub fn transform_affine_no_recalc(&mut self, matrix: &Mat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Moves every vertex by `offset`. The normal is invariant.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Swaps `v1` and `v2` and negates the stored normal, turning the facet
    /// inside out.
    pub fn reverse_winding(&mut self) {
        self.vertices.swap(1, 2);
        self.normal = -self.normal;
    }
}
