//! # Solid
//!
//! A named triangle soup as stored in one STL file, and the geometric
//! operations applied to it in place.
//!
//! ## Normals Under Transforms
//!
//! Every facet stores its normal. Operations keep it consistent:
//!
//! | Operation   | Vertices            | Stored normal                      |
//! |-------------|---------------------|------------------------------------|
//! | `translate` | `v + d`             | unchanged                          |
//! | `scale(k)`  | `v * k`             | unchanged (`k > 0`), negated (`k < 0`) |
//! | `stretch`   | per-axis scale      | recalculated                       |
//! | `rotate`    | rotation about line | recalculated                       |
//! | `transform` | affine              | recalculated                       |
//!
//! Transforms that mirror space (negative determinant) also reverse the
//! vertex order of every facet so the winding stays counter-clockwise seen
//! from outside.

mod measure;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SolidConfig;
use crate::core::mat4::{is_mirroring, rotation_about, Mat4};
use crate::core::vec3::Vec3;
use crate::triangle::Triangle;
use crate::validate::{validate_triangles, TriangleErrors};

pub use measure::Measurement;

// =============================================================================
// SOLID STRUCT
// =============================================================================

/// An STL solid: format metadata plus an ordered triangle sequence.
///
/// Validation reports are indexed like `triangles`, so operations never
/// reorder, insert or drop facets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Solid {
    /// Name from the `solid` line or the binary header.
    pub name: String,
    /// Whether the solid was read from (and is written back as) ASCII STL.
    pub is_ascii: bool,
    /// Facets in file order.
    pub triangles: Vec<Triangle>,
}

impl Solid {
    /// Creates a solid from already parsed parts.
    #[must_use]
    pub fn new(name: impl Into<String>, is_ascii: bool, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            is_ascii,
            triangles,
        }
    }

    /// Number of facets.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the solid has no facets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Scales every vertex by `factor` about the origin.
    ///
    /// A uniform positive scale does not change facet directions, so the
    /// stored normals are kept. A negative factor is a point reflection: the
    /// winding of every facet is reversed and its normal negated, which keeps
    /// both outward. A zero factor collapses the solid and leaves normals as
    /// stored.
    pub fn scale(&mut self, factor: f64) {
        for t in &mut self.triangles {
            for v in &mut t.vertices {
                *v *= factor;
            }
            if factor < 0.0 {
                t.reverse_winding();
            }
        }
    }

    /// Scales each axis independently and recalculates normals.
    ///
    /// An odd number of negative factors mirrors the solid; the winding is
    /// then reversed.
    pub fn stretch(&mut self, factors: Vec3) {
        self.transform(&Mat4::from_scale(factors));
    }

    /// Moves every vertex by `offset`. Normals are untouched.
    pub fn translate(&mut self, offset: Vec3) {
        for t in &mut self.triangles {
            t.translate(offset);
        }
    }

    /// Rotates by `angle` radians about the line through `pivot` along
    /// `axis`, following the right-hand rule.
    ///
    /// A zero `axis` defines no rotation and leaves the solid unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::f64::consts::FRAC_PI_2;
    /// use stl_mesh::{Solid, Triangle, Vec3};
    ///
    /// let mut solid = Solid::new("t", true, vec![
    ///     Triangle::from_vertices([Vec3::ZERO, Vec3::X, Vec3::Y]),
    /// ]);
    /// solid.rotate(Vec3::ZERO, Vec3::X, FRAC_PI_2);
    /// // The facet now lies in the xz-plane, facing -y
    /// assert!((solid.triangles[0].normal - Vec3::NEG_Y).length() < 1e-12);
    /// ```
    pub fn rotate(&mut self, pivot: Vec3, axis: Vec3, angle: f64) {
        match rotation_about(pivot, axis, angle) {
            Some(matrix) => self.transform(&matrix),
            None => debug!(?axis, "Zero rotation axis, solid left unchanged"),
        }
    }

    /// Applies the affine `matrix` to every vertex, then recalculates each
    /// normal once.
    ///
    /// If the linear part has a negative determinant the winding of every
    /// facet is reversed.
    pub fn transform(&mut self, matrix: &Mat4) {
        let mirror = is_mirroring(matrix);
        debug!(triangles = self.triangles.len(), mirror, "Transforming solid");
        for t in &mut self.triangles {
            transform_triangle(t, matrix, mirror);
        }
    }

    /// Same result as [`transform`](Self::transform), with triangles
    /// processed in parallel.
    pub fn par_transform(&mut self, matrix: &Mat4) {
        let mirror = is_mirroring(matrix);
        debug!(triangles = self.triangles.len(), mirror, "Transforming solid in parallel");
        self.triangles
            .par_iter_mut()
            .for_each(|t| transform_triangle(t, matrix, mirror));
    }

    /// Scales the solid down uniformly about the origin until its bounding
    /// box fits inside `size`. A solid that already fits is left unchanged.
    ///
    /// Axes where the solid is flat impose no limit, and neither do axes
    /// whose limit is not positive: the solid is never collapsed or mirrored.
    pub fn scale_linear_down_to_size_box(&mut self, size: Vec3) {
        let len = self.measure().len;
        let factor = [(len.x, size.x), (len.y, size.y), (len.z, size.z)]
            .into_iter()
            .filter(|&(extent, limit)| extent > 0.0 && limit > 0.0)
            .map(|(extent, limit)| limit / extent)
            .fold(1.0_f64, f64::min);
        if factor < 1.0 {
            debug!(factor, "Scaling solid down to fit box");
            self.scale(factor);
        }
    }

    // =========================================================================
    // NORMALS
    // =========================================================================

    /// Overwrites every stored normal with the one computed from the vertices.
    pub fn recalculate_normals(&mut self) {
        for t in &mut self.triangles {
            t.recalculate_normal();
        }
    }

    /// Indices of facets whose stored normal deviates from the computed one
    /// by `tolerance` radians or more.
    #[must_use]
    pub fn check_normals(&self, tolerance: f64) -> Vec<usize> {
        self.triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.check_normal(tolerance))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of facets whose stored normal deviates by the configured
    /// `normal_tolerance` or more.
    #[must_use]
    pub fn check_normals_with(&self, config: &SolidConfig) -> Vec<usize> {
        self.check_normals(config.normal_tolerance)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Bounding box of all vertices.
    #[must_use]
    pub fn measure(&self) -> Measurement {
        Measurement::of(&self.triangles)
    }

    /// Sum of all facet areas.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Reports manifoldness defects per facet with default tolerances.
    ///
    /// The result has one entry per triangle, `None` meaning the triangle is
    /// defect-free. A closed, consistently wound solid yields only `None`.
    #[must_use]
    pub fn validate(&self) -> Vec<Option<TriangleErrors>> {
        self.validate_with(&SolidConfig::default())
    }

    /// Same as [`validate`](Self::validate) with explicit tolerances.
    #[must_use]
    pub fn validate_with(&self, config: &SolidConfig) -> Vec<Option<TriangleErrors>> {
        validate_triangles(&self.triangles, config)
    }
}

fn transform_triangle(triangle: &mut Triangle, matrix: &Mat4, mirror: bool) {
    triangle.transform_affine_no_recalc(matrix);
    if mirror {
        triangle.vertices.swap(1, 2);
    }
    triangle.recalculate_normal();
}
