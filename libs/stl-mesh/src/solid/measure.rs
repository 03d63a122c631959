//! Axis-aligned extent of a solid.

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::triangle::Triangle;

/// Bounding box of all vertices of a solid.
///
/// `len` is always `max - min`. An empty solid measures as all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    /// Component-wise minimum over all vertices.
    pub min: Vec3,
    /// Component-wise maximum over all vertices.
    pub max: Vec3,
    /// Extent per axis.
    pub len: Vec3,
}

impl Measurement {
    /// Measures `triangles` in a single pass.
    #[must_use]
    pub fn of(triangles: &[Triangle]) -> Self {
        let mut vertices = triangles.iter().flat_map(|t| t.vertices);
        let Some(first) = vertices.next() else {
            return Self::default();
        };
        let (min, max) = vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        Self {
            min,
            max,
            len: max - min,
        }
    }

    /// Center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}
