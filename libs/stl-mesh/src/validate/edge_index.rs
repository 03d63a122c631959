//! # Directed Edge Index
//!
//! Maps every directed edge of a triangle soup to the triangles that use it.
//!
//! Endpoints are welded vertex ids (see [`weld`](super::weld)), so two
//! facets share an edge when their endpoint positions agree within the
//! vertex tolerance, not only when they are bit-identical.
//!
//! The index is built fresh for every validation and never stored on the
//! solid: transforms would invalidate it.

use std::collections::HashMap;

use crate::triangle::Triangle;

use super::weld::{VertexId, VertexWelder};

/// Directed edge `(start, end)` over welded vertex ids.
pub type EdgeKey = (VertexId, VertexId);

/// Directed-edge → triangle lookup for one triangle sequence.
///
/// # Example
///
/// ```rust
/// use stl_mesh::{EdgeIndex, Triangle, Vec3};
///
/// let a = Triangle::from_vertices([Vec3::ZERO, Vec3::X, Vec3::Y]);
/// let b = Triangle::from_vertices([Vec3::X, Vec3::ZERO, -Vec3::Y]);
/// let index = EdgeIndex::build(&[a, b], 1e-6);
///
/// // Triangle 0 runs 0 -> X, triangle 1 runs X -> 0
/// let [start, end, _] = index.vertex_ids(0);
/// assert_eq!(index.triangles_with_edge(start, end), &[0]);
/// assert_eq!(index.triangles_with_edge(end, start), &[1]);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeIndex {
    /// Triangle indices per directed edge, ascending.
    edges: HashMap<EdgeKey, Vec<usize>>,
    /// Welded ids of each triangle's vertices, in stored order.
    triangle_vertices: Vec<[VertexId; 3]>,
    /// Number of distinct welded positions.
    vertex_count: usize,
}

impl EdgeIndex {
    /// Builds the index for `triangles`, welding positions that agree within
    /// `tolerance` per component.
    ///
    /// Edge slot `k` of a triangle is `(v_k, v_{(k+1) mod 3})`. Triangles are
    /// registered in sequence order, so every edge's triangle list is sorted.
    #[must_use]
    pub fn build(triangles: &[Triangle], tolerance: f64) -> Self {
        let mut welder = VertexWelder::new(tolerance, triangles.len() * 3);
        let mut edges: HashMap<EdgeKey, Vec<usize>> = HashMap::with_capacity(triangles.len() * 3);
        let mut triangle_vertices = Vec::with_capacity(triangles.len());

        for (index, triangle) in triangles.iter().enumerate() {
            let ids = triangle.vertices.map(|v| welder.weld(v));
            for slot in 0..3 {
                let list = edges.entry(edge_key(&ids, slot)).or_default();
                // A facet with repeated vertices can register the same
                // directed edge twice
                if list.last() != Some(&index) {
                    list.push(index);
                }
            }
            triangle_vertices.push(ids);
        }

        Self {
            edges,
            triangle_vertices,
            vertex_count: welder.len(),
        }
    }

    /// Triangles using the directed edge `start -> end`, ascending.
    #[must_use]
    pub fn triangles_with_edge(&self, start: VertexId, end: VertexId) -> &[usize] {
        self.edges
            .get(&(start, end))
            .map_or(&[], Vec::as_slice)
    }

    /// Welded vertex ids of triangle `triangle`.
    ///
    /// # Panics
    ///
    /// Panics if `triangle` is out of range for the indexed sequence.
    #[must_use]
    pub fn vertex_ids(&self, triangle: usize) -> [VertexId; 3] {
        self.triangle_vertices[triangle]
    }

    /// Directed edge in slot `slot` (0..3) of triangle `triangle`.
    #[must_use]
    pub fn edge(&self, triangle: usize, slot: usize) -> EdgeKey {
        edge_key(&self.triangle_vertices[triangle], slot)
    }

    /// Number of distinct directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct vertex positions after welding.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of indexed triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangle_vertices.len()
    }
}

#[inline]
fn edge_key(ids: &[VertexId; 3], slot: usize) -> EdgeKey {
    (ids[slot], ids[(slot + 1) % 3])
}
