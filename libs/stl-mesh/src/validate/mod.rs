//! # Mesh Validation
//!
//! Reports manifoldness defects of a triangle soup, per triangle.
//!
//! ## Algorithm
//!
//! 1. Weld vertex positions within tolerance and register every directed
//!    edge `v_k -> v_{k+1}` in an [`EdgeIndex`].
//! 2. For every triangle and edge `(a, b)`:
//!    - flag coincident vertices (edge checks still run);
//!    - look up the counter-edge `(b, a)`; a closed, consistently wound
//!      surface has exactly one;
//!    - look up other uses of `(a, b)` itself; there should be none.
//! 3. Emit `None` for defect-free triangles.
//!
//! Building the index must finish before any triangle is checked, so the
//! two phases run back to back in one call. Nothing is cached between calls.

pub mod edge_index;
mod report;
pub mod weld;

use tracing::debug;

use crate::config::SolidConfig;
use crate::triangle::Triangle;

pub use edge_index::{EdgeIndex, EdgeKey};
pub use report::{EdgeError, TriangleErrors, ValidationSummary};
pub use weld::VertexId;

/// Validates `triangles`, returning one entry per triangle in sequence order.
///
/// Never fails: defects are data. See [`Solid::validate`](crate::Solid::validate).
#[must_use]
pub fn validate_triangles(triangles: &[Triangle], config: &SolidConfig) -> Vec<Option<TriangleErrors>> {
    let index = EdgeIndex::build(triangles, config.vertex_tolerance);
    debug!(
        triangles = triangles.len(),
        vertices = index.vertex_count(),
        edges = index.edge_count(),
        "Built edge index"
    );

    let report: Vec<Option<TriangleErrors>> = triangles
        .iter()
        .enumerate()
        .map(|(i, triangle)| check_triangle(&index, i, triangle, config))
        .collect();

    debug!(
        defective = report.iter().filter(|r| r.is_some()).count(),
        "Validated triangles"
    );
    report
}

fn check_triangle(
    index: &EdgeIndex,
    triangle_index: usize,
    triangle: &Triangle,
    config: &SolidConfig,
) -> Option<TriangleErrors> {
    let errors = TriangleErrors {
        has_equal_vertices: triangle.has_equal_vertices_within(config.vertex_tolerance),
        edge_errors: [0, 1, 2].map(|slot| check_edge(index, triangle_index, slot)),
    };
    (!errors.is_empty()).then_some(errors)
}

fn check_edge(index: &EdgeIndex, triangle_index: usize, slot: usize) -> Option<EdgeError> {
    let (start, end) = index.edge(triangle_index, slot);
    let others = |list: &[usize]| -> Vec<usize> {
        list.iter().copied().filter(|&t| t != triangle_index).collect()
    };

    let counter_edge_triangles = others(index.triangles_with_edge(end, start));
    let same_edge_triangles = others(index.triangles_with_edge(start, end));

    if counter_edge_triangles.len() == 1 && same_edge_triangles.is_empty() {
        return None;
    }
    Some(EdgeError {
        same_edge_triangles,
        counter_edge_triangles,
    })
}
