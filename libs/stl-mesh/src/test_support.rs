//! Shared fixtures for unit tests.

use crate::core::vec3::{almost_equal, Vec3};
use crate::{Solid, Triangle};

fn v(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Closed, consistently wound unit cube spanning `[0, 1]³` (12 facets).
pub(crate) fn unit_cube() -> Solid {
    let faces = [
        // z = 0
        [v(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0)],
        [v(0.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(1.0, 0.0, 0.0)],
        // z = 1
        [v(0.0, 0.0, 1.0), v(1.0, 0.0, 1.0), v(1.0, 1.0, 1.0)],
        [v(0.0, 0.0, 1.0), v(1.0, 1.0, 1.0), v(0.0, 1.0, 1.0)],
        // y = 0
        [v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 0.0, 1.0)],
        [v(0.0, 0.0, 0.0), v(1.0, 0.0, 1.0), v(0.0, 0.0, 1.0)],
        // y = 1
        [v(0.0, 1.0, 0.0), v(0.0, 1.0, 1.0), v(1.0, 1.0, 1.0)],
        [v(0.0, 1.0, 0.0), v(1.0, 1.0, 1.0), v(1.0, 1.0, 0.0)],
        // x = 0
        [v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, 1.0, 1.0)],
        [v(0.0, 0.0, 0.0), v(0.0, 1.0, 1.0), v(0.0, 1.0, 0.0)],
        // x = 1
        [v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(1.0, 1.0, 1.0)],
        [v(1.0, 0.0, 0.0), v(1.0, 1.0, 1.0), v(1.0, 0.0, 1.0)],
    ];
    let triangles = faces
        .iter()
        .enumerate()
        .map(|(i, &vertices)| {
            let mut t = Triangle::from_vertices(vertices);
            t.attributes = i as u16;
            t
        })
        .collect();
    Solid::new("cube", true, triangles)
}

/// Four facets with one defect each:
/// - 0 has two coincident vertices,
/// - 1 has no counter-edge for `v0 -> v1`,
/// - 2 has no counter-edge for `v1 -> v2`,
/// - 3 repeats triangle 0's edge `v0 -> v1` in the same direction on `v2 -> v0`.
pub(crate) fn broken_solid() -> Solid {
    let triangles = vec![
        Triangle::new(
            v(0.0, 0.0, -1.0),
            [v(0.0, 1.0, 0.0), v(0.0, 0.0, 0.0), v(0.0, 0.0, 0.0)],
            0,
        ),
        Triangle::new(
            v(0.0, -1.0, 0.0),
            [v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 0.0, 1.0)],
            0,
        ),
        Triangle::new(
            v(0.57735, 0.57735, 0.57735),
            [v(0.0, 0.0, 1.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
            0,
        ),
        Triangle::new(
            v(-1.0, 0.0, 0.0),
            [v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0)],
            0,
        ),
    ];
    Solid::new("broken", true, triangles)
}

/// Facet equality up to cyclic rotation of the vertices (which preserves
/// winding) with per-component tolerance on vertices and normal.
pub(crate) fn same_facet(a: &Triangle, b: &Triangle, tolerance: f64) -> bool {
    if a.attributes != b.attributes || !almost_equal(a.normal, b.normal, tolerance) {
        return false;
    }
    (0..3).any(|shift| {
        (0..3).all(|k| almost_equal(a.vertices[k], b.vertices[(k + shift) % 3], tolerance))
    })
}

/// Solid equality ignoring triangle order and cyclic vertex order.
pub(crate) fn same_solid_unordered(a: &Solid, b: &Solid, tolerance: f64) -> bool {
    if a.triangles.len() != b.triangles.len() {
        return false;
    }
    let mut used = vec![false; b.triangles.len()];
    a.triangles.iter().all(|ta| {
        let found = b
            .triangles
            .iter()
            .enumerate()
            .find(|(j, tb)| !used[*j] && same_facet(ta, tb, tolerance))
            .map(|(j, _)| j);
        match found {
            Some(j) => {
                used[j] = true;
                true
            }
            None => false,
        }
    })
}
