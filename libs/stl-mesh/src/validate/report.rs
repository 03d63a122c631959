//! Defect reports produced by [`Solid::validate`](crate::Solid::validate).
//!
//! The shape is a stable contract for reporting layers: one optional
//! [`TriangleErrors`] per triangle, each holding a degenerate-vertex flag
//! and up to three optional [`EdgeError`]s.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Defects of one edge slot of a triangle.
///
/// Triangle lists are ascending and never contain the triangle the edge
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeError {
    /// Other triangles using the same directed edge. A closed, consistently
    /// wound surface has none.
    pub same_edge_triangles: Vec<usize>,
    /// Other triangles using the reversed edge. A closed, consistently wound
    /// surface has exactly one.
    pub counter_edge_triangles: Vec<usize>,
}

impl EdgeError {
    /// No triangle in the solid contains the reversed edge: the surface is
    /// open here, or the neighbour is wound the wrong way.
    #[must_use]
    pub fn has_no_counter_edge(&self) -> bool {
        self.counter_edge_triangles.is_empty()
    }

    /// More than one triangle contains the reversed edge.
    #[must_use]
    pub fn has_multiple_counter_edges(&self) -> bool {
        self.counter_edge_triangles.len() > 1
    }

    /// The edge is shared beyond its single manifold neighbour: another
    /// triangle uses it in the same direction, or several use it reversed.
    #[must_use]
    pub fn is_used_in_other_triangles(&self) -> bool {
        !self.same_edge_triangles.is_empty() || self.has_multiple_counter_edges()
    }

    /// Every triangle involved in the defect, ascending and de-duplicated.
    ///
    /// For a missing counter-edge with no duplicates this is empty.
    #[must_use]
    pub fn other_triangles(&self) -> Vec<usize> {
        let mut all: Vec<usize> = self.same_edge_triangles.clone();
        if self.has_multiple_counter_edges() {
            all.extend_from_slice(&self.counter_edge_triangles);
        }
        all.sort_unstable();
        all.dedup();
        all
    }
}

impl fmt::Display for EdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.has_no_counter_edge() {
            parts.push("no counter-edge found".to_string());
        }
        if self.is_used_in_other_triangles() {
            parts.push(format!(
                "edge used in {} other triangle(s) {:?}",
                self.other_triangles().len(),
                self.other_triangles()
            ));
        }
        write!(f, "{}", parts.join("; "))
    }
}

/// Defects of one triangle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TriangleErrors {
    /// At least two vertices coincide; the facet has no area.
    pub has_equal_vertices: bool,
    /// Defects per edge slot; slot `k` is the edge `v_k -> v_{(k+1) mod 3}`.
    pub edge_errors: [Option<EdgeError>; 3],
}

impl TriangleErrors {
    /// Returns true if no defect is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_equal_vertices && self.edge_errors.iter().all(Option::is_none)
    }

    /// Iterates over `(slot, error)` for defective edges.
    pub fn edge_defects(&self) -> impl Iterator<Item = (usize, &EdgeError)> + '_ {
        self.edge_errors
            .iter()
            .enumerate()
            .filter_map(|(slot, e)| e.as_ref().map(|e| (slot, e)))
    }
}

impl fmt::Display for TriangleErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if self.has_equal_vertices {
            write!(f, "has equal vertices")?;
            first = false;
        }
        for (slot, error) in self.edge_defects() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "edge {slot}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Aggregate counts over a full validation report.
///
/// # Example
///
/// ```rust
/// use stl_mesh::{Solid, Triangle, ValidationSummary, Vec3};
///
/// let solid = Solid::new("patch", true, vec![
///     Triangle::from_vertices([Vec3::ZERO, Vec3::X, Vec3::Y]),
/// ]);
/// let summary = ValidationSummary::from_report(&solid.validate());
/// assert_eq!(summary.open_edge_count, 3);
/// assert!(!summary.is_closed_manifold());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Triangles in the validated solid.
    pub triangle_count: usize,
    /// Triangles with at least one defect.
    pub defective_triangle_count: usize,
    /// Triangles with coincident vertices.
    pub degenerate_triangle_count: usize,
    /// Edge slots without a counter-edge.
    pub open_edge_count: usize,
    /// Edge slots shared beyond their manifold neighbour.
    pub overshared_edge_count: usize,
}

impl ValidationSummary {
    /// Summarizes a report returned by `Solid::validate`.
    #[must_use]
    pub fn from_report(report: &[Option<TriangleErrors>]) -> Self {
        let mut summary = Self {
            triangle_count: report.len(),
            ..Self::default()
        };
        for errors in report.iter().flatten() {
            summary.defective_triangle_count += 1;
            if errors.has_equal_vertices {
                summary.degenerate_triangle_count += 1;
            }
            for (_, edge) in errors.edge_defects() {
                if edge.has_no_counter_edge() {
                    summary.open_edge_count += 1;
                }
                if edge.is_used_in_other_triangles() {
                    summary.overshared_edge_count += 1;
                }
            }
        }
        summary
    }

    /// Returns true if no triangle has a defect.
    #[must_use]
    pub fn is_closed_manifold(&self) -> bool {
        self.defective_triangle_count == 0
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Report:")?;
        writeln!(f, "  Triangles: {}", self.triangle_count)?;
        writeln!(
            f,
            "  Closed manifold: {}",
            if self.is_closed_manifold() { "Yes" } else { "No" }
        )?;

        if !self.is_closed_manifold() {
            writeln!(f)?;
            writeln!(f, "  Issues:")?;
            writeln!(f, "    Defective triangles: {}", self.defective_triangle_count)?;
            if self.degenerate_triangle_count > 0 {
                writeln!(f, "    Degenerate triangles: {}", self.degenerate_triangle_count)?;
            }
            if self.open_edge_count > 0 {
                writeln!(f, "    Edges without counter-edge: {}", self.open_edge_count)?;
            }
            if self.overshared_edge_count > 0 {
                writeln!(f, "    Edges used by other triangles: {}", self.overshared_edge_count)?;
            }
        }

        Ok(())
    }
}
