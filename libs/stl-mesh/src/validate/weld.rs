//! Tolerance-based vertex welding on a spatial hash.
//!
//! STL stores every facet's vertices separately, so shared corners only
//! exist as repeated coordinates. After transforms those repeats can differ
//! by a few ulps, which makes exact-coordinate keys unreliable. The welder
//! maps every position to a stable [`VertexId`]: a position receives the id
//! of the first registered position within tolerance, or a fresh id.
//!
//! Cells are twice the tolerance wide, so any position within tolerance of
//! a query lies in the query's cell or one of its 26 neighbours.

use std::collections::HashMap;

use crate::core::vec3::{almost_equal, Vec3};

/// Index of a welded vertex position.
pub type VertexId = u32;

type CellCoord = (i64, i64, i64);

/// Spatial hash assigning ids to vertex positions.
#[derive(Debug)]
pub(crate) struct VertexWelder {
    cells: HashMap<CellCoord, Vec<VertexId>>,
    positions: Vec<Vec3>,
    cell_size: f64,
    tolerance: f64,
}

impl VertexWelder {
    /// Creates an empty welder. `tolerance` must be positive.
    pub(crate) fn new(tolerance: f64, capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            cell_size: tolerance * 2.0,
            tolerance,
        }
    }

    fn cell_of(&self, p: Vec3) -> CellCoord {
        let discretize = |c: f64| (c / self.cell_size).floor() as i64;
        (discretize(p.x), discretize(p.y), discretize(p.z))
    }

    /// Returns the id of `position`, registering it if no earlier position
    /// lies within tolerance.
    ///
    /// When several earlier positions qualify, the lowest id wins so the
    /// result only depends on registration order.
    pub(crate) fn weld(&mut self, position: Vec3) -> VertexId {
        let (cx, cy, cz) = self.cell_of(position);

        let mut best: Option<VertexId> = None;
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    // Far-away positions land in the saturated edge cells
                    let cell = (
                        cx.saturating_add(dx),
                        cy.saturating_add(dy),
                        cz.saturating_add(dz),
                    );
                    let Some(ids) = self.cells.get(&cell) else {
                        continue;
                    };
                    for &id in ids {
                        if almost_equal(self.positions[id as usize], position, self.tolerance)
                            && best.map_or(true, |b| id < b)
                        {
                            best = Some(id);
                        }
                    }
                }
            }
        }

        if let Some(id) = best {
            return id;
        }

        let id = self.positions.len() as VertexId;
        self.positions.push(position);
        self.cells.entry((cx, cy, cz)).or_default().push(id);
        id
    }

    /// Number of distinct welded positions.
    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }
}
