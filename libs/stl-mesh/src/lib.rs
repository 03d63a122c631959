//! STL solid kernel.
//!
//! This crate manipulates triangle soups in the STL representation: every
//! facet carries its own outward normal, three vertices in counter-clockwise
//! order and a 16-bit attribute word. It provides the geometric transforms
//! that keep those redundant normals consistent, and a validator that
//! rebuilds edge adjacency to report manifoldness defects per triangle.
//!
//! ## Example
//!
//! ```rust
//! use stl_mesh::{Solid, Triangle, Vec3};
//!
//! let triangle = Triangle::from_vertices([
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! ]);
//! let mut solid = Solid::new("patch", false, vec![triangle]);
//! solid.translate(Vec3::new(0.0, 0.0, 2.0));
//!
//! let measurement = solid.measure();
//! assert_eq!(measurement.min.z, 2.0);
//!
//! // A lone triangle is an open surface: every edge lacks a counter-edge.
//! let report = solid.validate();
//! assert!(report[0].is_some());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod solid;
pub mod triangle;
pub mod validate;

pub use crate::config::SolidConfig;
pub use crate::core::mat4::Mat4;
pub use crate::core::vec3::{angle, Vec3};
pub use error::{StlError, StlResult};
pub use solid::{Measurement, Solid};
pub use triangle::Triangle;
pub use validate::{EdgeError, EdgeIndex, TriangleErrors, ValidationSummary};

#[cfg(test)]
pub(crate) mod test_support;
