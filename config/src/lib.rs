//! # Config Crate
//!
//! Centralized configuration constants for the STL mesh kernel.
//! Every tolerance used by geometry comparisons, vertex welding and normal
//! checks is defined here so that the kernel and its callers agree on what
//! "equal" means.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, VERTEX_TOLERANCE};
//!
//! // Two coordinates closer than the vertex tolerance are the same point
//! let a: f64 = 1.0;
//! let b: f64 = 1.0 + 1e-9;
//! assert!((a - b).abs() <= VERTEX_TOLERANCE);
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.vertex_tolerance, VERTEX_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Overrides**: Custom tolerances go through `GlobalConfig::new`
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
