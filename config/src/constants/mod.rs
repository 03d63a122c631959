//! Centralized configuration values shared across the STL mesh kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute per-component tolerance under which two vertex positions are
/// considered the same point.
///
/// Used by degenerate-triangle detection and by the vertex welding that
/// feeds the edge index. Shared vertices read from STL files are usually
/// bit-identical, but after a chain of transforms they only agree up to a
/// few ulps, far below this value.
///
/// # Examples
/// ```
/// use config::constants::VERTEX_TOLERANCE;
/// let a = [0.5_f64, 0.25, 1.0];
/// let b = [0.5_f64 + 1e-9, 0.25, 1.0];
/// assert!(a.iter().zip(&b).all(|(x, y)| (x - y).abs() <= VERTEX_TOLERANCE));
/// ```
pub const VERTEX_TOLERANCE: f64 = 1.0e-6;

/// Maximum angle in radians between a stored facet normal and the normal
/// recomputed from its vertices before the stored one is reported as wrong.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_ANGLE_TOLERANCE;
/// assert!(NORMAL_ANGLE_TOLERANCE < std::f64::consts::PI / 180.0);
/// ```
pub const NORMAL_ANGLE_TOLERANCE: f64 = 1.0e-3;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.vertex_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Per-component distance under which vertices compare equal.
    pub vertex_tolerance: f64,
    /// Angular tolerance (radians) for stored-normal checks.
    pub normal_tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-4, 0.01).expect("valid config");
    /// assert_eq!(cfg.vertex_tolerance, 1.0e-4);
    /// ```
    pub fn new(vertex_tolerance: f64, normal_tolerance: f64) -> Result<Self, ConfigError> {
        if !(vertex_tolerance.is_finite() && vertex_tolerance > 0.0) {
            return Err(ConfigError::InvalidVertexTolerance(vertex_tolerance));
        }
        if !(normal_tolerance.is_finite() && normal_tolerance > 0.0) {
            return Err(ConfigError::InvalidNormalTolerance(normal_tolerance));
        }
        Ok(Self {
            vertex_tolerance,
            normal_tolerance,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            vertex_tolerance: VERTEX_TOLERANCE,
            normal_tolerance: NORMAL_ANGLE_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the vertex tolerance is zero, negative or not finite.
    InvalidVertexTolerance(f64),
    /// Raised when the normal tolerance is zero, negative or not finite.
    InvalidNormalTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVertexTolerance(value) => {
                write!(f, "vertex tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidNormalTolerance(value) => {
                write!(f, "normal tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
