//! Kernel-level configuration building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so geometry components can
//! stay decoupled from literal constants.

use config::constants::{ConfigError, GlobalConfig, NORMAL_ANGLE_TOLERANCE, VERTEX_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Tolerances used by validation and normal checks.
///
/// Deserialization goes through [`SolidConfig::new`], so loaded values are
/// validated like explicit ones.
///
/// # Examples
/// ```
/// use stl_mesh::SolidConfig;
/// let cfg = SolidConfig::default();
/// assert!(cfg.vertex_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSolidConfig")]
pub struct SolidConfig {
    /// Per-component distance under which two vertices are the same point.
    pub vertex_tolerance: f64,
    /// Angle (radians) a stored normal may deviate from the computed one.
    pub normal_tolerance: f64,
}

impl SolidConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use stl_mesh::SolidConfig;
    /// let cfg = SolidConfig::new(1.0e-4, 0.01).unwrap();
    /// assert_eq!(cfg.vertex_tolerance, 1.0e-4);
    /// ```
    pub fn new(vertex_tolerance: f64, normal_tolerance: f64) -> Result<Self, SolidConfigError> {
        GlobalConfig::new(vertex_tolerance, normal_tolerance)
            .map(Self::from)
            .map_err(SolidConfigError)
    }
}

/// Unvalidated field set read by serde.
#[derive(Deserialize)]
struct RawSolidConfig {
    vertex_tolerance: f64,
    normal_tolerance: f64,
}

impl TryFrom<RawSolidConfig> for SolidConfig {
    type Error = SolidConfigError;

    fn try_from(raw: RawSolidConfig) -> Result<Self, Self::Error> {
        Self::new(raw.vertex_tolerance, raw.normal_tolerance)
    }
}

impl From<GlobalConfig> for SolidConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            vertex_tolerance: cfg.vertex_tolerance,
            normal_tolerance: cfg.normal_tolerance,
        }
    }
}

impl Default for SolidConfig {
    fn default() -> Self {
        Self {
            vertex_tolerance: VERTEX_TOLERANCE,
            normal_tolerance: NORMAL_ANGLE_TOLERANCE,
        }
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, PartialEq)]
pub struct SolidConfigError(ConfigError);

impl std::fmt::Display for SolidConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for SolidConfigError {}
