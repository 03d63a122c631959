//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.normal_tolerance > 0.0);
/// ```
#[test]
fn test_default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.vertex_tolerance > 0.0);
    assert!(cfg.normal_tolerance > 0.0);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, 0.01).is_err());
/// ```
#[test]
fn test_new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 0.01).unwrap_err(),
        ConfigError::InvalidVertexTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-6, -1.0).unwrap_err(),
        ConfigError::InvalidNormalTolerance(-1.0)
    );
    assert!(GlobalConfig::new(f64::INFINITY, 0.01).is_err());
    assert!(GlobalConfig::new(1.0e-6, f64::NAN).is_err());
}

#[test]
fn test_error_messages_name_the_field() {
    let err = ConfigError::InvalidNormalTolerance(-2.0);
    assert!(err.to_string().contains("normal tolerance"));
    assert!(err.to_string().contains("-2"));
}
