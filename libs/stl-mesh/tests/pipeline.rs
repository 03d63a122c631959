//! End-to-end tests: parse, transform, validate, write back.

use std::f64::consts::FRAC_PI_4;

use stl_mesh::{io, Solid, SolidConfig, StlError, TriangleErrors, ValidationSummary, Vec3};

/// Square pyramid on the xy-plane, closed and wound outward.
const PYRAMID: &str = "solid pyramid
  facet normal 0 0 -1
    outer loop
      vertex 0 0 0
      vertex 0 2 0
      vertex 2 2 0
    endloop
  endfacet
  facet normal 0 0 -1
    outer loop
      vertex 0 0 0
      vertex 2 2 0
      vertex 2 0 0
    endloop
  endfacet
  facet normal 0 -0.707107 0.707107
    outer loop
      vertex 0 0 0
      vertex 2 0 0
      vertex 1 1 1
    endloop
  endfacet
  facet normal 0.707107 0 0.707107
    outer loop
      vertex 2 0 0
      vertex 2 2 0
      vertex 1 1 1
    endloop
  endfacet
  facet normal 0 0.707107 0.707107
    outer loop
      vertex 2 2 0
      vertex 0 2 0
      vertex 1 1 1
    endloop
  endfacet
  facet normal -0.707107 0 0.707107
    outer loop
      vertex 0 2 0
      vertex 0 0 0
      vertex 1 1 1
    endloop
  endfacet
endsolid pyramid
";

fn pyramid() -> Solid {
    io::read_solid(PYRAMID.as_bytes()).unwrap()
}

#[test]
fn pyramid_is_closed_with_accurate_normals() {
    let solid = pyramid();
    assert_eq!(solid.name, "pyramid");
    assert_eq!(solid.triangle_count(), 6);
    assert!(solid.check_normals(1e-3).is_empty());

    let summary = ValidationSummary::from_report(&solid.validate());
    assert!(summary.is_closed_manifold(), "{summary}");
    assert_eq!(summary.triangle_count, 6);
}

#[test]
fn transform_then_write_binary_and_validate() {
    let mut solid = pyramid();
    solid.rotate(Vec3::new(1.0, 1.0, 0.0), Vec3::Z, FRAC_PI_4);
    solid.stretch(Vec3::new(1.0, 1.0, -3.0));
    solid.translate(Vec3::new(10.0, 0.0, 3.0));
    solid.is_ascii = false;

    let mut bytes = Vec::new();
    io::write_solid(&solid, &mut bytes).unwrap();
    let back = io::read_solid(&bytes[..]).unwrap();

    assert_eq!(back.triangle_count(), 6);
    assert!(back.validate().iter().all(Option::is_none));
    // Stored normals went through f32
    assert!(back.check_normals(1e-5).is_empty());

    let m = back.measure();
    assert!((m.min.z - 0.0).abs() < 1e-6);
    assert!((m.max.z - 3.0).abs() < 1e-6);
}

#[test]
fn opened_pyramid_reports_missing_base() {
    let mut solid = pyramid();
    solid.triangles.drain(..2);

    let report = solid.validate();
    let summary = ValidationSummary::from_report(&report);
    assert_eq!(summary.defective_triangle_count, 4);
    assert_eq!(summary.open_edge_count, 4);
    assert_eq!(summary.overshared_edge_count, 0);

    let text = summary.to_string();
    assert!(text.contains("Closed manifold: No"));
    assert!(text.contains("Edges without counter-edge: 4"));

    // The base edge of every side facet is slot 0
    for errors in report.iter().flatten() {
        let defects: Vec<_> = errors.edge_defects().map(|(slot, _)| slot).collect();
        assert_eq!(defects, vec![0]);
    }
}

#[test]
fn report_serializes_for_reporting_layers() {
    let mut solid = pyramid();
    solid.triangles.pop();
    let report = solid.validate();

    let json = serde_json::to_string(&report).unwrap();
    let back: Vec<Option<TriangleErrors>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);

    let summary = ValidationSummary::from_report(&report);
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["open_edge_count"], 3);
}

#[test]
fn config_controls_welding() {
    let mut solid = pyramid();
    solid.triangles[2].vertices[2] += Vec3::new(0.0, 0.0, 5e-4);

    assert!(solid.validate().iter().any(Option::is_some));
    let config = SolidConfig::new(1e-3, 1e-2).unwrap();
    assert!(solid.validate_with(&config).iter().all(Option::is_none));
    assert!(SolidConfig::new(-1.0, 1e-2).is_err());
}

#[test]
fn malformed_ascii_is_reported() {
    let text = PYRAMID.replace("outer loop", "outer");
    let err = io::read_solid(text.as_bytes()).unwrap_err();
    match err {
        StlError::UnexpectedToken { line, found, .. } => {
            assert_eq!(line, 4);
            assert_eq!(found, "vertex");
        }
        other => panic!("expected UnexpectedToken, got {other}"),
    }
}
