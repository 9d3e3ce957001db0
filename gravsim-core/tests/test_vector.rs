//! Unit tests for vector operations

use glam::DVec2;
use gravsim_core::tests::test_helpers::{approx_eq, approx_eq_vec};
use gravsim_core::vector::{Vector2D, VectorExt};

#[test]
fn test_normalized_has_unit_length() {
    let vectors = [
        Vector2D::new(3.0, 4.0),
        Vector2D::new(-1.0e11, 2.5e10),
        Vector2D::new(1.0e-9, 0.0),
        Vector2D::new(0.0, -7.0),
    ];
    for v in vectors {
        let n = v.normalized();
        assert!(approx_eq(n.length(), 1.0, 1e-12), "{:?} -> {:?}", v, n);
        assert!(n.dot(v) > 0.0, "normalized vector must keep direction");
    }
}

#[test]
fn test_normalized_zero_is_zero() {
    let n = Vector2D::ZERO.normalized();
    assert_eq!(n, Vector2D::ZERO);
    assert!(!n.x.is_nan() && !n.y.is_nan());
}

#[test]
fn test_in_place_and_value_forms() {
    let a = Vector2D::new(1.0, 2.0);
    let b = Vector2D::new(3.0, -1.0);

    let sum = a + b;
    assert_eq!(a, Vector2D::new(1.0, 2.0), "value form must not mutate");
    assert_eq!(sum, Vector2D::new(4.0, 1.0));

    let mut c = a;
    c += b;
    c *= 2.0;
    assert_eq!(c, Vector2D::new(8.0, 2.0));
    assert_eq!(a, Vector2D::new(1.0, 2.0), "copy must be independent");

    assert_eq!(a - b, Vector2D::new(-2.0, 3.0));
    assert!(approx_eq(a.dot(b), 1.0, 1e-12));
}

#[test]
fn test_length() {
    assert!(approx_eq(Vector2D::new(3.0, 4.0).length(), 5.0, 1e-12));
    assert_eq!(Vector2D::ZERO.length(), 0.0);
}

#[test]
fn test_rotated_degrees() {
    let v = Vector2D::new(1.0, 0.0);
    assert!(approx_eq_vec(v.rotated_degrees(90.0), DVec2::new(0.0, 1.0), 1e-12));
    assert!(approx_eq_vec(v.rotated_degrees(180.0), DVec2::new(-1.0, 0.0), 1e-12));
    assert!(approx_eq_vec(v.rotated_degrees(-90.0), DVec2::new(0.0, -1.0), 1e-12));

    let w = Vector2D::new(2.0, 3.0);
    assert!(approx_eq(w.rotated_degrees(37.0).length(), w.length(), 1e-12));
}

#[test]
fn test_angle_to_degrees_signed() {
    let x = Vector2D::new(1.0, 0.0);
    let y = Vector2D::new(0.0, 1.0);
    assert!(approx_eq(x.angle_to_degrees(y), 90.0, 1e-9));
    assert!(approx_eq(y.angle_to_degrees(x), -90.0, 1e-9));
}

#[test]
fn test_angle_to_degrees_not_wrapped() {
    // polar angles 135 and -135 degrees
    let a = Vector2D::new(-1.0, 1.0);
    let b = Vector2D::new(-1.0, -1.0);
    assert!(approx_eq(a.angle_to_degrees(b), -270.0, 1e-9));
    assert!(approx_eq(b.angle_to_degrees(a), 270.0, 1e-9));
}
