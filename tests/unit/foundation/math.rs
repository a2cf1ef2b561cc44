use super::*;

#[test]
fn interpolates_inside_the_range() {
    assert_eq!(lerp_clamped(105.0, (0.0, 210.0), (300.0, 90.0)), 195.0);
    assert_eq!(lerp_clamped(0.5, (0.0, 1.0), (10.0, 20.0)), 15.0);
}

#[test]
fn saturates_at_endpoints() {
    assert_eq!(lerp_clamped(-50.0, (0.0, 210.0), (300.0, 90.0)), 300.0);
    assert_eq!(lerp_clamped(1e9, (0.0, 210.0), (300.0, 90.0)), 90.0);
    assert_eq!(lerp_clamped(f64::NAN, (0.0, 1.0), (4.0, 8.0)), 4.0);
}

#[test]
fn reversed_and_degenerate_inputs() {
    assert_eq!(lerp_clamped(0.6, (1.0, 0.6), (0.0, 1.0)), 1.0);
    assert_eq!(lerp_clamped(3.0, (2.0, 2.0), (7.0, 9.0)), 7.0);
    assert!((unlerp_clamped(0.8, 0.6, 1.0) - 0.5).abs() < 1e-9);
}

#[test]
fn infinities_saturate_at_the_matching_end() {
    assert_eq!(lerp_clamped(f64::INFINITY, (0.0, 210.0), (300.0, 90.0)), 90.0);
    assert_eq!(lerp_clamped(f64::NEG_INFINITY, (0.0, 210.0), (300.0, 90.0)), 300.0);
    assert_eq!(lerp_clamped(f64::INFINITY, (1.0, 0.6), (0.0, 1.0)), 0.0);
}
