use super::*;

#[test]
fn curves_pin_their_endpoints() {
    for ease in [Ease::Linear, Ease::InOutQuad, Ease::EaseInOut] {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(4.0), 1.0, "{ease:?}");
    }
}

#[test]
fn ease_in_out_matches_reference_bezier() {
    let e = Ease::EaseInOut;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
    // Reference values for cubic-bezier(0.42, 0, 0.58, 1).
    assert!((e.apply(0.25) - 0.129_162).abs() < 1e-4);
    assert!((e.apply(0.75) - 0.870_838).abs() < 1e-4);
    for i in 1..100 {
        let t = f64::from(i) / 100.0;
        assert!(e.apply(t) >= e.apply(t - 0.01), "not monotonic at {t}");
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-9, "asymmetric at {t}");
    }
}

#[test]
fn default_is_the_stock_ease_in_out() {
    assert_eq!(Ease::default(), Ease::EaseInOut);
    assert_eq!(Ease::InOutQuad.apply(0.25), 0.125);
    let json = serde_json::to_string(&Ease::EaseInOut).unwrap();
    assert_eq!(json, "\"ease_in_out\"");
}
