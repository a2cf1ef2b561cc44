use super::*;

#[test]
fn ios_reference_points() {
    let h = HeaderInterpolator::for_platform(Platform::Ios);
    assert_eq!(h.scroll_distance(), 210.0);
    assert_eq!(
        h.frame(0.0),
        HeaderFrame {
            height: 300.0,
            overlay_opacity: 1.0,
            title_scale: 1.0
        }
    );
    assert_eq!(h.header_height(210.0), 90.0);
    assert_eq!(h.title_scale(210.0), 0.8);
    assert_eq!(h.overlay_opacity(105.0), 0.0);
}

#[test]
fn android_collapses_further() {
    let h = HeaderInterpolator::for_platform(Platform::Android);
    assert_eq!(h.scroll_distance(), 230.0);
    assert_eq!(h.header_height(1000.0), 70.0);
    assert_eq!(h.overlay_opacity(115.0), 0.0);
}

#[test]
fn outputs_are_monotonic_and_saturate() {
    let h = HeaderInterpolator::for_platform(Platform::Ios);
    let mut prev = h.frame(-10.0);
    let mut offset = -10.0;
    while offset <= 400.0 {
        let f = h.frame(offset);
        assert!(f.height <= prev.height);
        assert!(f.overlay_opacity <= prev.overlay_opacity);
        assert!(f.title_scale <= prev.title_scale);
        assert_eq!(f, h.frame(offset.clamp(0.0, 210.0)));
        prev = f;
        offset += 2.5;
    }
}

#[test]
fn rejects_inverted_heights() {
    assert!(HeaderInterpolator::new(90.0, 300.0).is_err());
    assert!(HeaderInterpolator::new(100.0, 100.0).is_err());
    assert!(HeaderInterpolator::new(300.0, -1.0).is_err());
    let h = HeaderInterpolator::new(200.0, 50.0).unwrap();
    assert_eq!(h.header_height(75.0), 125.0);
}
