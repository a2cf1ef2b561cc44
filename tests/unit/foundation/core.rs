use super::*;

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(10).after(5), Millis(15));
    assert_eq!(Millis(u64::MAX).after(1), Millis(u64::MAX));
    assert_eq!(Millis(10).since(Millis(4)), 6);
    assert_eq!(Millis(4).since(Millis(10)), 0);
}

#[test]
fn hex_colors_parse_in_all_widths() {
    assert_eq!(Rgba8::from_hex("#0066cc").unwrap(), Rgba8::rgb(0x00, 0x66, 0xcc));
    assert_eq!(Rgba8::from_hex("666").unwrap(), Rgba8::rgb(0x66, 0x66, 0x66));
    let c = Rgba8::from_hex("#FF572280").unwrap();
    assert_eq!(c.a, 0x80);
    assert_eq!(c.to_hex(), "#ff572280");
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn colors_deserialize_from_hex_or_object() {
    let c: Rgba8 = serde_json::from_str("\"#007AFF\"").unwrap();
    assert_eq!(c, Rgba8::rgb(0, 0x7a, 0xff));
    let c: Rgba8 = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
    assert_eq!(c, Rgba8::rgb(1, 2, 3));
}

#[test]
fn header_min_height_depends_on_platform() {
    assert_eq!(Platform::Ios.header_min_height(), 90.0);
    assert_eq!(Platform::Android.header_min_height(), 70.0);
    assert!(!Lifecycle::default().is_mounted());
}
