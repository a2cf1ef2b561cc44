use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GuideError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GuideError::media_load("x")
            .to_string()
            .contains("media load error:")
    );
    assert!(
        GuideError::animation_playback("x")
            .to_string()
            .contains("animation playback error:")
    );
    assert!(
        GuideError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GuideError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
