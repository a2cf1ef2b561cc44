use super::*;

#[test]
fn loading_indicator_follows_events() {
    let mut m = MediaState::new();
    assert!(m.is_loading());
    m.apply(MediaEvent::Loaded);
    assert!(!m.is_loading());
    m.apply(MediaEvent::LoadStart);
    assert!(m.is_loading());
    assert!(m.last_error().is_none());
}

#[test]
fn errors_are_recorded_not_fatal() {
    let mut m = MediaState::new();
    m.apply(MediaEvent::Error("404".to_owned()));
    assert!(!m.is_loading());
    let err = m.last_error().unwrap();
    assert!(matches!(err, GuideError::MediaLoad(info) if info == "404"));
    m.apply(MediaEvent::LoadStart);
    assert!(m.last_error().is_some());
}
