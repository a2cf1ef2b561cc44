use super::*;
use crate::foundation::core::Platform;
use crate::host::navigation::{Route, StackNavigator};

fn mounted() -> ExhibitScreen {
    let mut s = ExhibitScreen::new(&GuideConfig::default()).unwrap();
    s.mount(Millis(1000)).unwrap();
    s
}

#[test]
fn video_stays_paused_until_delay() {
    let mut s = mounted();
    s.advance_to(Millis(2999));
    let f = s.frame(Millis(2999));
    assert!(f.media.paused);
    assert_eq!(f.video_gate, VideoGate::Waiting);
    assert!(f.media.looping && f.media.muted);
    s.advance_to(Millis(3000));
    assert!(!s.frame(Millis(3000)).media.paused);
    assert_eq!(s.pending_timers(), 0);
}

#[test]
fn scroll_drives_header() {
    let mut s = mounted();
    assert_eq!(s.frame(Millis(1000)).header.height, 300.0);
    s.on_scroll(105.0);
    let f = s.frame(Millis(1000));
    assert_eq!(f.header.overlay_opacity, 0.0);
    assert_eq!(f.header.height, 195.0);
    s.on_scroll(-30.0);
    assert_eq!(s.frame(Millis(1000)).header.height, 300.0);
    s.on_scroll(f64::INFINITY);
    assert_eq!(s.frame(Millis(1000)).scroll_offset, -30.0);
}

#[test]
fn android_header_collapses_to_seventy() {
    let cfg = GuideConfig {
        platform: Platform::Android,
        ..GuideConfig::default()
    };
    let mut s = ExhibitScreen::new(&cfg).unwrap();
    s.mount(Millis(0)).unwrap();
    s.on_scroll(500.0);
    assert_eq!(s.frame(Millis(0)).header.height, 70.0);
}

#[test]
fn media_events_toggle_loading_and_errors_are_kept() {
    let mut s = mounted();
    assert!(s.frame(Millis(1000)).loading);
    s.on_media_event(MediaEvent::Loaded);
    assert!(!s.frame(Millis(1000)).loading);
    s.on_media_event(MediaEvent::Error("network".to_owned()));
    assert!(s.media().last_error().is_some());
    s.unmount(Millis(1100));
    s.on_media_event(MediaEvent::LoadStart);
    assert!(!s.frame(Millis(1100)).loading);
}

#[test]
fn close_pops_the_detail_route() {
    let mut s = mounted();
    let mut nav = StackNavigator::new();
    nav.navigate_to(Route::ExhibitDetail);
    assert!(s.close(&mut nav));
    assert_eq!(nav.current(), Route::Home);
    assert!(!s.close(&mut nav));
}

#[test]
fn unmount_during_entrance_freezes_content_and_keeps_video_paused() {
    let mut s = mounted();
    s.advance_to(Millis(1400));
    let before = s.frame(Millis(1400)).content;
    s.unmount(Millis(1400));
    assert_eq!(s.pending_timers(), 0);
    s.advance_to(Millis(20_000));
    let f = s.frame(Millis(20_000));
    assert_eq!(f.content, before);
    assert!(f.media.paused);
    assert!(!s.is_mounted());
    assert_eq!(s.exhibit().title, "Alligator Gar");
}

#[test]
fn status_bar_is_light_only_while_mounted() {
    let mut s = ExhibitScreen::new(&GuideConfig::default()).unwrap();
    assert_eq!(s.status_bar(), StatusBarStyle::Dark);
    s.mount(Millis(0)).unwrap();
    assert_eq!(s.frame(Millis(0)).status_bar, StatusBarStyle::Light);
    s.unmount(Millis(10));
    assert_eq!(s.frame(Millis(10)).status_bar, StatusBarStyle::Dark);
}
