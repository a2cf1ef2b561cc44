use super::*;
use crate::host::scroll::ScrollLog;

fn started() -> GuideApp {
    let mut app = GuideApp::headless(GuideConfig::default()).unwrap();
    app.start(Millis(0)).unwrap();
    app
}

#[test]
fn inhabitants_opens_and_close_returns_home() {
    let mut app = started();
    assert_eq!(app.current_route(), Route::Home);
    assert!(app.tap_nav(Millis(500), "Inhabitants").unwrap());
    assert_eq!(app.current_route(), Route::ExhibitDetail);
    assert!(app.exhibit().is_some_and(ExhibitScreen::is_mounted));

    assert_eq!(app.status_bar(), StatusBarStyle::Light);

    assert!(app.close_exhibit(Millis(900)).unwrap());
    assert_eq!(app.status_bar(), StatusBarStyle::Dark);
    assert_eq!(app.current_route(), Route::Home);
    assert!(app.exhibit().is_none());
    assert!(!app.close_exhibit(Millis(950)).unwrap());
}

#[test]
fn delay_is_measured_from_exhibit_mount() {
    let mut app = started();
    let mut host = ScrollLog::new();
    app.tap_nav(Millis(500), "Inhabitants").unwrap();
    app.advance_to(Millis(2499), &mut host);
    assert!(app.exhibit().unwrap().frame(Millis(2499)).media.paused);
    app.advance_to(Millis(2500), &mut host);
    assert!(!app.exhibit().unwrap().frame(Millis(2500)).media.paused);
}

#[test]
fn home_keeps_running_under_detail() {
    let mut app = started();
    let mut host = ScrollLog::new();
    app.tap_nav(Millis(100), "Inhabitants").unwrap();
    app.advance_to(Millis(6000), &mut host);
    assert_eq!(app.home().carousel().active_index(), 2);
    app.exhibit_mut().unwrap().on_scroll(50.0);
    assert_eq!(app.exhibit().unwrap().frame(Millis(6000)).scroll_offset, 50.0);
}

#[test]
fn unmount_all_releases_everything() {
    let mut app = started();
    app.tap_nav(Millis(100), "Inhabitants").unwrap();
    app.unmount_all(Millis(200));
    assert!(app.exhibit().is_none());
    assert!(!app.home().is_mounted());
    assert_eq!(app.home().pending_timers(), 0);
    assert_eq!(app.current_route(), Route::Home);
    assert!(!app.home_mut().tap_nav("Inhabitants", &mut StackNavigator::new()));
}

#[test]
fn failed_exhibit_mount_leaves_app_on_home() {
    let mut app = started();
    app.config.entrance.offset_px = -5.0;

    assert!(app.tap_nav(Millis(100), "Inhabitants").is_err());
    assert_eq!(app.current_route(), Route::Home);
    assert!(app.exhibit().is_none());
    assert!(!app.close_exhibit(Millis(200)).unwrap());

    app.config.entrance.offset_px = 40.0;
    assert!(app.tap_nav(Millis(300), "Inhabitants").unwrap());
    assert!(app.exhibit().is_some_and(ExhibitScreen::is_mounted));
}

#[test]
fn invalid_entrance_style_is_rejected_up_front() {
    let mut cfg = GuideConfig::default();
    cfg.entrance.offset_px = f64::NAN;
    assert!(GuideApp::headless(cfg).is_err());
}
