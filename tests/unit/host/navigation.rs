use super::*;

#[test]
fn push_pop_and_root_guard() {
    let mut nav = StackNavigator::new();
    assert_eq!(nav.current(), Route::Home);
    assert!(!nav.go_back());

    nav.navigate_to(Route::ExhibitDetail);
    nav.navigate_to(Route::ExhibitDetail);
    assert_eq!(nav.depth(), 2);
    assert_eq!(nav.current(), Route::ExhibitDetail);

    assert!(nav.go_back());
    assert_eq!(nav.current(), Route::Home);
    assert_eq!(nav.depth(), 1);
}

#[test]
fn route_names() {
    assert_eq!(Route::Home.name(), "Home");
    assert_eq!(Route::ExhibitDetail.name(), "ExhibitDetail");
}
