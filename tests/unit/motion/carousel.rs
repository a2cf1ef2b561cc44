use super::*;
use crate::foundation::core::Millis;
use crate::host::scroll::{ScrollCommand, ScrollLog};

const WIDTH: f64 = 390.0;

fn mounted(slides: usize) -> (CarouselController, Scheduler) {
    let mut sched = Scheduler::new(Millis(0));
    let mut c = CarouselController::new(slides, WIDTH).unwrap();
    c.start(&mut sched, 3000).unwrap();
    (c, sched)
}

fn run(c: &mut CarouselController, sched: &mut Scheduler, t: u64, host: &mut ScrollLog) {
    for f in sched.advance_to(Millis(t)) {
        c.on_timer(f, &mut *host);
    }
}

#[test]
fn rejects_empty_carousel_and_bad_width() {
    assert!(CarouselController::new(0, WIDTH).is_err());
    assert!(CarouselController::new(3, 0.0).is_err());
    assert!(CarouselController::new(3, f64::NAN).is_err());
}

#[test]
fn ticks_advance_modulo_slide_count() {
    let (mut c, mut sched) = mounted(3);
    let mut host = ScrollLog::new();
    for n in 1..=7u64 {
        run(&mut c, &mut sched, n * 3000, &mut host);
        assert_eq!(c.active_index(), (n as usize) % 3);
    }
    assert_eq!(host.commands().len(), 7);
    assert_eq!(
        host.last(),
        Some(ScrollCommand {
            x: WIDTH,
            animated: true
        })
    );
}

#[test]
fn touch_start_rejects_collected_expiry() {
    let (mut c, mut sched) = mounted(3);
    let mut host = ScrollLog::new();
    let in_flight = sched.advance_to(Millis(3000));
    assert_eq!(in_flight.len(), 1);
    c.on_user_touch_start(&mut sched);
    assert!(!c.on_timer(in_flight[0], &mut host));
    assert_eq!(c.active_index(), 0);
    assert!(host.commands().is_empty());
    assert!(!c.is_running());
}

#[test]
fn touch_end_restarts_full_interval() {
    let (mut c, mut sched) = mounted(3);
    let mut host = ScrollLog::new();
    run(&mut c, &mut sched, 2900, &mut host);
    c.on_user_touch_start(&mut sched);
    c.on_user_touch_start(&mut sched);
    run(&mut c, &mut sched, 3100, &mut host);
    c.on_user_touch_end(&mut sched).unwrap();
    run(&mut c, &mut sched, 6099, &mut host);
    assert_eq!(c.active_index(), 0);
    run(&mut c, &mut sched, 6100, &mut host);
    assert_eq!(c.active_index(), 1);
}

#[test]
fn settled_scroll_overrides_timer_target() {
    let (mut c, mut sched) = mounted(3);
    let mut host = ScrollLog::new();
    run(&mut c, &mut sched, 3000, &mut host);
    assert_eq!(c.active_index(), 1);
    c.on_manual_scroll_settled(2.0 * WIDTH + 40.0);
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.pagination(), vec![false, false, true]);
    c.on_manual_scroll_settled(WIDTH * 0.4);
    assert_eq!(c.active_index(), 0);
    c.on_manual_scroll_settled(-120.0);
    assert_eq!(c.active_index(), 0);
    c.on_manual_scroll_settled(WIDTH * 10.0);
    assert_eq!(c.active_index(), 2);
}

#[test]
fn stop_is_idempotent_and_freezes_state() {
    let (mut c, mut sched) = mounted(3);
    let mut host = ScrollLog::new();
    run(&mut c, &mut sched, 3000, &mut host);
    c.stop(&mut sched);
    c.stop(&mut sched);
    assert_eq!(sched.pending(), 0);
    run(&mut c, &mut sched, 60_000, &mut host);
    c.advance(&mut host);
    c.on_manual_scroll_settled(0.0);
    c.on_user_touch_end(&mut sched).unwrap();
    assert_eq!(c.active_index(), 1);
    assert_eq!(sched.pending(), 0);
    assert_eq!(host.commands().len(), 1);
}

#[test]
fn single_slide_wraps_onto_itself() {
    let (mut c, mut sched) = mounted(1);
    let mut host = ScrollLog::new();
    run(&mut c, &mut sched, 9000, &mut host);
    assert_eq!(c.active_index(), 0);
    assert!(host.commands().iter().all(|cmd| cmd.x == 0.0));
}
