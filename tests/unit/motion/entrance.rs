use super::*;

fn mounted() -> (EntranceSequencer, Scheduler) {
    let mut sched = Scheduler::new(Millis(0));
    let mut e = EntranceSequencer::new(EntranceStyle::default()).unwrap();
    e.mount(&mut sched);
    (e, sched)
}

fn run(e: &mut EntranceSequencer, sched: &mut Scheduler, t: u64) {
    for f in sched.advance_to(Millis(t)) {
        e.on_timer(f);
    }
}

#[test]
fn fade_and_slide_complete_together() {
    let (e, _sched) = mounted();
    assert_eq!(
        e.sample(Millis(0)),
        EntranceFrame {
            opacity: 0.0,
            vertical_offset: 40.0
        }
    );
    let mid = e.sample(Millis(400));
    assert!((mid.opacity - 0.5).abs() < 1e-9);
    assert!((mid.vertical_offset - 20.0).abs() < 1e-9);
    assert!(!e.is_complete(Millis(799)));
    assert!(e.is_complete(Millis(800)));
    assert_eq!(
        e.sample(Millis(5000)),
        EntranceFrame {
            opacity: 1.0,
            vertical_offset: 0.0
        }
    );
}

#[test]
fn video_gate_opens_once_at_delay() {
    let (mut e, mut sched) = mounted();
    run(&mut e, &mut sched, 1999);
    assert_eq!(e.gate(), VideoGate::Waiting);
    run(&mut e, &mut sched, 2000);
    assert!(e.video_playback_enabled());
    run(&mut e, &mut sched, 10_000);
    assert_eq!(e.gate(), VideoGate::Enabled);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn teardown_before_delay_cancels_everything() {
    let (mut e, mut sched) = mounted();
    run(&mut e, &mut sched, 300);
    let frozen = e.sample(Millis(300));
    e.teardown(&mut sched, Millis(300));
    e.teardown(&mut sched, Millis(400));
    assert_eq!(sched.pending(), 0);
    run(&mut e, &mut sched, 10_000);
    assert_eq!(e.gate(), VideoGate::Waiting);
    assert_eq!(e.sample(Millis(10_000)), frozen);
    assert!(!e.is_complete(Millis(10_000)));
}

#[test]
fn collected_expiry_after_teardown_is_ignored() {
    let (mut e, mut sched) = mounted();
    let in_flight = sched.advance_to(Millis(2000));
    e.teardown(&mut sched, Millis(2000));
    assert!(!e.on_timer(in_flight[0]));
    assert!(!e.video_playback_enabled());
}
