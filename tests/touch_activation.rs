use pointer_activation::activation::TouchActivation;
use pointer_activation::events::TouchInput;
use pointer_activation::geometry::Point;

use mock_host::{HostCall, RecordingHost};

const P: Point = Point::new(40.0, 50.0);

fn event() -> TouchInput {
    TouchInput::at(40.0, 50.0)
}

#[test]
fn tap_start_marks_touched_and_starts_timer() {
    let mut host = RecordingHost::new();
    TouchActivation::Tap.touch_start(&mut host, &TouchInput::empty());

    assert!(host.flags.touched);
    assert_eq!(host.calls, vec![HostCall::StartTapTimer]);
}

#[test]
fn tap_end_in_time_toggles() {
    let mut host = RecordingHost::new();
    host.flags.touched = true;
    let mut e = event();
    TouchActivation::Tap.touch_end(&mut host, &mut e);

    assert!(e.default_prevented());
    assert_eq!(host.count(|c| *c == HostCall::ClearTapTimer), 1);
    assert_eq!(host.toggles(), vec![P]);
    assert!(!host.flags.touched);
    assert!(!host.flags.tap_timed_out);
}

#[test]
fn tap_end_after_timeout_only_clears_flag() {
    let mut host = RecordingHost::new();
    host.flags.tap_timed_out = true;
    let mut e = TouchInput::empty();
    TouchActivation::Tap.touch_end(&mut host, &mut e);

    assert!(host.calls.is_empty());
    assert!(!host.flags.tap_timed_out);
}

#[test]
fn move_does_nothing_when_inactive() {
    for mode in [
        TouchActivation::Tap,
        TouchActivation::DoubleTap,
        TouchActivation::Touch,
        TouchActivation::LongTouch,
    ] {
        let mut host = RecordingHost::new();
        let mut e = event();
        mode.touch_move(&mut host, &mut e);
        assert_eq!(host.count(|c| matches!(c, HostCall::SetPosition(..))), 0);
        assert!(!e.default_prevented(), "{mode:?}");
    }
}

#[test]
fn move_follows_contact_when_active() {
    for mode in [
        TouchActivation::Tap,
        TouchActivation::DoubleTap,
        TouchActivation::Touch,
    ] {
        let mut host = RecordingHost::new();
        host.active = true;
        host.flags.touched = true;
        let mut e = event();
        mode.touch_move(&mut host, &mut e);
        assert!(e.default_prevented());
        assert_eq!(host.calls, vec![HostCall::SetPosition(P, true)], "{mode:?}");
    }
}

#[test]
fn move_respects_non_cancelable_events() {
    let mut host = RecordingHost::new();
    host.active = true;
    let mut e = event().with_cancelable(false);
    TouchActivation::Tap.touch_move(&mut host, &mut e);

    assert!(!e.default_prevented());
    assert_eq!(host.calls, vec![HostCall::SetPosition(P, true)]);
}

#[test]
fn cancel_always_deactivates() {
    for mode in [
        TouchActivation::Tap,
        TouchActivation::DoubleTap,
        TouchActivation::Touch,
        TouchActivation::LongTouch,
    ] {
        let mut host = RecordingHost::new();
        mode.touch_cancel(&mut host);
        assert_eq!(host.calls, vec![HostCall::Deactivate], "{mode:?}");
    }
}

#[test]
fn double_tap_first_end_arms_double_tap_timer() {
    let mut host = RecordingHost::new();
    TouchActivation::DoubleTap.touch_start(&mut host, &TouchInput::empty());
    TouchActivation::DoubleTap.touch_end(&mut host, &mut TouchInput::empty());

    assert!(host.flags.tapped);
    assert!(!host.flags.touched);
    assert!(!host.flags.double_tap_timed_out);
    assert_eq!(
        host.calls,
        vec![
            HostCall::StartTapTimer,
            HostCall::ClearTapTimer,
            HostCall::StartDoubleTapTimer
        ]
    );
}

#[test]
fn double_tap_first_end_after_timeout_is_dropped() {
    let mut host = RecordingHost::new();
    host.flags.touched = true;
    host.flags.tap_timed_out = true;
    TouchActivation::DoubleTap.touch_end(&mut host, &mut TouchInput::empty());

    assert!(!host.flags.tap_timed_out);
    assert!(!host.flags.tapped);
    assert!(host.calls.is_empty());
}

#[test]
fn double_tap_second_end_toggles_once() {
    let mut host = RecordingHost::new();
    let mode = TouchActivation::DoubleTap;
    mode.touch_start(&mut host, &event());
    mode.touch_end(&mut host, &mut event());
    mode.touch_start(&mut host, &event());
    mode.touch_end(&mut host, &mut event());

    assert_eq!(host.toggles(), vec![P]);
    assert_eq!(host.count(|c| *c == HostCall::ClearDoubleTapTimer), 1);
    assert!(!host.flags.touched);
    assert!(!host.flags.tapped);
}

#[test]
fn double_tap_second_end_after_window_does_not_toggle() {
    let mut host = RecordingHost::new();
    let mode = TouchActivation::DoubleTap;
    mode.touch_start(&mut host, &event());
    mode.touch_end(&mut host, &mut event());
    host.flags.double_tap_timed_out = true;
    mode.touch_start(&mut host, &event());
    mode.touch_end(&mut host, &mut event());

    assert!(host.toggles().is_empty());
    assert!(!host.flags.touched);
    assert!(!host.flags.tapped);
}

#[test]
fn touch_start_activates_and_end_deactivates() {
    let mut host = RecordingHost::new();
    TouchActivation::Touch.touch_start(&mut host, &event());
    assert!(host.flags.touched);

    let mut e = event();
    TouchActivation::Touch.touch_end(&mut host, &mut e);
    assert!(e.default_prevented());
    assert!(!host.flags.touched);
    assert_eq!(host.calls, vec![HostCall::Activate(P), HostCall::Deactivate]);
}

#[test]
fn touch_end_keeps_default_when_not_cancelable() {
    let mut host = RecordingHost::new();
    let mut e = event().with_cancelable(false);
    TouchActivation::Touch.touch_end(&mut host, &mut e);
    assert!(!e.default_prevented());
}

#[test]
fn long_touch_start_records_baseline_and_restarts_timer() {
    let mut host = RecordingHost::new();
    TouchActivation::LongTouch.touch_start(&mut host, &event());

    assert!(host.flags.touched);
    assert_eq!(host.flags.long_touch_start_ref, Some(90.0));
    assert_eq!(
        host.calls,
        vec![HostCall::ClearLongTouchTimer, HostCall::StartLongTouchTimer(P)]
    );
}

#[test]
fn long_touch_end_only_releases() {
    let mut host = RecordingHost::new();
    host.flags.touched = true;
    let mut e = event();
    TouchActivation::LongTouch.touch_end(&mut host, &mut e);

    assert!(e.default_prevented());
    assert!(!host.flags.touched);
    assert!(host.calls.is_empty());
}

#[test]
fn long_touch_move_within_limit_follows_contact() {
    let mut host = RecordingHost::with_limits(5.0, 10.0);
    host.active = true;
    host.flags.touched = true;
    host.flags.long_touch_start_ref = Some(95.0);
    let mut e = event();
    TouchActivation::LongTouch.touch_move(&mut host, &mut e);

    assert!(e.default_prevented());
    assert_eq!(host.calls, vec![HostCall::SetPosition(P, true)]);
}

#[test]
fn long_touch_move_beyond_limit_cancels_timer_only() {
    for active in [false, true] {
        let mut host = RecordingHost::with_limits(5.0, 10.0);
        host.active = active;
        host.flags.touched = true;
        host.flags.long_touch_start_ref = Some(200.0);
        let mut e = event();
        TouchActivation::LongTouch.touch_move(&mut host, &mut e);

        assert_eq!(host.calls, vec![HostCall::ClearLongTouchTimer]);
        assert!(!e.default_prevented());
    }
}
