use super::*;

#[test]
fn new_debounce_is_idle() {
    let debounce = Debounce::new();
    assert!(!debounce.is_pending());
}

#[test]
fn schedule_then_fire_once() {
    let mut debounce = Debounce::new();
    let token = debounce.schedule();
    assert!(debounce.is_pending());
    assert!(debounce.fire(token));
    assert!(!debounce.is_pending());
    assert!(!debounce.fire(token));
}

#[test]
fn reschedule_invalidates_previous_token() {
    let mut debounce = Debounce::new();
    let first = debounce.schedule();
    let second = debounce.schedule();
    assert_ne!(first, second);
    assert!(!debounce.fire(first));
    assert!(debounce.is_pending());
    assert!(debounce.fire(second));
}

#[test]
fn cancel_suppresses_pending_fire() {
    let mut debounce = Debounce::new();
    let token = debounce.schedule();
    assert!(debounce.cancel());
    assert!(!debounce.fire(token));
}

#[test]
fn cancel_when_idle_reports_nothing_pending() {
    let mut debounce = Debounce::new();
    assert!(!debounce.cancel());
}

#[test]
fn schedule_after_cancel_issues_fresh_token() {
    let mut debounce = Debounce::new();
    let old = debounce.schedule();
    debounce.cancel();
    let new = debounce.schedule();
    assert!(!debounce.fire(old));
    assert!(debounce.fire(new));
}
