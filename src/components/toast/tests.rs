use super::*;

#[test]
fn the_current_timer_clears_its_own_toast() {
    let mut guard = ToastGuard::default();
    guard.arm();
    assert!(guard.may_clear(guard.token()));
}

#[test]
fn a_timer_from_an_earlier_toast_may_not_clear_a_later_one() {
    let mut guard = ToastGuard::default();
    guard.arm();
    let first = guard.token();

    // second toast raised while the first timer is still pending
    guard.arm();
    let second = guard.token();

    assert!(!guard.may_clear(first));
    assert!(guard.may_clear(second));
}
