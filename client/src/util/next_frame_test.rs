use super::*;

#[test]
fn first_claim_succeeds_and_second_coalesces() {
    let gate = FrameGate::default();
    assert!(gate.try_claim());
    assert!(!gate.try_claim());
    assert!(gate.is_pending());
}

#[test]
fn release_allows_a_new_claim() {
    let gate = FrameGate::default();
    assert!(gate.try_claim());
    gate.release();
    assert!(!gate.is_pending());
    assert!(gate.try_claim());
}

#[test]
fn fire_clears_claim_before_running_work() {
    let gate = FrameGate::default();
    assert!(gate.try_claim());
    let seen = Cell::new(true);
    gate.fire(|| seen.set(gate.is_pending()));
    assert!(!seen.get());
    assert!(!gate.is_pending());
}

#[test]
fn work_can_claim_the_following_frame() {
    // A fit that triggers a resize schedules the next frame from inside this one.
    let gate = FrameGate::default();
    assert!(gate.try_claim());
    let reclaimed = Cell::new(false);
    gate.fire(|| reclaimed.set(gate.try_claim()));
    assert!(reclaimed.get());
    assert!(gate.is_pending());

    gate.fire(|| {});
    assert!(!gate.is_pending());
    assert!(gate.try_claim());
}

#[test]
fn clones_share_one_claim() {
    let gate = FrameGate::default();
    let other = gate.clone();
    assert!(gate.try_claim());
    assert!(!other.try_claim());
    other.release();
    assert!(gate.try_claim());
}
