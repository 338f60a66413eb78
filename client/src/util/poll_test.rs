#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn started_handle_is_active() {
    let handle = PollHandle::start(1_000, || {});
    assert!(handle.is_active());
}

#[test]
fn cancel_deactivates_and_is_idempotent() {
    let mut handle = PollHandle::start(1_000, || {});
    handle.cancel();
    assert!(!handle.is_active());
    handle.cancel();
    assert!(!handle.is_active());
}

#[test]
fn drop_releases_the_poll() {
    let handle = PollHandle::start(1_000, || {});
    let alive = handle.alive.clone();
    drop(handle);
    assert!(!alive.load(Ordering::Relaxed));
}
