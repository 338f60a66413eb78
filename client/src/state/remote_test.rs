use super::*;

#[test]
fn remote_default_is_loading() {
    let state: Remote<u32> = Remote::default();
    assert!(state.is_loading());
    assert_eq!(state.ready(), None);
    assert_eq!(state.error(), None);
}

#[test]
fn from_result_ok_is_ready() {
    let state = Remote::from_result(Ok::<_, String>(7));
    assert_eq!(state.ready(), Some(&7));
    assert!(!state.is_loading());
}

#[test]
fn from_result_err_keeps_display_message() {
    let state: Remote<u32> = Remote::from_result(Err("Not found"));
    assert_eq!(state.error(), Some("Not found"));
}
