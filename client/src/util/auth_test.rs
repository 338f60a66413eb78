use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState::Authenticated { user: User { name: Some("Alice".to_owned()), ..User::default() } }
}

#[test]
fn guard_redirects_anonymous_to_login() {
    assert_eq!(guard(&AuthState::Anonymous, "/rides/live"), GuardDecision::Redirect(LOGIN_PATH));
    assert_eq!(guard(&AuthState::Anonymous, "/"), GuardDecision::Redirect("/login"));
}

#[test]
fn guard_renders_target_when_authenticated() {
    assert_eq!(guard(&signed_in(), "/rides/live"), GuardDecision::Render("/rides/live".to_owned()));
}

#[test]
fn guard_follows_state_changes() {
    let mut state = signed_in();
    assert!(matches!(guard(&state, "/"), GuardDecision::Render(_)));
    state = AuthState::Anonymous;
    assert_eq!(guard(&state, "/"), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn login_redirect_only_when_authenticated() {
    assert_eq!(login_redirect(&AuthState::Anonymous), None);
    assert_eq!(login_redirect(&signed_in()), Some(HOME_PATH));
}
