use super::*;
use crate::net::types::User;

#[test]
fn should_redirect_unauth_when_not_loading_and_signed_out() {
    let state = SessionState { token: None, user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&SessionState::pending()));
}

fn signed_in() -> SessionState {
    SessionState {
        token: Some("tok".to_owned()),
        user: Some(User {
            id: 1,
            email: "owner@example.com".to_owned(),
            full_name: "Owner".to_owned(),
            is_active: true,
            is_admin: false,
        }),
        loading: false,
    }
}

#[test]
fn should_not_redirect_when_session_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn forbidden_wall_keeps_the_session() {
    let session = RwSignal::new(signed_in());
    let err = ApiError::from_response(403, r#"{"detail":"Not authorized to access this wall"}"#, "x");
    expire_on_unauthorized(session, &err);
    let state = session.get_untracked();
    assert!(state.is_authenticated());
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn rejected_token_ends_the_session() {
    let session = RwSignal::new(signed_in());
    let err = ApiError::from_response(401, r#"{"detail":"Could not validate credentials"}"#, "x");
    expire_on_unauthorized(session, &err);
    let state = session.get_untracked();
    assert!(!state.is_authenticated());
    assert!(should_redirect_unauth(&state));
}
