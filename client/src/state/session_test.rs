use super::*;
use crate::util::storage::MemoryStore;

fn owner() -> User {
    User {
        id: 1,
        email: "owner@example.com".to_owned(),
        full_name: "Olivia Owner".to_owned(),
        is_active: true,
        is_admin: false,
    }
}

fn auth() -> AuthResponse {
    AuthResponse { access_token: "tok-1".to_owned(), token_type: "bearer".to_owned(), user: owner() }
}

#[test]
fn pending_session_is_loading_and_anonymous() {
    let state = SessionState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn init_without_stored_session_is_signed_out() {
    let state = SessionState::init(&MemoryStore::default());
    assert_eq!(state, SessionState::default());
}

#[test]
fn establish_persists_and_survives_reload() {
    let store = MemoryStore::default();
    let mut state = SessionState::pending();
    state.establish(&store, auth());
    assert!(state.is_authenticated());
    assert!(!state.loading);

    let reloaded = SessionState::init(&store);
    assert_eq!(reloaded.token.as_deref(), Some("tok-1"));
    assert_eq!(reloaded.user, Some(owner()));
}

#[test]
fn teardown_clears_state_and_storage() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.establish(&store, auth());
    state.teardown(&store);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert_eq!(store.get(SESSION_KEY), None);
}

#[test]
fn api_client_uses_session_token() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    assert_eq!(state.api().token(), None);
    state.establish(&store, auth());
    assert_eq!(state.api().token(), Some("tok-1"));
    assert_eq!(state.display_name(), "Olivia Owner");
}
