use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::state::fake_api::{FakeApi, contributor, wall};

fn some(value: &str) -> Option<String> {
    Some(value.to_owned())
}

#[test]
fn token_wins_over_url_and_passcode() {
    let params = AccessParams::new(some("tok"), some("aB3dE6gH9k"), some("123456"));
    assert_eq!(params.path(), AccessPath::InviteToken("tok".to_owned()));
}

#[test]
fn url_and_passcode_select_direct_path() {
    let params = AccessParams::new(None, some("aB3dE6gH9k"), some(" 123456 "));
    assert_eq!(
        params.path(),
        AccessPath::UrlPasscode { wall_url: "aB3dE6gH9k".to_owned(), passcode: "123456".to_owned() }
    );
}

#[test]
fn blank_or_partial_params_fall_back_to_manual_entry() {
    assert_eq!(AccessParams::new(some("  "), None, None).path(), AccessPath::ManualEntry);
    assert_eq!(AccessParams::new(None, some("aB3dE6gH9k"), None).path(), AccessPath::ManualEntry);
    assert_eq!(AccessParams::default().path(), AccessPath::ManualEntry);
}

#[test]
fn invite_token_resolves_contributor_and_wall() {
    let api = FakeApi::default();
    let state = block_on(resolve(&api, AccessPath::InviteToken("tok".to_owned())));
    assert_eq!(
        state,
        AccessState::Granted {
            wall: WallHeader::from(&wall()),
            identity: Identity::Invited { contributor: contributor(), token: "tok".to_owned() },
        }
    );
    assert_eq!(api.calls(), vec!["verify_invite:tok", "fetch_wall:7"]);
}

#[test]
fn invalid_invite_token_is_denied_with_server_message() {
    let api = FakeApi {
        invite: Err(ApiError::NotFound("Invalid invite token".to_owned())),
        ..FakeApi::default()
    };
    let state = block_on(resolve(&api, AccessPath::InviteToken("bad".to_owned())));
    assert_eq!(state, AccessState::Denied("Invalid invite token".to_owned()));
    assert_eq!(api.calls(), vec!["verify_invite:bad"]);
}

#[test]
fn invite_with_unreadable_wall_degrades_to_untitled_header() {
    let api = FakeApi {
        wall: Err(ApiError::Unauthorized("Not authenticated".to_owned())),
        ..FakeApi::default()
    };
    let state = block_on(resolve(&api, AccessPath::InviteToken("tok".to_owned())));
    let AccessState::Granted { wall, identity } = state else {
        panic!("expected granted access");
    };
    assert_eq!(wall, WallHeader::untitled(7));
    assert!(!identity.requires_author_name());
    assert_eq!(identity.invited_email(), Some("friend@example.com"));
}

#[test]
fn direct_access_yields_pending_identity() {
    let api = FakeApi::default();
    let path = AccessPath::UrlPasscode { wall_url: "aB3dE6gH9k".to_owned(), passcode: "123456".to_owned() };
    let AccessState::Granted { identity, .. } = block_on(resolve(&api, path)) else {
        panic!("expected granted access");
    };
    assert_eq!(
        identity,
        Identity::PendingDirect { wall_id: 7, wall_url: "aB3dE6gH9k".to_owned(), passcode: "123456".to_owned() }
    );
    assert!(identity.requires_author_name());
}

#[test]
fn failed_direct_access_returns_to_manual_entry() {
    let api = FakeApi {
        verify: Err(ApiError::Unauthorized("Invalid passcode".to_owned())),
        ..FakeApi::default()
    };
    let path = AccessPath::UrlPasscode { wall_url: "aB3dE6gH9k".to_owned(), passcode: "000000".to_owned() };
    assert_eq!(
        block_on(resolve(&api, path)),
        AccessState::ManualEntry { error: Some("Invalid passcode".to_owned()) }
    );
}

#[test]
fn manual_entry_path_makes_no_calls() {
    let api = FakeApi::default();
    assert_eq!(block_on(resolve(&api, AccessPath::ManualEntry)), AccessState::ManualEntry { error: None });
    assert!(api.calls().is_empty());
}

#[test]
fn manual_entry_requires_both_fields() {
    assert_eq!(validate_manual_entry(" ", "123456"), Err("Please enter both wall URL and passcode"));
    assert_eq!(validate_manual_entry("aB3dE6gH9k", ""), Err("Please enter both wall URL and passcode"));
    assert_eq!(
        validate_manual_entry(" aB3dE6gH9k ", "123456"),
        Ok(AccessPath::UrlPasscode { wall_url: "aB3dE6gH9k".to_owned(), passcode: "123456".to_owned() })
    );
}
