use super::*;
use crate::state::fake_api::{contributor, wall};

#[test]
fn parse_wall_id_accepts_positive_integers_only() {
    assert_eq!(parse_wall_id("42"), Some(42));
    assert_eq!(parse_wall_id(" 7 "), Some(7));
    assert_eq!(parse_wall_id("0"), None);
    assert_eq!(parse_wall_id("abc"), None);
}

#[test]
fn visibility_toggle_flips_flag_only() {
    let mut private = wall();
    private.is_public = false;
    assert_eq!(
        visibility_toggle(&private),
        UpdateWallRequest { title: None, description: None, is_public: Some(true) }
    );
    private.is_public = true;
    assert_eq!(visibility_toggle(&private).is_public, Some(false));
}

#[test]
fn contributor_status_reflects_acceptance() {
    let mut c = contributor();
    assert_eq!(contributor_status(&c), "Pending");
    c.accepted_at = Some("2024-05-03T08:00:00".to_owned());
    assert_eq!(contributor_status(&c), "Accepted");
}

#[test]
fn invite_request_validates_email() {
    assert_eq!(invite_request("nope", 7), Err("Enter a valid email address"));
    assert_eq!(
        invite_request(" friend@example.com ", 7),
        Ok(InviteRequest { email: "friend@example.com".to_owned(), wall_id: 7 })
    );
}

#[test]
fn visibility_label_names_both_states() {
    assert_eq!(visibility_label(true), "Public");
    assert_eq!(visibility_label(false), "Private");
}

#[test]
fn failed_first_load_returns_to_dashboard() {
    let loading = WallAdminState { loading: true, ..WallAdminState::default() };
    let foreign = ApiError::Forbidden("Not authorized to access this wall".to_owned());
    assert!(returns_to_dashboard(&loading, &foreign));
    assert!(returns_to_dashboard(&loading, &ApiError::NotFound("Wall not found".to_owned())));
    assert!(!returns_to_dashboard(&loading, &ApiError::Unauthorized("Not authenticated".to_owned())));
}

#[test]
fn failed_refresh_stays_on_page() {
    let loaded = WallAdminState { wall: Some(wall()), ..WallAdminState::default() };
    assert!(!returns_to_dashboard(&loaded, &ApiError::Network("offline".to_owned())));
}
