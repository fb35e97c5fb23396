use super::*;

#[test]
fn endpoints_use_v1_prefix() {
    assert_eq!(login_endpoint(), "/api/v1/auth/login");
    assert_eq!(register_endpoint(), "/api/v1/auth/register");
    assert_eq!(walls_endpoint(), "/api/v1/walls");
    assert_eq!(wall_endpoint(12), "/api/v1/walls/12");
    assert_eq!(wall_contributors_endpoint(12), "/api/v1/contributors/wall/12");
    assert_eq!(invite_endpoint(), "/api/v1/contributors/invite");
    assert_eq!(contributor_endpoint(4), "/api/v1/contributors/4");
    assert_eq!(content_endpoint(), "/api/v1/content");
}

#[test]
fn passcode_endpoints_encode_query_values() {
    assert_eq!(
        verify_wall_endpoint("aB3dE6gH9k", "12 34&5"),
        "/api/v1/walls/verify/aB3dE6gH9k?passcode=12+34%265"
    );
    assert_eq!(
        public_wall_endpoint("aB3dE6gH9k", "123456"),
        "/api/v1/walls/public/aB3dE6gH9k?passcode=123456"
    );
}

#[test]
fn path_segments_use_percent_encoding_not_form_encoding() {
    assert_eq!(
        verify_wall_endpoint("my wall+1", "12 34"),
        "/api/v1/walls/verify/my%20wall%2B1?passcode=12+34"
    );
    assert_eq!(verify_invite_endpoint("a/b c"), "/api/v1/contributors/verify/a%2Fb%20c");
}

#[test]
fn transport_failures_are_not_rejections() {
    assert!(!ApiError::Network("offline".to_owned()).is_rejection());
    assert!(!ApiError::Unavailable.is_rejection());
    assert!(!ApiError::Rejected { status: 500, detail: "x".to_owned() }.is_rejection());
}

#[test]
fn verify_invite_endpoint_keeps_urlsafe_tokens_intact() {
    assert_eq!(
        verify_invite_endpoint("Zx_9-aQ"),
        "/api/v1/contributors/verify/Zx_9-aQ"
    );
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn from_response_prefers_server_detail() {
    let err = ApiError::from_response(401, r#"{"detail": "Invalid passcode"}"#, "Failed to load wall");
    assert_eq!(err, ApiError::Unauthorized("Invalid passcode".to_owned()));
    assert_eq!(err.to_string(), "Invalid passcode");
    assert!(err.is_unauthorized());
}

#[test]
fn from_response_falls_back_when_body_has_no_detail() {
    let err = ApiError::from_response(500, "<html>oops</html>", "Failed to post content");
    assert_eq!(
        err,
        ApiError::Rejected { status: 500, detail: "Failed to post content".to_owned() }
    );
    assert_eq!(err.to_string(), "Failed to post content");
}

#[test]
fn from_response_maps_not_found_and_forbidden() {
    let missing = ApiError::from_response(404, r#"{"detail": "Wall not found"}"#, "x");
    assert_eq!(missing, ApiError::NotFound("Wall not found".to_owned()));
    let foreign = ApiError::from_response(403, r#"{"detail": "Not authorized to access this wall"}"#, "x");
    assert_eq!(foreign, ApiError::Forbidden("Not authorized to access this wall".to_owned()));
    assert!(!foreign.is_unauthorized());
    assert!(foreign.is_rejection());
}

#[test]
fn client_carries_session_token() {
    assert_eq!(ApiClient::anonymous().token(), None);
    assert_eq!(ApiClient::with_token(Some("abc".to_owned())).token(), Some("abc"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let client = ApiClient::anonymous();
    let result = futures::executor::block_on(client.list_walls());
    assert_eq!(result, Err(ApiError::Unavailable));
}
