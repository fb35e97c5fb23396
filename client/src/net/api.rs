//! REST client for the WishingWall API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` is a plain value derived from the session (see
//! `state::session`), so every page states explicitly which credentials it
//! calls with. The contribute and viewer flows only need the `WallApi` subset,
//! which keeps them testable against in-memory fakes.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are mapped to `ApiError` carrying the server's `detail`
//! message verbatim, falling back to a per-operation message when the body has
//! none. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::form_data::ContentSubmission;
use super::types::{
    AuthResponse, Content, Contributor, CreateWallRequest, ErrorBody, InviteRequest, LoginRequest, PublicWall,
    RegisterRequest, UpdateWallRequest, Wall,
};
use crate::util::files::BrowserFile;

/// Prefix shared by every API route; the host forwards it to the backend.
pub const API_PREFIX: &str = "/api/v1";

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401: bad credentials, token, or passcode.
    #[error("{0}")]
    Unauthorized(String),
    /// 403: valid session, but not allowed to touch this resource.
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    /// Any other non-2xx status.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available during server rendering")]
    Unavailable,
}

impl ApiError {
    /// Map a non-2xx response to an error, preferring the body's `detail`.
    #[must_use]
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let detail = detail_message(body).unwrap_or_else(|| fallback.to_owned());
        match status {
            401 => Self::Unauthorized(detail),
            403 => Self::Forbidden(detail),
            404 => Self::NotFound(detail),
            _ => Self::Rejected { status, detail },
        }
    }

    /// Whether the failure means the caller's credentials were rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Whether the server looked at the supplied passcode or token and said no,
    /// as opposed to never answering.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::Forbidden(_) | Self::NotFound(_))
    }
}

/// Extract the human-readable `detail` from an error body, if present.
#[must_use]
pub fn detail_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message())
}

/// Percent-encode one path segment (space becomes `%20`, `/` becomes `%2F`).
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_query(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{API_PREFIX}/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> String {
    format!("{API_PREFIX}/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn walls_endpoint() -> String {
    format!("{API_PREFIX}/walls")
}

#[cfg(any(test, feature = "hydrate"))]
fn wall_endpoint(wall_id: i64) -> String {
    format!("{API_PREFIX}/walls/{wall_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_wall_endpoint(wall_url: &str, passcode: &str) -> String {
    format!("{API_PREFIX}/walls/verify/{}?passcode={}", encode_segment(wall_url), encode_query(passcode))
}

#[cfg(any(test, feature = "hydrate"))]
fn public_wall_endpoint(wall_url: &str, passcode: &str) -> String {
    format!("{API_PREFIX}/walls/public/{}?passcode={}", encode_segment(wall_url), encode_query(passcode))
}

#[cfg(any(test, feature = "hydrate"))]
fn wall_contributors_endpoint(wall_id: i64) -> String {
    format!("{API_PREFIX}/contributors/wall/{wall_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn invite_endpoint() -> String {
    format!("{API_PREFIX}/contributors/invite")
}

#[cfg(any(test, feature = "hydrate"))]
fn contributor_endpoint(contributor_id: i64) -> String {
    format!("{API_PREFIX}/contributors/{contributor_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_invite_endpoint(token: &str) -> String {
    format!("{API_PREFIX}/contributors/verify/{}", encode_segment(token))
}

#[cfg(any(test, feature = "hydrate"))]
fn content_endpoint() -> String {
    format!("{API_PREFIX}/content")
}

/// Calls used by the contribute and public viewer flows.
#[allow(async_fn_in_trait)]
pub trait WallApi {
    /// Backing file handle carried by multipart submissions.
    type File: Clone;

    async fn verify_invite(&self, token: &str) -> Result<Contributor, ApiError>;
    async fn fetch_wall(&self, wall_id: i64) -> Result<Wall, ApiError>;
    async fn verify_wall(&self, wall_url: &str, passcode: &str) -> Result<Wall, ApiError>;
    async fn fetch_public_wall(&self, wall_url: &str, passcode: &str) -> Result<PublicWall, ApiError>;
    async fn submit_content(&self, submission: &ContentSubmission<Self::File>) -> Result<Content, ApiError>;
}

/// HTTP entry point for every page; optionally carries the owner's token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    /// Client without credentials (contributors, public viewers).
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: Option<String>) -> Self {
        Self { token }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns the server's message when the credentials are rejected.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_json(gloo_net::http::Request::post(&login_endpoint()), request, "An error occurred")
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// Create an owner account and sign in.
    ///
    /// # Errors
    ///
    /// Returns the server's message, e.g. when the email is already registered.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_json(gloo_net::http::Request::post(&register_endpoint()), request, "An error occurred")
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// List the walls owned by the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is no longer valid.
    pub async fn list_walls(&self) -> Result<Vec<Wall>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&walls_endpoint(), "Failed to fetch walls").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns the server's message when the wall cannot be created.
    pub async fn create_wall(&self, request: &CreateWallRequest) -> Result<Wall, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_json(gloo_net::http::Request::post(&walls_endpoint()), request, "Failed to create wall")
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// Replace the given fields of a wall.
    ///
    /// # Errors
    ///
    /// Returns the server's message when the update is refused.
    pub async fn update_wall(&self, wall_id: i64, request: &UpdateWallRequest) -> Result<Wall, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_json(gloo_net::http::Request::put(&wall_endpoint(wall_id)), request, "Failed to update wall")
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (wall_id, request);
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns the server's message when the wall cannot be deleted.
    pub async fn delete_wall(&self, wall_id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.delete(&wall_endpoint(wall_id), "Failed to delete wall").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = wall_id;
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the caller does not own the wall.
    pub async fn list_contributors(&self, wall_id: i64) -> Result<Vec<Contributor>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&wall_contributors_endpoint(wall_id), "Failed to fetch contributors")
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = wall_id;
            Err(ApiError::Unavailable)
        }
    }

    /// Invite a contributor by email. Duplicate invites are the server's call.
    ///
    /// # Errors
    ///
    /// Returns the server's message when the invite is refused.
    pub async fn invite_contributor(&self, request: &InviteRequest) -> Result<Contributor, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_json(gloo_net::http::Request::post(&invite_endpoint()), request, "Failed to send invite")
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns the server's message when the contributor cannot be removed.
    pub async fn remove_contributor(&self, contributor_id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.delete(&contributor_endpoint(contributor_id), "Failed to remove contributor")
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = contributor_id;
            Err(ApiError::Unavailable)
        }
    }
}

impl WallApi for ApiClient {
    type File = BrowserFile;

    async fn verify_invite(&self, token: &str) -> Result<Contributor, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&verify_invite_endpoint(token), "Invalid invite token").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_wall(&self, wall_id: i64) -> Result<Wall, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&wall_endpoint(wall_id), "Failed to fetch wall").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = wall_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn verify_wall(&self, wall_url: &str, passcode: &str) -> Result<Wall, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&verify_wall_endpoint(wall_url, passcode), "Invalid wall URL or passcode")
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (wall_url, passcode);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_public_wall(&self, wall_url: &str, passcode: &str) -> Result<PublicWall, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&public_wall_endpoint(wall_url, passcode), "Failed to load wall")
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (wall_url, passcode);
            Err(ApiError::Unavailable)
        }
    }

    async fn submit_content(&self, submission: &ContentSubmission<BrowserFile>) -> Result<Content, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = submission.to_form_data().map_err(ApiError::Network)?;
            // No explicit Content-Type: the browser adds the multipart boundary.
            let request = self
                .authorize(gloo_net::http::Request::post(&content_endpoint()))
                .body(form)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            decode(resp, "Failed to post content").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.token.as_deref() {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str, fallback: &str) -> Result<T, ApiError> {
        let resp = self
            .authorize(gloo_net::http::Request::get(url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp, fallback).await
    }

    async fn send_json<B, T>(
        &self,
        builder: gloo_net::http::RequestBuilder,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp, fallback).await
    }

    async fn delete(&self, url: &str, fallback: &str) -> Result<(), ApiError> {
        let resp = self
            .authorize(gloo_net::http::Request::delete(url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_response(resp.status(), &body, fallback));
        }
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("api request failed: {} {status}", resp.url());
        return Err(ApiError::from_response(status, &body, fallback));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
