//! Wire DTOs for the WishingWall REST API.
//!
//! DESIGN
//! ======
//! These types mirror the API's JSON bodies so serde round-trips stay lossless.
//! The API is authoritative for every entity; the client only ever holds them
//! as in-memory copies of the last fetch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated wall owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_admin: bool,
}

/// Response body of `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// A wall as seen by its owner, including the shared passcode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Public slug used in `/wall/{unique_url}` and share links.
    pub unique_url: String,
    /// Shared secret gating the public and contribute pages.
    pub passcode: String,
    pub is_public: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateWallRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Partial update; absent fields are left untouched by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// A person invited to post on a wall.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub wall_id: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub invited_at: Option<String>,
    /// `None` while the invitation is still pending.
    #[serde(default)]
    pub accepted_at: Option<String>,
}

impl Contributor {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.accepted_at.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InviteRequest {
    pub email: String,
    pub wall_id: i64,
}

/// The five content shapes a contribution can take.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Text,
    Image,
    TextImage,
    Images,
    ImagesText,
}

impl ContentType {
    pub const ALL: [Self; 5] = [Self::Text, Self::Image, Self::TextImage, Self::Images, Self::ImagesText];

    /// Wire value used in the multipart `content_type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::TextImage => "text_image",
            Self::Images => "images",
            Self::ImagesText => "images_text",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text Only",
            Self::Image => "Image Only",
            Self::TextImage => "Text + Image",
            Self::Images => "Images",
            Self::ImagesText => "Images + Text",
        }
    }

    /// Whether the message textarea is shown for this type.
    #[must_use]
    pub fn shows_text(self) -> bool {
        matches!(self, Self::Text | Self::TextImage | Self::ImagesText)
    }

    /// Whether a non-blank message is mandatory for this type.
    #[must_use]
    pub fn requires_text(self) -> bool {
        self.shows_text()
    }

    /// Whether this type carries exactly one image (`image` multipart field).
    #[must_use]
    pub fn uses_single_image(self) -> bool {
        matches!(self, Self::Image | Self::TextImage)
    }

    /// Whether this type carries an ordered image list (`images` multipart field).
    #[must_use]
    pub fn uses_multiple_images(self) -> bool {
        matches!(self, Self::Images | Self::ImagesText)
    }
}

/// A single contribution on a wall.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: i64,
    pub content_type: ContentType,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub author_name: Option<String>,
    pub created_at: String,
}

impl Content {
    /// Non-empty message text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Image list for the multi-image variants; empty for everything else.
    #[must_use]
    pub fn gallery(&self) -> &[String] {
        self.image_urls.as_deref().unwrap_or_default()
    }
}

/// Passcode-gated public view of a wall with its contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicWall {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub unique_url: String,
    pub is_public: bool,
    #[serde(default)]
    pub contents: Vec<Content>,
}

/// Error envelope returned by the API; `detail` is either a message string or
/// a list of field validation errors.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human-readable message extracted from `detail`.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let parts: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                    .collect();
                if parts.is_empty() { None } else { Some(parts.join("; ")) }
            }
            _ => None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_token_type() -> String {
    "bearer".to_owned()
}
