//! Access resolution for the contribute page.
//!
//! ARCHITECTURE
//! ============
//! The page's query string selects exactly one path:
//! - `token` -> invite token, verified against the contributor registry;
//! - `url` + `passcode` -> direct access, verified against the wall;
//! - neither -> manual entry form, which retries the direct path.
//!
//! A resolved path yields the wall header plus an `Identity`. Direct access has
//! no contributor yet; the API creates or matches one at submission time from
//! the optional email, so `Identity::PendingDirect` carries only what the
//! submission needs to authenticate.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::api::WallApi;
use crate::net::types::{Contributor, Wall};

/// Query parameters of `/contribute`, with blank values normalized away.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessParams {
    pub token: Option<String>,
    pub wall_url: Option<String>,
    pub passcode: Option<String>,
}

impl AccessParams {
    #[must_use]
    pub fn new(token: Option<String>, wall_url: Option<String>, passcode: Option<String>) -> Self {
        Self { token: non_blank(token), wall_url: non_blank(wall_url), passcode: non_blank(passcode) }
    }

    /// Which authorization path these parameters select.
    #[must_use]
    pub fn path(&self) -> AccessPath {
        if let Some(token) = &self.token {
            return AccessPath::InviteToken(token.clone());
        }
        match (&self.wall_url, &self.passcode) {
            (Some(wall_url), Some(passcode)) => {
                AccessPath::UrlPasscode { wall_url: wall_url.clone(), passcode: passcode.clone() }
            }
            _ => AccessPath::ManualEntry,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// The three mutually exclusive authorization paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessPath {
    InviteToken(String),
    UrlPasscode { wall_url: String, passcode: String },
    ManualEntry,
}

/// Who is posting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identity {
    /// A pre-registered contributor holding an invite token.
    Invited { contributor: Contributor, token: String },
    /// Direct access by wall URL + passcode; the contributor record is created
    /// or matched server-side when content is submitted.
    PendingDirect { wall_id: i64, wall_url: String, passcode: String },
}

impl Identity {
    /// Direct contributors must name themselves; invited ones fall back to
    /// their invited email.
    #[must_use]
    pub fn requires_author_name(&self) -> bool {
        matches!(self, Self::PendingDirect { .. })
    }

    /// Email used for attribution when no author name is given.
    #[must_use]
    pub fn invited_email(&self) -> Option<&str> {
        match self {
            Self::Invited { contributor, .. } => Some(contributor.email.as_str()),
            Self::PendingDirect { .. } => None,
        }
    }
}

/// The parts of a wall the contribute page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallHeader {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

impl WallHeader {
    /// Header used when only the wall id is known.
    #[must_use]
    pub fn untitled(id: i64) -> Self {
        Self { id, title: "Wishing Wall".to_owned(), description: None }
    }
}

impl From<&Wall> for WallHeader {
    fn from(wall: &Wall) -> Self {
        Self { id: wall.id, title: wall.title.clone(), description: wall.description.clone() }
    }
}

/// Contribute page access lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AccessState {
    #[default]
    Resolving,
    /// Show the URL + passcode form, optionally with the last failure.
    ManualEntry { error: Option<String> },
    Granted { wall: WallHeader, identity: Identity },
    /// Invite token rejected; the page reports and leaves.
    Denied(String),
}

/// Resolve a path against the API.
pub async fn resolve<A: WallApi>(api: &A, path: AccessPath) -> AccessState {
    match path {
        AccessPath::InviteToken(token) => resolve_invite(api, token).await,
        AccessPath::UrlPasscode { wall_url, passcode } => resolve_direct(api, wall_url, passcode).await,
        AccessPath::ManualEntry => AccessState::ManualEntry { error: None },
    }
}

async fn resolve_invite<A: WallApi>(api: &A, token: String) -> AccessState {
    let contributor = match api.verify_invite(&token).await {
        Ok(contributor) => contributor,
        Err(e) => return AccessState::Denied(e.to_string()),
    };
    // The wall lookup is owner-scoped on some deployments; the submission only
    // needs the id, so a failed lookup degrades to an untitled header.
    let wall = match api.fetch_wall(contributor.wall_id).await {
        Ok(wall) => WallHeader::from(&wall),
        Err(_) => WallHeader::untitled(contributor.wall_id),
    };
    AccessState::Granted { wall, identity: Identity::Invited { contributor, token } }
}

async fn resolve_direct<A: WallApi>(api: &A, wall_url: String, passcode: String) -> AccessState {
    match api.verify_wall(&wall_url, &passcode).await {
        Ok(wall) => AccessState::Granted {
            wall: WallHeader::from(&wall),
            identity: Identity::PendingDirect { wall_id: wall.id, wall_url, passcode },
        },
        Err(e) => AccessState::ManualEntry { error: Some(e.to_string()) },
    }
}

/// Validate the manual entry form.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_manual_entry(wall_url: &str, passcode: &str) -> Result<AccessPath, &'static str> {
    let wall_url = wall_url.trim();
    let passcode = passcode.trim();
    if wall_url.is_empty() || passcode.is_empty() {
        return Err("Please enter both wall URL and passcode");
    }
    Ok(AccessPath::UrlPasscode { wall_url: wall_url.to_owned(), passcode: passcode.to_owned() })
}
