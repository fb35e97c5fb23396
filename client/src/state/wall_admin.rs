//! Wall administration state.
//!
//! DESIGN
//! ======
//! Every mutation (visibility toggle, invite, removal) is followed by a full
//! re-fetch of the affected wall or contributor list, so the page never holds
//! locally patched data that could drift from the server.

#[cfg(test)]
#[path = "wall_admin_test.rs"]
mod wall_admin_test;

use crate::net::api::ApiError;
use crate::net::types::{Contributor, InviteRequest, UpdateWallRequest, Wall};
use crate::util::validation::looks_like_email;

pub const REMOVE_CONTRIBUTOR_PROMPT: &str = "Are you sure you want to remove this contributor?";
pub const DELETE_WALL_PROMPT: &str = "Delete this wall and all of its contributions? This cannot be undone.";

/// Admin page state for one wall.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallAdminState {
    pub wall: Option<Wall>,
    pub contributors: Vec<Contributor>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

/// Whether a failed wall fetch should send the owner back to `/dashboard`.
///
/// Only the first load bounces; once the wall is on screen a failed refresh is
/// reported in place. A 401 is left to the login redirect.
#[must_use]
pub fn returns_to_dashboard(state: &WallAdminState, error: &ApiError) -> bool {
    state.wall.is_none() && !error.is_unauthorized()
}

/// Parse the `:id` route segment.
#[must_use]
pub fn parse_wall_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Update body flipping the wall's visibility.
#[must_use]
pub fn visibility_toggle(wall: &Wall) -> UpdateWallRequest {
    UpdateWallRequest { is_public: Some(!wall.is_public), ..UpdateWallRequest::default() }
}

#[must_use]
pub fn visibility_label(is_public: bool) -> &'static str {
    if is_public { "Public" } else { "Private" }
}

#[must_use]
pub fn contributor_status(contributor: &Contributor) -> &'static str {
    if contributor.is_pending() { "Pending" } else { "Accepted" }
}

/// Build an invite for `wall_id`.
///
/// # Errors
///
/// Returns a user-facing message when the email is malformed.
pub fn invite_request(email: &str, wall_id: i64) -> Result<InviteRequest, &'static str> {
    let email = email.trim();
    if !looks_like_email(email) {
        return Err("Enter a valid email address");
    }
    Ok(InviteRequest { email: email.to_owned(), wall_id })
}
