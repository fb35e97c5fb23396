//! Dashboard wall-list state.
//!
//! DESIGN
//! ======
//! Created walls are appended to the fetched list; every other mutation lives
//! on the admin page, which re-fetches instead of patching.

#[cfg(test)]
#[path = "walls_test.rs"]
mod walls_test;

use crate::net::types::{CreateWallRequest, Wall};

/// Walls owned by the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallsState {
    pub items: Vec<Wall>,
    pub loading: bool,
    pub error: Option<String>,
}

impl WallsState {
    /// Replace the list with a fresh fetch.
    pub fn loaded(&mut self, walls: Vec<Wall>) {
        self.items = walls;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn push_created(&mut self, wall: Wall) {
        self.items.push(wall);
    }
}

/// Create-wall modal draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewWallDraft {
    pub title: String,
    pub description: String,
}

impl NewWallDraft {
    /// Build the create request; a blank description is sent as `null`.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the title is blank.
    pub fn to_request(&self) -> Result<CreateWallRequest, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required");
        }
        let description = self.description.trim();
        Ok(CreateWallRequest {
            title: title.to_owned(),
            description: (!description.is_empty()).then(|| description.to_owned()),
        })
    }
}
