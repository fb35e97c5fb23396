//! In-memory `WallApi` used by state tests.

use std::cell::RefCell;

use crate::net::api::{ApiError, WallApi};
use crate::net::form_data::ContentSubmission;
use crate::net::types::{Content, ContentType, Contributor, PublicWall, Wall};

pub fn wall() -> Wall {
    Wall {
        id: 7,
        title: "Birthday Wishes for John".to_owned(),
        description: Some("Leave a note!".to_owned()),
        unique_url: "aB3dE6gH9k".to_owned(),
        passcode: "123456".to_owned(),
        is_public: false,
        created_at: Some("2024-05-01T10:00:00".to_owned()),
    }
}

pub fn contributor() -> Contributor {
    Contributor {
        id: 3,
        email: "friend@example.com".to_owned(),
        wall_id: 7,
        is_active: true,
        invited_at: Some("2024-05-01T10:00:00".to_owned()),
        accepted_at: None,
    }
}

pub fn content() -> Content {
    Content {
        id: 11,
        content_type: ContentType::Text,
        text: Some("Happy birthday!".to_owned()),
        image_url: None,
        image_urls: None,
        author_name: Some("Sam".to_owned()),
        created_at: "2024-05-02T09:30:00".to_owned(),
    }
}

pub fn public_wall() -> PublicWall {
    PublicWall {
        id: 7,
        title: "Birthday Wishes for John".to_owned(),
        description: None,
        unique_url: "aB3dE6gH9k".to_owned(),
        is_public: false,
        contents: vec![content()],
    }
}

/// Scripted responses plus a log of every call made.
pub struct FakeApi {
    pub invite: Result<Contributor, ApiError>,
    pub wall: Result<Wall, ApiError>,
    pub verify: Result<Wall, ApiError>,
    pub public_wall: Result<PublicWall, ApiError>,
    pub submit: Result<Content, ApiError>,
    pub calls: RefCell<Vec<String>>,
    pub submitted: RefCell<Vec<ContentSubmission<&'static str>>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            invite: Ok(contributor()),
            wall: Ok(wall()),
            verify: Ok(wall()),
            public_wall: Ok(public_wall()),
            submit: Ok(content()),
            calls: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl WallApi for FakeApi {
    type File = &'static str;

    async fn verify_invite(&self, token: &str) -> Result<Contributor, ApiError> {
        self.record(format!("verify_invite:{token}"));
        self.invite.clone()
    }

    async fn fetch_wall(&self, wall_id: i64) -> Result<Wall, ApiError> {
        self.record(format!("fetch_wall:{wall_id}"));
        self.wall.clone()
    }

    async fn verify_wall(&self, wall_url: &str, passcode: &str) -> Result<Wall, ApiError> {
        self.record(format!("verify_wall:{wall_url}:{passcode}"));
        self.verify.clone()
    }

    async fn fetch_public_wall(&self, wall_url: &str, passcode: &str) -> Result<PublicWall, ApiError> {
        self.record(format!("fetch_public_wall:{wall_url}:{passcode}"));
        self.public_wall.clone()
    }

    async fn submit_content(&self, submission: &ContentSubmission<&'static str>) -> Result<Content, ApiError> {
        self.record("submit_content".to_owned());
        self.submitted.borrow_mut().push(submission.clone());
        self.submit.clone()
    }
}
