//! Contribution form state machine.
//!
//! DESIGN
//! ======
//! `content_type` is the state. Each type gates which inputs are shown and
//! required; switching type drops staged attachments the new type cannot carry,
//! so a submission never ships stale files under a mismatched type tag.
//!
//! Staged images pair the backing file with its preview in one value, which
//! keeps preview and file order identical through removals. The form is generic
//! over the file handle so the same rules run in the browser (`web_sys::File`)
//! and in tests.
//!
//! TRADE-OFFS
//! ==========
//! Staging past `MAX_IMAGES` silently drops the excess. The API rejects more
//! than 20 images outright, so truncating keeps the form submittable; the page
//! shows the dropped count instead of an error.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::api::{ApiError, WallApi};
use crate::net::form_data::ContentSubmission;
use crate::net::types::{Content, ContentType};
use crate::state::access::Identity;

/// Maximum images in one multi-image contribution.
pub const MAX_IMAGES: usize = 20;

/// Largest accepted upload, per file.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types the API stores.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// A picked image waiting for submission.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedImage<F> {
    pub file: F,
    pub name: String,
    /// Local preview (object URL); never uploaded.
    pub preview_url: String,
}

/// Why a picked file was not staged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StageRejection {
    #[error("{name}: file type not allowed ({mime})")]
    UnsupportedType { name: String, mime: String },
    #[error("{name}: file too large (max 10MB)")]
    TooLarge { name: String, bytes: u64 },
}

/// Check a picked file against the API's upload limits.
///
/// # Errors
///
/// Returns the rejection reason for unsupported types or oversized files.
pub fn check_upload(name: &str, mime: &str, bytes: u64) -> Result<(), StageRejection> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err(StageRejection::UnsupportedType { name: name.to_owned(), mime: mime.to_owned() });
    }
    if bytes > MAX_UPLOAD_BYTES {
        return Err(StageRejection::TooLarge { name: name.to_owned(), bytes });
    }
    Ok(())
}

/// Client-side validation failures; raised before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Please enter your name")]
    MissingAuthorName,
    #[error("Please enter some text")]
    MissingText,
    #[error("Please select an image")]
    MissingImage,
    #[error("Please enter text and select an image")]
    MissingTextAndImage,
    #[error("Please select at least one image")]
    MissingImages,
}

/// Outcome of a failed submit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFailure {
    #[error(transparent)]
    Invalid(#[from] SubmissionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Transient contribution form state.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionForm<F> {
    content_type: ContentType,
    pub text: String,
    pub author_name: String,
    /// Optional email for direct (URL + passcode) contributors.
    pub contributor_email: String,
    image: Option<StagedImage<F>>,
    images: Vec<StagedImage<F>>,
}

impl<F> Default for SubmissionForm<F> {
    fn default() -> Self {
        Self {
            content_type: ContentType::Text,
            text: String::new(),
            author_name: String::new(),
            contributor_email: String::new(),
            image: None,
            images: Vec::new(),
        }
    }
}

impl<F> SubmissionForm<F> {
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    #[must_use]
    pub fn image(&self) -> Option<&StagedImage<F>> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn images(&self) -> &[StagedImage<F>] {
        &self.images
    }

    /// Free multi-image slots.
    #[must_use]
    pub fn remaining_slots(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.images.len())
    }

    /// Switch content type, returning attachments the new type cannot carry.
    pub fn select_type(&mut self, next: ContentType) -> Vec<StagedImage<F>> {
        self.content_type = next;
        let mut dropped = Vec::new();
        if !next.uses_single_image() {
            dropped.extend(self.image.take());
        }
        if !next.uses_multiple_images() {
            dropped.append(&mut self.images);
        }
        dropped
    }

    /// Stage the single image, returning the one it replaces.
    pub fn stage_image(&mut self, image: StagedImage<F>) -> Option<StagedImage<F>> {
        self.image.replace(image)
    }

    pub fn clear_image(&mut self) -> Option<StagedImage<F>> {
        self.image.take()
    }

    /// Append images up to `MAX_IMAGES`, returning the dropped excess.
    pub fn stage_images(&mut self, incoming: impl IntoIterator<Item = StagedImage<F>>) -> Vec<StagedImage<F>> {
        let mut dropped = Vec::new();
        for image in incoming {
            if self.images.len() < MAX_IMAGES {
                self.images.push(image);
            } else {
                dropped.push(image);
            }
        }
        dropped
    }

    /// Remove the staged image at `index`.
    pub fn remove_image(&mut self, index: usize) -> Option<StagedImage<F>> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Check the per-type required fields and the author-name rule.
    ///
    /// # Errors
    ///
    /// Returns the first missing requirement, author name first.
    pub fn validate(&self, identity: &Identity) -> Result<(), SubmissionError> {
        if identity.requires_author_name() && self.author_name.trim().is_empty() {
            return Err(SubmissionError::MissingAuthorName);
        }
        let has_text = !self.text.trim().is_empty();
        match self.content_type {
            ContentType::Text if !has_text => Err(SubmissionError::MissingText),
            ContentType::Image if self.image.is_none() => Err(SubmissionError::MissingImage),
            ContentType::TextImage if !has_text || self.image.is_none() => Err(SubmissionError::MissingTextAndImage),
            ContentType::Images | ContentType::ImagesText if self.images.is_empty() => {
                Err(SubmissionError::MissingImages)
            }
            ContentType::ImagesText if !has_text => Err(SubmissionError::MissingText),
            _ => Ok(()),
        }
    }

    /// Assemble the multipart payload for `wall_id`.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; no payload is built for invalid forms.
    pub fn build(&self, wall_id: i64, identity: &Identity) -> Result<ContentSubmission<F>, SubmissionError>
    where
        F: Clone,
    {
        self.validate(identity)?;

        let mut payload = ContentSubmission::default();
        payload.push_text("wall_id", wall_id.to_string());
        payload.push_text("content_type", self.content_type.as_str());
        if !self.text.trim().is_empty() {
            payload.push_text("text", self.text.clone());
        }
        if self.content_type.uses_single_image() {
            if let Some(image) = &self.image {
                payload.push_file("image", image.file.clone(), image.name.clone());
            }
        }
        if self.content_type.uses_multiple_images() {
            for image in &self.images {
                payload.push_file("images", image.file.clone(), image.name.clone());
            }
        }
        let author_name = self.author_name.trim();
        if !author_name.is_empty() {
            payload.push_text("author_name", author_name);
        }
        match identity {
            Identity::Invited { token, .. } => payload.push_text("invite_token", token.clone()),
            Identity::PendingDirect { wall_url, passcode, .. } => {
                payload.push_text("wall_url", wall_url.clone());
                payload.push_text("wall_passcode", passcode.clone());
                let email = self.contributor_email.trim();
                if !email.is_empty() {
                    payload.push_text("contributor_email", email);
                }
            }
        }
        Ok(payload)
    }

    /// Back to an empty `text` form, returning every staged attachment.
    pub fn reset(&mut self) -> Vec<StagedImage<F>> {
        let mut dropped: Vec<StagedImage<F>> = self.image.take().into_iter().collect();
        dropped.append(&mut self.images);
        *self = Self::default();
        dropped
    }
}

/// Validate, build and post a contribution.
///
/// # Errors
///
/// `SubmitFailure::Invalid` when a required field is missing (no request is
/// made); `SubmitFailure::Api` with the server's message otherwise.
pub async fn submit<A: WallApi>(
    api: &A,
    form: &SubmissionForm<A::File>,
    wall_id: i64,
    identity: &Identity,
) -> Result<Content, SubmitFailure> {
    let payload = form.build(wall_id, identity)?;
    Ok(api.submit_content(&payload).await?)
}
