//! Browser file handles for image staging.
//!
//! Staged images keep the `File` they were picked from next to an object-URL
//! preview; nothing is uploaded until the contribution is submitted.

use crate::state::submission::StagedImage;
#[cfg(feature = "hydrate")]
use crate::state::submission::{StageRejection, check_upload};

/// Backing file of a staged image.
#[cfg(feature = "hydrate")]
pub type BrowserFile = web_sys::File;

/// No file handles exist outside the browser.
#[cfg(not(feature = "hydrate"))]
pub type BrowserFile = ();

/// Files selected through an `<input type="file">` change event.
#[cfg(feature = "hydrate")]
pub fn files_from_input(ev: &leptos::ev::Event) -> Vec<BrowserFile> {
    let input = leptos::prelude::event_target::<web_sys::HtmlInputElement>(ev);
    let files = collect(input.files());
    // Clear the input so picking the same file again still fires `change`.
    input.set_value("");
    files
}

/// Files dropped onto a drop zone.
#[cfg(feature = "hydrate")]
pub fn files_from_drop(ev: &leptos::ev::DragEvent) -> Vec<BrowserFile> {
    collect(ev.data_transfer().and_then(|dt| dt.files()))
}

#[cfg(feature = "hydrate")]
fn collect(list: Option<web_sys::FileList>) -> Vec<BrowserFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Check a picked file and create its preview.
///
/// # Errors
///
/// Returns the rejection when the type or size is not accepted by the API.
#[cfg(feature = "hydrate")]
pub fn stage(file: BrowserFile) -> Result<StagedImage<BrowserFile>, StageRejection> {
    let name = file.name();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bytes = file.size() as u64;
    check_upload(&name, &file.type_(), bytes)?;
    let preview_url = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
    Ok(StagedImage { file, name, preview_url })
}

/// Release preview object URLs for images that left the form.
pub fn release_previews(images: &[StagedImage<BrowserFile>]) {
    #[cfg(feature = "hydrate")]
    {
        for image in images {
            if !image.preview_url.is_empty() {
                let _ = web_sys::Url::revoke_object_url(&image.preview_url);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = images;
    }
}

/// Stage a batch, splitting accepted images from rejections.
#[cfg(feature = "hydrate")]
pub fn stage_all(files: Vec<BrowserFile>) -> (Vec<StagedImage<BrowserFile>>, Vec<StageRejection>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for file in files {
        match stage(file) {
            Ok(image) => accepted.push(image),
            Err(reason) => rejected.push(reason),
        }
    }
    (accepted, rejected)
}
