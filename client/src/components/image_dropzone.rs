//! Image picker with drag-and-drop and staged previews.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes straight into the contribute page's `SubmissionForm`. Picked files
//! are checked against the upload limits before staging; rejections and the
//! count of images dropped past the per-post cap surface through `notice`.
//! Every staged image that leaves the form has its preview URL released.

use leptos::prelude::*;

use crate::state::submission::{ALLOWED_IMAGE_TYPES, MAX_IMAGES, SubmissionForm};
#[cfg(feature = "hydrate")]
use crate::state::submission::StagedImage;
use crate::util::files::{BrowserFile, release_previews};

/// Picker for the single-image (`multiple = false`) or multi-image content
/// types.
#[component]
pub fn ImageDropzone(
    form: RwSignal<SubmissionForm<BrowserFile>, LocalStorage>,
    multiple: bool,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let dragging = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let accept = move |files: Vec<BrowserFile>| {
        let (accepted, rejected) = crate::util::files::stage_all(files);
        let mut messages: Vec<String> = rejected.iter().map(ToString::to_string).collect();
        if multiple {
            let mut dropped = Vec::new();
            form.update(|f| dropped = f.stage_images(accepted));
            if !dropped.is_empty() {
                messages.push(format!("Only {MAX_IMAGES} images per post; {} not added.", dropped.len()));
                release_previews(&dropped);
            }
        } else {
            let mut accepted = accepted.into_iter();
            if let Some(first) = accepted.next() {
                let mut replaced: Option<StagedImage<BrowserFile>> = None;
                form.update(|f| replaced = f.stage_image(first));
                release_previews(&replaced.into_iter().collect::<Vec<_>>());
            }
            release_previews(&accepted.collect::<Vec<_>>());
        }
        notice.set((!messages.is_empty()).then(|| messages.join(" ")));
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = notice;

    let hint = move || {
        if dragging.get() {
            "Drop images here".to_owned()
        } else if multiple {
            let staged = form.with(|f| f.images().len());
            format!("Drag & drop images or click to browse ({staged}/{MAX_IMAGES})")
        } else {
            "Drag & drop an image or click to browse".to_owned()
        }
    };

    let remove_at = move |index: usize| {
        let mut removed = None;
        form.update(|f| removed = f.remove_image(index));
        release_previews(&removed.into_iter().collect::<Vec<_>>());
    };

    let clear_single = move |_| {
        let mut removed = None;
        form.update(|f| removed = f.clear_image());
        release_previews(&removed.into_iter().collect::<Vec<_>>());
    };

    view! {
        <div class="dropzone-field">
            <label
                class="dropzone"
                class:dropzone--active=move || dragging.get()
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(false);
                    #[cfg(feature = "hydrate")]
                    accept(crate::util::files::files_from_drop(&ev));
                }
            >
                <input
                    class="dropzone__input"
                    type="file"
                    accept=ALLOWED_IMAGE_TYPES.join(",")
                    multiple=multiple
                    on:change=move |ev| {
                        #[cfg(feature = "hydrate")]
                        accept(crate::util::files::files_from_input(&ev));
                        #[cfg(not(feature = "hydrate"))]
                        let _ = ev;
                    }
                />
                <span class="dropzone__hint">{hint}</span>
            </label>

            <Show when=move || !multiple && form.with(|f| f.image().is_some())>
                <div class="dropzone__preview">
                    <img
                        class="dropzone__thumb"
                        src=move || form.with(|f| f.image().map(|i| i.preview_url.clone()).unwrap_or_default())
                        alt="Selected image"
                    />
                    <button class="dropzone__remove" type="button" on:click=clear_single>
                        "Remove"
                    </button>
                </div>
            </Show>

            <Show when=move || multiple && form.with(|f| !f.images().is_empty())>
                <ul class="dropzone__grid">
                    {move || {
                        form.with(|f| {
                            f.images()
                                .iter()
                                .enumerate()
                                .map(|(index, image)| {
                                    let src = image.preview_url.clone();
                                    let name = image.name.clone();
                                    view! {
                                        <li class="dropzone__tile">
                                            <img class="dropzone__thumb" src=src alt=name/>
                                            <button
                                                class="dropzone__remove"
                                                type="button"
                                                aria-label="Remove image"
                                                on:click=move |_| remove_at(index)
                                            >
                                                "×"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </ul>
            </Show>
        </div>
    }
}
