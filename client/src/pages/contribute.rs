//! Contribution page: access resolution, then the submission form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/contribute`, reached through an invite link (`?token=`), a share
//! link (`?url=&passcode=`) or directly. Access is resolved once from the query
//! string; the manual form re-runs the share-link path. A rejected invite token
//! is reported and the visitor is sent home.
//!
//! The form signal holds browser `File` handles, so it lives in local (not
//! thread-safe) reactive storage.

#[cfg(test)]
#[path = "contribute_test.rs"]
mod contribute_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::image_dropzone::ImageDropzone;
use crate::net::types::ContentType;
use crate::state::access::{AccessParams, AccessPath, AccessState, Identity, WallHeader, validate_manual_entry};
use crate::state::submission::SubmissionForm;
use crate::util::files::{BrowserFile, release_previews};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your contribution has been added to the wall.";

#[must_use]
pub fn author_label(identity: &Identity) -> &'static str {
    if identity.requires_author_name() { "Your Name *" } else { "Your Name (optional)" }
}

#[must_use]
pub fn author_placeholder(identity: &Identity) -> String {
    match identity.invited_email() {
        Some(email) => format!("Defaults to {email}"),
        None => "Enter your name".to_owned(),
    }
}

/// Start resolving `path`, publishing each step into `access`.
fn begin(access: RwSignal<AccessState>, path: AccessPath) {
    if path == AccessPath::ManualEntry {
        access.set(AccessState::ManualEntry { error: None });
        return;
    }
    access.set(AccessState::Resolving);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let next = crate::state::access::resolve(&crate::net::api::ApiClient::anonymous(), path).await;
        if let AccessState::Denied(message) = &next {
            log::warn!("invite token rejected: {message}");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
                let _ = window.location().set_href("/");
            }
        }
        access.set(next);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = path;
}

#[component]
pub fn ContributePage() -> impl IntoView {
    let query = use_query_map();
    let access = RwSignal::new(AccessState::Resolving);
    let wall_url = RwSignal::new(String::new());
    let passcode = RwSignal::new(String::new());

    Effect::new(move || {
        let params = query.with(|q| AccessParams::new(q.get("token"), q.get("url"), q.get("passcode")));
        if let Some(url) = &params.wall_url {
            wall_url.set(url.clone());
        }
        begin(access, params.path());
    });

    let on_manual_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_manual_entry(&wall_url.get(), &passcode.get()) {
            Ok(path) => begin(access, path),
            Err(message) => access.set(AccessState::ManualEntry { error: Some(message.to_owned()) }),
        }
    };

    view! {
        <div class="contribute-page">
            {move || match access.get() {
                AccessState::Resolving => {
                    view! { <p class="contribute-page__status">"Verifying access..."</p> }.into_any()
                }
                AccessState::ManualEntry { error } => {
                    view! {
                        <div class="login-card">
                            <h1>"Contribute to a Wishing Wall"</h1>
                            <p class="login-card__subtitle">"Enter the wall URL and passcode you were given."</p>
                            <form class="login-form" on:submit=on_manual_submit>
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Wall URL"
                                    prop:value=move || wall_url.get()
                                    on:input=move |ev| wall_url.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Passcode"
                                    prop:value=move || passcode.get()
                                    on:input=move |ev| passcode.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit">"Continue"</button>
                            </form>
                            {error.map(|e| view! { <p class="login-message login-message--error">{e}</p> })}
                        </div>
                    }
                        .into_any()
                }
                AccessState::Denied(message) => {
                    view! { <p class="contribute-page__error">{message}</p> }.into_any()
                }
                AccessState::Granted { wall, identity } => {
                    view! { <ContributionForm wall=wall identity=identity/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ContributionForm(wall: WallHeader, identity: Identity) -> impl IntoView {
    let form = RwSignal::new_local(SubmissionForm::<BrowserFile>::default());
    let notice = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let wall_id = wall.id;

    let label = author_label(&identity);
    let placeholder = author_placeholder(&identity);
    let direct = identity.requires_author_name();
    let invited_as = identity.invited_email().map(str::to_owned);
    let identity = StoredValue::new(identity);

    on_cleanup(move || {
        if let Some(dropped) = form.try_update_untracked(SubmissionForm::reset) {
            release_previews(&dropped);
        }
    });

    let select = move |kind: ContentType| {
        let mut dropped = Vec::new();
        form.update(|f| dropped = f.select_type(kind));
        release_previews(&dropped);
        notice.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        success.set(None);
        let current = identity.get_value();
        if let Err(e) = form.with_untracked(|f| f.validate(&current)) {
            error.set(Some(e.to_string()));
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let snapshot = form.get_untracked();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::ApiClient::anonymous();
                match crate::state::submission::submit(&api, &snapshot, wall_id, &current).await {
                    Ok(_) => {
                        let mut dropped = Vec::new();
                        form.update(|f| dropped = f.reset());
                        release_previews(&dropped);
                        notice.set(None);
                        success.set(Some(SUCCESS_MESSAGE.to_owned()));
                    }
                    Err(e) => {
                        log::warn!("contribution rejected: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (wall_id, current);
            busy.set(false);
        }
    };

    view! {
        <header class="contribute-page__header">
            <h1>{wall.title}</h1>
            {wall.description.map(|d| view! { <p class="contribute-page__description">{d}</p> })}
            {invited_as.map(|email| view! { <p class="contribute-page__identity">"Contributing as " {email}</p> })}
        </header>

        <form class="contribute-form" on:submit=on_submit>
            <fieldset class="type-picker">
                <legend>"What would you like to share?"</legend>
                {ContentType::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <label class="type-picker__option">
                                <input
                                    type="radio"
                                    name="content_type"
                                    value=kind.as_str()
                                    prop:checked=move || form.with(|f| f.content_type() == kind)
                                    on:change=move |_| select(kind)
                                />
                                {kind.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>

            <Show when=move || form.with(|f| f.content_type().shows_text())>
                <label class="dialog__label">
                    "Your Message *"
                    <textarea
                        class="dialog__input"
                        rows="5"
                        prop:value=move || form.with(|f| f.text.clone())
                        on:input=move |ev| form.update(|f| f.text = event_target_value(&ev))
                    ></textarea>
                </label>
            </Show>

            <Show when=move || form.with(|f| f.content_type().uses_single_image())>
                <ImageDropzone form=form multiple=false notice=notice/>
            </Show>
            <Show when=move || form.with(|f| f.content_type().uses_multiple_images())>
                <ImageDropzone form=form multiple=true notice=notice/>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || form.with(|f| f.author_name.clone())
                    on:input=move |ev| form.update(|f| f.author_name = event_target_value(&ev))
                />
            </label>

            {direct.then(|| view! {
                <label class="dialog__label">
                    "Your Email (optional)"
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.contributor_email.clone())
                        on:input=move |ev| form.update(|f| f.contributor_email = event_target_value(&ev))
                    />
                </label>
            })}

            <Show when=move || error.get().is_some()>
                <p class="contribute-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || success.get().is_some()>
                <p class="contribute-form__success">{move || success.get().unwrap_or_default()}</p>
            </Show>

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Submitting..." } else { "Submit Contribution" }}
            </button>
        </form>
    }
}
