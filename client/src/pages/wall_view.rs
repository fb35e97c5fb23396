//! Public wall page behind the passcode gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/wall/{url}`. On mount the per-wall passcode cache is consulted; a
//! cached passcode is verified without showing the prompt. The prompt appears
//! when nothing is cached or the API rejects the passcode, in which case the
//! cache entry is dropped as well.

#[cfg(test)]
#[path = "wall_view_test.rs"]
mod wall_view_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::content_card::ContentCard;
use crate::net::types::PublicWall;
use crate::state::viewer::Gate;
#[cfg(feature = "hydrate")]
use crate::state::viewer::{initial_gate, unlock};
#[cfg(feature = "hydrate")]
use crate::util::{passcode_cache::PasscodeCache, storage::BrowserStorage};

/// Trimmed passcode from the prompt.
///
/// # Errors
///
/// Returns a prompt message when nothing was entered.
pub fn passcode_input(raw: &str) -> Result<String, &'static str> {
    let passcode = raw.trim();
    if passcode.is_empty() {
        return Err("Please enter the passcode");
    }
    Ok(passcode.to_owned())
}

#[must_use]
pub fn contribution_count_label(count: usize) -> String {
    match count {
        1 => "1 contribution".to_owned(),
        n => format!("{n} contributions"),
    }
}

#[component]
pub fn WallViewPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("url")).unwrap_or_default());
    let gate = RwSignal::new(Gate::Checking);
    let passcode = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let slug = slug.get();
        #[cfg(feature = "hydrate")]
        {
            let cache = PasscodeCache::new(BrowserStorage);
            let (initial, cached) = initial_gate(&cache, &slug);
            gate.set(initial);
            if let Some(code) = cached {
                leptos::task::spawn_local(async move {
                    let api = crate::net::api::ApiClient::anonymous();
                    gate.set(unlock(&api, &cache, &slug, &code).await);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = slug;
    });

    let on_unlock = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let code = match passcode_input(&passcode.get()) {
            Ok(code) => code,
            Err(message) => {
                gate.set(Gate::Prompt { error: Some(message.to_owned()) });
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::ApiClient::anonymous();
            let cache = PasscodeCache::new(BrowserStorage);
            gate.set(unlock(&api, &cache, &slug.get_untracked(), &code).await);
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = code;
    };

    view! {
        <div class="wall-page">
            {move || match gate.get() {
                Gate::Checking => view! { <p class="wall-page__status">"Loading..."</p> }.into_any(),
                Gate::Prompt { error } => {
                    view! {
                        <div class="login-card">
                            <h1>"This wall is protected"</h1>
                            <p class="login-card__subtitle">"Enter the passcode to view contributions."</p>
                            <form class="login-form" on:submit=on_unlock>
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Passcode"
                                    prop:value=move || passcode.get()
                                    on:input=move |ev| passcode.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Checking..." } else { "View Wall" }}
                                </button>
                            </form>
                            {error.map(|e| view! { <p class="login-message login-message--error">{e}</p> })}
                        </div>
                    }
                        .into_any()
                }
                Gate::Open(wall) => view! { <WallContents wall=wall/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn WallContents(wall: PublicWall) -> impl IntoView {
    let contents = wall.contents;
    let count = contribution_count_label(contents.len());
    let empty = contents.is_empty();

    view! {
        <header class="wall-page__header">
            <h1>{wall.title}</h1>
            {wall.description.map(|d| view! { <p class="wall-page__description">{d}</p> })}
            <p class="wall-page__count">{count}</p>
        </header>
        <Show
            when=move || !empty
            fallback=|| view! { <p class="wall-page__empty">"No contributions yet"</p> }
        >
            <div class="wall-page__grid">
                {contents.clone().into_iter().map(|content| view! { <ContentCard content=content/> }).collect_view()}
            </div>
        </Show>
    }
}
