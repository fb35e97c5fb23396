//! Dashboard page listing the owner's walls with create and share actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The wall list is fetched once the
//! session has loaded; creating a wall appends the server's response to the
//! list. Management actions live on the admin page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::encode_segment;
use crate::net::types::Wall;
use crate::state::session::SessionState;
use crate::state::walls::{NewWallDraft, WallsState};
use crate::util::auth::install_unauth_redirect;
#[cfg(feature = "hydrate")]
use crate::util::auth::expire_on_unauthorized;
use crate::util::format::display_date;
use crate::util::share::{contribute_link, copy_to_clipboard, origin};
use crate::util::storage::BrowserStorage;

/// Admin route for `wall_id`.
#[must_use]
pub fn admin_path(wall_id: i64) -> String {
    format!("/admin/wall/{wall_id}")
}

/// Public viewer route for `slug`.
#[must_use]
pub fn wall_path(slug: &str) -> String {
    format!("/wall/{}", encode_segment(slug))
}

#[must_use]
pub fn copied_notice(label: &str) -> String {
    format!("{label} copied to clipboard")
}

/// Copy `text` and flash a notice naming what was copied.
pub(crate) fn copy_with_notice(notice: RwSignal<Option<String>>, label: &str, text: &str) {
    if copy_to_clipboard(text) {
        notice.set(Some(copied_notice(label)));
    }
}

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let walls = RwSignal::new(WallsState { loading: true, ..WallsState::default() });
    let notice = RwSignal::new(None::<String>);
    install_unauth_redirect(session, use_navigate());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let state = session.get();
        if requested.get_untracked() || state.loading || !state.is_authenticated() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = state.api();
            leptos::task::spawn_local(async move {
                match api.list_walls().await {
                    Ok(list) => walls.update(|w| w.loaded(list)),
                    Err(e) => {
                        expire_on_unauthorized(session, &e);
                        walls.update(|w| w.failed(e.to_string()));
                    }
                }
            });
        }
    });

    let show_create = RwSignal::new(false);
    let draft = RwSignal::new(NewWallDraft::default());

    let on_create = move |_| {
        draft.set(NewWallDraft::default());
        show_create.set(true);
    };
    let on_cancel = Callback::new(move |()| show_create.set(false));

    let on_logout = move |_| session.update(|s| s.teardown(&BrowserStorage));

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"My Wishing Walls"</span>
                    <button class="btn btn--primary" on:click=on_create>
                        "+ New Wall"
                    </button>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{move || session.get().display_name()}</span>
                    <button class="btn toolbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>

                <Show when=move || notice.get().is_some()>
                    <p class="notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || walls.get().error.is_some()>
                    <p class="dashboard-page__error">{move || walls.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !walls.get().loading
                    fallback=move || view! { <p>"Loading walls..."</p> }
                >
                    <Show
                        when=move || !walls.get().items.is_empty()
                        fallback=move || {
                            view! { <p class="dashboard-page__empty">"No walls yet. Create your first one!"</p> }
                        }
                    >
                        <div class="dashboard-page__cards">
                            <For
                                each=move || walls.get().items
                                key=|wall| wall.id
                                children=move |wall| view! { <WallCard wall=wall notice=notice/> }
                            />
                        </div>
                    </Show>
                </Show>

                <Show when=move || show_create.get()>
                    <CreateWallDialog draft=draft walls=walls on_cancel=on_cancel/>
                </Show>
            </div>
        </Show>
    }
}

/// One wall with its access details and navigation.
#[component]
fn WallCard(wall: Wall, notice: RwSignal<Option<String>>) -> impl IntoView {
    let slug = wall.unique_url.clone();
    let passcode = wall.passcode.clone();
    let share = contribute_link(&origin(), &slug, &passcode);
    let created = wall.created_at.as_deref().map(display_date);

    view! {
        <div class="wall-card">
            <h3 class="wall-card__title">{wall.title.clone()}</h3>
            {wall.description.clone().map(|d| view! { <p class="wall-card__description">{d}</p> })}
            <dl class="wall-card__meta">
                <dt>"URL"</dt>
                <dd>
                    <code>{slug.clone()}</code>
                    <button class="btn btn--small" on:click={
                        let slug = slug.clone();
                        move |_| copy_with_notice(notice, "Wall URL", &slug)
                    }>"Copy"</button>
                </dd>
                <dt>"Passcode"</dt>
                <dd>
                    <code>{passcode.clone()}</code>
                    <button class="btn btn--small" on:click={
                        let passcode = passcode.clone();
                        move |_| copy_with_notice(notice, "Passcode", &passcode)
                    }>"Copy"</button>
                </dd>
            </dl>
            {created.map(|date| view! { <p class="wall-card__date">"Created " {date}</p> })}
            <div class="wall-card__actions">
                <a class="btn" href=admin_path(wall.id)>"Manage"</a>
                <a class="btn" href=wall_path(&slug)>"View"</a>
                <button class="btn" on:click=move |_| copy_with_notice(notice, "Share link", &share)>
                    "Share"
                </button>
            </div>
        </div>
    }
}

/// Modal dialog for creating a new wall.
#[component]
fn CreateWallDialog(
    draft: RwSignal<NewWallDraft>,
    walls: RwSignal<WallsState>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match draft.with(NewWallDraft::to_request) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = session.get_untracked().api();
            leptos::task::spawn_local(async move {
                match api.create_wall(&request).await {
                    Ok(wall) => {
                        walls.update(|w| w.push_created(wall));
                        on_cancel.run(());
                    }
                    Err(e) => {
                        expire_on_unauthorized(session, &e);
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session, walls);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>"Create Wishing Wall"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().title
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description (optional)"
                    <textarea
                        class="dialog__input"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
