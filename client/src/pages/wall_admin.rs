//! Wall administration page: access details, visibility, contributors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owner-only route at `/admin/wall/{id}`. Each mutation re-fetches the wall
//! or contributor list it touched rather than patching local state. A rejected
//! token ends the session, which in turn redirects to `/login`; a wall that
//! fails its first load sends the owner back to `/dashboard`.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Contributor, Wall};
use crate::pages::dashboard::{copy_with_notice, wall_path};
use crate::state::session::SessionState;
use crate::state::wall_admin::{
    DELETE_WALL_PROMPT, REMOVE_CONTRIBUTOR_PROMPT, WallAdminState, contributor_status, invite_request, parse_wall_id,
    visibility_label, visibility_toggle,
};
use crate::util::auth::install_unauth_redirect;
use crate::util::format::display_date;
use crate::util::share::{confirm, contribute_link, origin, public_link};

#[cfg(feature = "hydrate")]
use crate::net::api::{ApiClient, ApiError, WallApi};
#[cfg(feature = "hydrate")]
use crate::state::wall_admin::returns_to_dashboard;
#[cfg(feature = "hydrate")]
use crate::util::auth::expire_on_unauthorized;

#[cfg(feature = "hydrate")]
fn fail(session: RwSignal<SessionState>, state: RwSignal<WallAdminState>, error: &ApiError) {
    expire_on_unauthorized(session, error);
    state.update(|s| {
        s.loading = false;
        s.error = Some(error.to_string());
    });
}

#[cfg(feature = "hydrate")]
async fn reload_wall(
    api: &ApiClient,
    wall_id: i64,
    session: RwSignal<SessionState>,
    state: RwSignal<WallAdminState>,
) {
    match api.fetch_wall(wall_id).await {
        Ok(wall) => state.update(|s| {
            s.wall = Some(wall);
            s.loading = false;
        }),
        Err(e) => fail(session, state, &e),
    }
}

/// First fetch of the page; a wall the owner can't open sends them back to
/// `/dashboard`.
#[cfg(feature = "hydrate")]
async fn first_load(
    api: &ApiClient,
    wall_id: i64,
    session: RwSignal<SessionState>,
    state: RwSignal<WallAdminState>,
) {
    match api.fetch_wall(wall_id).await {
        Ok(wall) => {
            state.update(|s| {
                s.wall = Some(wall);
                s.loading = false;
            });
            reload_contributors(api, wall_id, session, state).await;
        }
        Err(e) if state.with_untracked(|s| returns_to_dashboard(s, &e)) => {
            log::warn!("wall {wall_id} unavailable: {e}");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/dashboard");
            }
        }
        Err(e) => fail(session, state, &e),
    }
}

#[cfg(feature = "hydrate")]
async fn reload_contributors(
    api: &ApiClient,
    wall_id: i64,
    session: RwSignal<SessionState>,
    state: RwSignal<WallAdminState>,
) {
    match api.list_contributors(wall_id).await {
        Ok(list) => state.update(|s| s.contributors = list),
        Err(e) => fail(session, state, &e),
    }
}

#[component]
pub fn WallAdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let state = RwSignal::new(WallAdminState { loading: true, ..WallAdminState::default() });
    let notice = RwSignal::new(None::<String>);
    let invite_email = RwSignal::new(String::new());
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let wall_id = Memo::new(move |_| params.with(|p| p.get("id")).as_deref().and_then(parse_wall_id));

    Effect::new(move || {
        let current = session.get();
        if current.loading || !current.is_authenticated() {
            return;
        }
        let Some(id) = wall_id.get() else {
            state.update(|s| {
                s.loading = false;
                s.error = Some("Invalid wall id".to_owned());
            });
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = current.api();
            leptos::task::spawn_local(async move {
                first_load(&api, id, session, state).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_toggle_visibility = move |()| {
        let Some(wall) = state.get_untracked().wall else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let api = session.get_untracked().api();
            let request = visibility_toggle(&wall);
            leptos::task::spawn_local(async move {
                match api.update_wall(wall.id, &request).await {
                    Ok(_) => reload_wall(&api, wall.id, session, state).await,
                    Err(e) => fail(session, state, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = visibility_toggle(&wall);
    };

    let on_invite = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = wall_id.get_untracked() else {
            return;
        };
        let request = match invite_request(&invite_email.get_untracked(), id) {
            Ok(request) => request,
            Err(message) => {
                state.update(|s| s.error = Some(message.to_owned()));
                return;
            }
        };
        state.update(|s| s.error = None);

        #[cfg(feature = "hydrate")]
        {
            let api = session.get_untracked().api();
            leptos::task::spawn_local(async move {
                match api.invite_contributor(&request).await {
                    Ok(contributor) => {
                        invite_email.set(String::new());
                        notice.set(Some(format!("Invitation sent to {}", contributor.email)));
                        reload_contributors(&api, id, session, state).await;
                    }
                    Err(e) => fail(session, state, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_remove = move |contributor_id: i64| {
        if !confirm(REMOVE_CONTRIBUTOR_PROMPT) {
            return;
        }
        let Some(id) = wall_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let api = session.get_untracked().api();
            leptos::task::spawn_local(async move {
                match api.remove_contributor(contributor_id).await {
                    Ok(()) => reload_contributors(&api, id, session, state).await,
                    Err(e) => fail(session, state, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (contributor_id, id);
    };

    let on_delete = move |()| {
        if !confirm(DELETE_WALL_PROMPT) {
            return;
        }
        let Some(id) = wall_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let api = session.get_untracked().api();
            leptos::task::spawn_local(async move {
                match api.delete_wall(id).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(e) => fail(session, state, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header toolbar">
                <a class="btn" href="/dashboard">"← Dashboard"</a>
                <span class="toolbar__title">
                    {move || state.get().wall.map(|w| w.title).unwrap_or_else(|| "Wall".to_owned())}
                </span>
            </header>

            <Show when=move || notice.get().is_some()>
                <p class="notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.get().error.is_some()>
                <p class="admin-page__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || state.get().wall.is_some()
                fallback=move || {
                    view! { <p>{move || if state.get().loading { "Loading wall..." } else { "" }}</p> }
                }
            >
                {move || {
                    state.get().wall.map(|wall| view! {
                        <WallDetails
                            wall=wall
                            notice=notice
                            on_toggle=Callback::new(on_toggle_visibility)
                            on_delete=Callback::new(on_delete)
                        />
                    })
                }}
            </Show>

            <section class="admin-page__section">
                <h2>"Contributors"</h2>
                <form class="invite-form" on:submit=on_invite>
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="friend@example.com"
                        prop:value=move || invite_email.get()
                        on:input=move |ev| invite_email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Invite"</button>
                </form>
                <Show
                    when=move || !state.get().contributors.is_empty()
                    fallback=move || view! { <p class="admin-page__empty">"No contributors yet."</p> }
                >
                    <ul class="contributor-list">
                        <For
                            each=move || state.get().contributors
                            key=|c| (c.id, c.accepted_at.clone())
                            children=move |contributor| {
                                view! { <ContributorRow contributor=contributor on_remove=Callback::new(on_remove)/> }
                            }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn WallDetails(
    wall: Wall,
    notice: RwSignal<Option<String>>,
    on_toggle: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let base = origin();
    let public = public_link(&base, &wall.unique_url);
    let share = contribute_link(&base, &wall.unique_url, &wall.passcode);
    let slug = wall.unique_url.clone();
    let passcode = wall.passcode.clone();
    let toggle_label = if wall.is_public { "Make Private" } else { "Make Public" };

    view! {
        <section class="admin-page__section">
            {wall.description.clone().map(|d| view! { <p class="admin-page__description">{d}</p> })}
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
                    <button class="btn btn--small" on:click=move |_| copy_with_notice(notice, "Passcode", &passcode)>
                        "Copy"
                    </button>
                </dd>
                <dt>"Public link"</dt>
                <dd>
                    <code>{public.clone()}</code>
                    <button class="btn btn--small" on:click=move |_| copy_with_notice(notice, "Public link", &public)>
                        "Copy"
                    </button>
                </dd>
                <dt>"Share link"</dt>
                <dd>
                    <code>{share.clone()}</code>
                    <button class="btn btn--small" on:click=move |_| copy_with_notice(notice, "Share link", &share)>
                        "Copy"
                    </button>
                </dd>
                <dt>"Visibility"</dt>
                <dd>
                    <span class="badge">{visibility_label(wall.is_public)}</span>
                    <button class="btn btn--small" on:click=move |_| on_toggle.run(())>{toggle_label}</button>
                </dd>
            </dl>
            <div class="wall-card__actions">
                <a class="btn" href=wall_path(&slug)>"View Wall"</a>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(())>"Delete Wall"</button>
            </div>
        </section>
    }
}

#[component]
fn ContributorRow(contributor: Contributor, on_remove: Callback<i64>) -> impl IntoView {
    let status = contributor_status(&contributor);
    let invited = contributor.invited_at.as_deref().map(display_date);
    let id = contributor.id;

    view! {
        <li class="contributor-list__row">
            <span class="contributor-list__email">{contributor.email}</span>
            <span class=format!("badge badge--{}", status.to_ascii_lowercase())>{status}</span>
            {invited.map(|date| view! { <span class="contributor-list__date">"Invited " {date}</span> })}
            <button class="btn btn--small btn--danger" on:click=move |_| on_remove.run(id)>
                "Remove"
            </button>
        </li>
    }
}
