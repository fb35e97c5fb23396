//! Login and registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form toggles between sign-in and account creation. Both modes end the
//! same way: the `AuthResponse` is adopted into the session context (and
//! persisted), then the owner lands on `/dashboard`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::session::SessionState;
use crate::util::validation::{MIN_PASSWORD_LEN, looks_like_email};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in to WishingWall",
            Self::Register => "Create your account",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Register => "Create Account",
        }
    }

    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Don't have an account? Register",
            Self::Register => "Already have an account? Sign in",
        }
    }
}

/// A validated form, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    SignIn(LoginRequest),
    Register(RegisterRequest),
}

/// Check the form for `mode`. Email is trimmed; the password is sent as typed.
///
/// # Errors
///
/// Returns the first failing rule as a user-facing message.
pub fn validate_credentials(
    mode: AuthMode,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if !looks_like_email(email) {
        return Err("Please enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    match mode {
        AuthMode::SignIn => Ok(Credentials::SignIn(LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        })),
        AuthMode::Register => {
            let full_name = full_name.trim();
            if full_name.is_empty() {
                return Err("Please enter your full name");
            }
            Ok(Credentials::Register(RegisterRequest {
                email: email.to_owned(),
                password: password.to_owned(),
                full_name: full_name.to_owned(),
            }))
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let mode = RwSignal::new(AuthMode::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Already signed in: skip the form.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.loading && state.is_authenticated() {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(mode.get(), &email.get(), &password.get(), &full_name.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::ApiClient::anonymous();
                let result = match &credentials {
                    Credentials::SignIn(request) => api.login(request).await,
                    Credentials::Register(request) => api.register(request).await,
                };
                match result {
                    Ok(auth) => {
                        session.update(|s| s.establish(&crate::util::storage::BrowserStorage, auth));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("authentication failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, session);
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        error.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || mode.get().heading()}</h1>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().submit_label() }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="login-toggle" type="button" on:click=on_toggle>
                    {move || mode.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}
