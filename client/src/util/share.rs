//! Share links and clipboard access.
//!
//! Owners hand out two links per wall: the public viewer link and the
//! contributor link that pre-fills URL + passcode on `/contribute`.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use crate::net::api::encode_segment;

fn encode_query(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `{origin}/wall/{slug}`.
#[must_use]
pub fn public_link(origin: &str, slug: &str) -> String {
    format!("{}/wall/{}", origin.trim_end_matches('/'), encode_segment(slug))
}

/// `{origin}/contribute?url={slug}&passcode={passcode}`.
#[must_use]
pub fn contribute_link(origin: &str, slug: &str, passcode: &str) -> String {
    format!(
        "{}/contribute?url={}&passcode={}",
        origin.trim_end_matches('/'),
        encode_query(slug),
        encode_query(passcode)
    )
}

/// Current page origin; empty during server rendering.
#[must_use]
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Copy `text` to the clipboard. Returns whether a clipboard was available.
pub fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let _ = window.navigator().clipboard().write_text(text);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Blocking browser confirmation; `false` outside the browser.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
