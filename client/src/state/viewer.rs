//! Public wall viewer state: passcode gate, carousel, and text truncation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate consults `PasscodeCache` at mount. A cached passcode is tried
//! without prompting; whichever passcode the API rejects is evicted from the
//! cache and the prompt re-appears with the server's message.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::net::api::WallApi;
use crate::net::types::PublicWall;
use crate::util::passcode_cache::PasscodeCache;
use crate::util::storage::KeyValueStore;

/// Characters shown before "Read More".
pub const TRUNCATE_AT: usize = 200;

/// Passcode gate lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Gate {
    /// Waiting on a verification request.
    #[default]
    Checking,
    Prompt { error: Option<String> },
    Open(PublicWall),
}

impl Gate {
    #[must_use]
    pub fn shows_prompt(&self) -> bool {
        matches!(self, Self::Prompt { .. })
    }

    #[must_use]
    pub fn wall(&self) -> Option<&PublicWall> {
        match self {
            Self::Open(wall) => Some(wall),
            _ => None,
        }
    }
}

/// Where the gate starts for `slug`: the cached passcode to try, or the prompt.
pub fn initial_gate<S: KeyValueStore>(cache: &PasscodeCache<S>, slug: &str) -> (Gate, Option<String>) {
    match cache.get(slug) {
        Some(passcode) => (Gate::Checking, Some(passcode)),
        None => (Gate::Prompt { error: None }, None),
    }
}

/// Verify `passcode` for `slug`. Success caches it; only a server rejection
/// evicts it, so a dropped connection keeps a good cached passcode.
pub async fn unlock<A: WallApi, S: KeyValueStore>(
    api: &A,
    cache: &PasscodeCache<S>,
    slug: &str,
    passcode: &str,
) -> Gate {
    match api.fetch_public_wall(slug, passcode).await {
        Ok(wall) => {
            cache.remember(slug, passcode);
            Gate::Open(wall)
        }
        Err(e) => {
            if e.is_rejection() {
                cache.invalidate(slug);
            }
            Gate::Prompt { error: Some(e.to_string()) }
        }
    }
}

/// Wrapping image carousel position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Prev/next controls only make sense with two or more images.
    #[must_use]
    pub fn has_controls(self) -> bool {
        self.len > 1
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// 1-based position indicator, e.g. `"2 / 5"`.
    #[must_use]
    pub fn position_label(self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

/// Text as displayed by the read-more widget.
#[must_use]
pub fn truncated(text: &str, max_chars: usize, expanded: bool) -> String {
    if expanded || !needs_truncation(text, max_chars) {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[must_use]
pub fn needs_truncation(text: &str, max_chars: usize) -> bool {
    text.chars().count() > max_chars
}
