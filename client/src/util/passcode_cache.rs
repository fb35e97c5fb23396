//! Per-wall passcode cache for the public viewer.
//!
//! DESIGN
//! ======
//! One entry per wall slug (`wall_passcode_{slug}`). An entry is written only
//! after the API accepted the passcode, and removed as soon as the API rejects
//! it, so a stale passcode is never tried twice.

#[cfg(test)]
#[path = "passcode_cache_test.rs"]
mod passcode_cache_test;

use super::storage::KeyValueStore;

const KEY_PREFIX: &str = "wall_passcode_";

/// Passcodes remembered per wall slug.
#[derive(Clone, Copy, Debug, Default)]
pub struct PasscodeCache<S> {
    store: S,
}

impl<S: KeyValueStore> PasscodeCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn key(slug: &str) -> String {
        format!("{KEY_PREFIX}{slug}")
    }

    /// Cached passcode for `slug`; blank entries count as absent.
    pub fn get(&self, slug: &str) -> Option<String> {
        self.store
            .get(&Self::key(slug))
            .filter(|code| !code.trim().is_empty())
    }

    /// Remember a passcode the API just accepted.
    pub fn remember(&self, slug: &str, passcode: &str) {
        self.store.set(&Self::key(slug), passcode);
    }

    /// Forget the passcode for `slug` after the API rejected it.
    pub fn invalidate(&self, slug: &str) {
        self.store.remove(&Self::key(slug));
    }
}
