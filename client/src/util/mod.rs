//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clipboard,
//! file handles) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod files;
pub mod format;
pub mod passcode_cache;
pub mod share;
pub mod storage;
pub mod validation;
