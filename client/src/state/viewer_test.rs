use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::state::fake_api::{FakeApi, public_wall};
use crate::util::storage::MemoryStore;

const SLUG: &str = "aB3dE6gH9k";

#[test]
fn no_cached_passcode_starts_at_prompt() {
    let cache = PasscodeCache::new(MemoryStore::default());
    assert_eq!(initial_gate(&cache, SLUG), (Gate::Prompt { error: None }, None));
}

#[test]
fn cached_passcode_skips_prompt() {
    let cache = PasscodeCache::new(MemoryStore::default());
    cache.remember(SLUG, "123456");
    let (gate, passcode) = initial_gate(&cache, SLUG);
    assert_eq!(gate, Gate::Checking);
    assert!(!gate.shows_prompt());
    assert_eq!(passcode.as_deref(), Some("123456"));

    let api = FakeApi::default();
    let opened = block_on(unlock(&api, &cache, SLUG, "123456"));
    assert_eq!(opened, Gate::Open(public_wall()));
    assert_eq!(api.calls(), vec!["fetch_public_wall:aB3dE6gH9k:123456"]);
}

#[test]
fn rejected_cached_passcode_is_evicted_and_prompt_returns() {
    let cache = PasscodeCache::new(MemoryStore::default());
    cache.remember(SLUG, "999999");
    let api = FakeApi {
        public_wall: Err(ApiError::Unauthorized("Invalid passcode".to_owned())),
        ..FakeApi::default()
    };
    let gate = block_on(unlock(&api, &cache, SLUG, "999999"));
    assert_eq!(gate, Gate::Prompt { error: Some("Invalid passcode".to_owned()) });
    assert_eq!(cache.get(SLUG), None);
    assert_eq!(initial_gate(&cache, SLUG).0, Gate::Prompt { error: None });
}

#[test]
fn network_failure_keeps_cached_passcode() {
    let cache = PasscodeCache::new(MemoryStore::default());
    cache.remember(SLUG, "123456");
    let api = FakeApi {
        public_wall: Err(ApiError::Network("connection reset".to_owned())),
        ..FakeApi::default()
    };
    let gate = block_on(unlock(&api, &cache, SLUG, "123456"));
    assert!(gate.shows_prompt());
    assert_eq!(cache.get(SLUG).as_deref(), Some("123456"));
}

#[test]
fn missing_wall_evicts_cached_passcode() {
    let cache = PasscodeCache::new(MemoryStore::default());
    cache.remember(SLUG, "123456");
    let api = FakeApi {
        public_wall: Err(ApiError::NotFound("Wall not found".to_owned())),
        ..FakeApi::default()
    };
    block_on(unlock(&api, &cache, SLUG, "123456"));
    assert_eq!(cache.get(SLUG), None);
}

#[test]
fn accepted_passcode_is_cached_for_next_visit() {
    let cache = PasscodeCache::new(MemoryStore::default());
    let api = FakeApi::default();
    let gate = block_on(unlock(&api, &cache, SLUG, "123456"));
    assert!(gate.wall().is_some());
    assert_eq!(cache.get(SLUG).as_deref(), Some("123456"));
}

#[test]
fn carousel_wraps_both_directions() {
    let carousel = Carousel::new(3);
    assert_eq!(carousel.prev().index(), 2);
    assert_eq!(carousel.next().next().next().index(), 0);
    assert_eq!(carousel.next().position_label(), "2 / 3");
}

#[test]
fn single_image_carousel_has_no_controls() {
    assert!(!Carousel::new(1).has_controls());
    assert!(Carousel::new(2).has_controls());
    assert_eq!(Carousel::new(0).next().index(), 0);
}

#[test]
fn long_text_is_truncated_until_expanded() {
    let text = "a".repeat(TRUNCATE_AT + 5);
    let short = truncated(&text, TRUNCATE_AT, false);
    assert_eq!(short.len(), TRUNCATE_AT + 3);
    assert!(short.ends_with("..."));
    assert_eq!(truncated(&text, TRUNCATE_AT, true), text);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let text = "🎉".repeat(10);
    assert!(!needs_truncation(&text, 10));
    assert_eq!(truncated(&text, 4, false), format!("{}...", "🎉".repeat(4)));
}
