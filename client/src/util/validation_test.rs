use super::*;

#[test]
fn looks_like_email_requires_both_sides_of_at() {
    assert!(looks_like_email("a@b"));
    assert!(looks_like_email("friend@example.com"));
    assert!(!looks_like_email("@example.com"));
    assert!(!looks_like_email("friend@"));
    assert!(!looks_like_email("friend.example.com"));
}

#[test]
fn looks_like_email_rejects_whitespace() {
    assert!(!looks_like_email("a b@c.com"));
    assert!(!looks_like_email(""));
}
