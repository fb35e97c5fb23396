use super::*;
use crate::state::fake_api::contributor;

fn direct() -> Identity {
    Identity::PendingDirect { wall_id: 7, wall_url: "aB3dE6gH9k".to_owned(), passcode: "123456".to_owned() }
}

#[test]
fn direct_contributors_see_a_required_name_field() {
    assert_eq!(author_label(&direct()), "Your Name *");
    assert_eq!(author_placeholder(&direct()), "Enter your name");
}

#[test]
fn invited_contributors_default_to_their_email() {
    let invited = Identity::Invited { contributor: contributor(), token: "tok".to_owned() };
    assert_eq!(author_label(&invited), "Your Name (optional)");
    assert_eq!(author_placeholder(&invited), "Defaults to friend@example.com");
}

#[test]
fn query_with_blank_token_falls_back_to_share_link() {
    let params = AccessParams::new(Some(" ".to_owned()), Some("aB3dE6gH9k".to_owned()), Some("123456".to_owned()));
    assert_eq!(
        params.path(),
        AccessPath::UrlPasscode { wall_url: "aB3dE6gH9k".to_owned(), passcode: "123456".to_owned() }
    );
}
