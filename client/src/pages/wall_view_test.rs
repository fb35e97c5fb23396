use super::*;

#[test]
fn blank_passcode_is_rejected_before_any_request() {
    assert_eq!(passcode_input("   "), Err("Please enter the passcode"));
    assert_eq!(passcode_input(" 123456 "), Ok("123456".to_owned()));
}

#[test]
fn contribution_count_is_pluralized() {
    assert_eq!(contribution_count_label(0), "0 contributions");
    assert_eq!(contribution_count_label(1), "1 contribution");
    assert_eq!(contribution_count_label(12), "12 contributions");
}
