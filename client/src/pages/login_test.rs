use super::*;

#[test]
fn sign_in_trims_email_and_keeps_password() {
    assert_eq!(
        validate_credentials(AuthMode::SignIn, "  owner@example.com ", " secret ", ""),
        Ok(Credentials::SignIn(LoginRequest {
            email: "owner@example.com".to_owned(),
            password: " secret ".to_owned(),
        }))
    );
}

#[test]
fn malformed_email_is_rejected_first() {
    assert_eq!(
        validate_credentials(AuthMode::Register, "owner.example.com", "", ""),
        Err("Please enter a valid email address")
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_credentials(AuthMode::SignIn, "a@b.co", "12345", ""),
        Err("Password must be at least 6 characters")
    );
}

#[test]
fn registration_requires_full_name() {
    assert_eq!(
        validate_credentials(AuthMode::Register, "a@b.co", "123456", "   "),
        Err("Please enter your full name")
    );
    assert!(matches!(
        validate_credentials(AuthMode::Register, "a@b.co", "123456", " Ada Lovelace "),
        Ok(Credentials::Register(RegisterRequest { full_name, .. })) if full_name == "Ada Lovelace"
    ));
}

#[test]
fn sign_in_ignores_full_name() {
    assert!(matches!(
        validate_credentials(AuthMode::SignIn, "a@b.co", "123456", ""),
        Ok(Credentials::SignIn(_))
    ));
}

#[test]
fn mode_toggle_round_trips() {
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::SignIn.toggled().toggled(), AuthMode::SignIn);
    assert_ne!(AuthMode::SignIn.submit_label(), AuthMode::Register.submit_label());
}
