use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Email and password are required.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("user@example.com", "   "),
        Err("Email and password are required.")
    );
}

#[test]
fn validate_login_input_keeps_password_exact() {
    assert_eq!(
        validate_login_input("user@example.com", " spaced pass "),
        Ok(("user@example.com".to_owned(), " spaced pass ".to_owned()))
    );
}
