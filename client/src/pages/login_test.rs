use super::*;

#[test]
fn validate_login_input_trims_the_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter22"),
        Ok(("user@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_an_email() {
    assert_eq!(
        validate_login_input("   ", "hunter22"),
        Err("Enter your email address.")
    );
}

#[test]
fn validate_login_input_requires_an_at_sign() {
    assert_eq!(
        validate_login_input("not-an-email", "hunter22"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_requires_a_password() {
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter your password.")
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("user@example.com", "  spaced  "),
        Ok(("user@example.com".to_owned(), "  spaced  ".to_owned()))
    );
}
