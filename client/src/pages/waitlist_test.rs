use super::*;

#[test]
fn validate_waitlist_email_trims_and_accepts() {
    assert_eq!(
        validate_waitlist_email("  user@example.com  "),
        Ok("user@example.com".to_owned())
    );
}

#[test]
fn validate_waitlist_email_requires_a_value() {
    assert_eq!(validate_waitlist_email("   "), Err("Enter your email address."));
}

#[test]
fn validate_waitlist_email_requires_an_at_sign() {
    assert_eq!(
        validate_waitlist_email("not-an-email"),
        Err("Enter a valid email address.")
    );
}
