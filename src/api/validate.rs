//! Input validation for user-supplied fields
//!
//! All checks run before any store access. Failures are itemized per field
//! and joined into a single ValidationError (422).

use crate::core::error::{MyflixError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9]{5,}$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

fn username_error(username: &str) -> Option<String> {
    if USERNAME_RE.is_match(username) {
        None
    } else {
        Some("username must be at least 5 alphanumeric characters".to_string())
    }
}

fn email_error(email: &str) -> Option<String> {
    if EMAIL_RE.is_match(email) {
        None
    } else {
        Some("email must be a valid email address".to_string())
    }
}

fn password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("password must not be empty".to_string())
    } else {
        None
    }
}

fn collect(errors: Vec<Option<String>>) -> Result<()> {
    let errors: Vec<String> = errors.into_iter().flatten().collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(MyflixError::ValidationError(errors.join("; ")))
    }
}

/// Validate the fields of a registration request
pub fn validate_new_user(username: &str, password: &str, email: &str) -> Result<()> {
    collect(vec![
        username_error(username),
        password_error(password),
        email_error(email),
    ])
}

/// Validate the provided fields of a profile update; absent fields pass
pub fn validate_profile_update(
    username: Option<&str>,
    password: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    collect(vec![
        username.and_then(username_error),
        password.and_then(password_error),
        email.and_then(email_error),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_new_user("johndoe123", "Secr3t!", "j@x.com").is_ok());
    }

    #[test]
    fn test_short_username_rejected() {
        assert!(validate_new_user("jo", "Secr3t!", "j@x.com").is_err());
    }

    #[test]
    fn test_non_alphanumeric_username_rejected() {
        assert!(validate_new_user("john doe", "Secr3t!", "j@x.com").is_err());
        assert!(validate_new_user("john_doe", "Secr3t!", "j@x.com").is_err());
        assert!(validate_new_user("jöhndoe", "Secr3t!", "j@x.com").is_err());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(validate_new_user("johndoe123", "", "j@x.com").is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        assert!(validate_new_user("johndoe123", "Secr3t!", "not-an-email").is_err());
        assert!(validate_new_user("johndoe123", "Secr3t!", "a@b").is_err());
        assert!(validate_new_user("johndoe123", "Secr3t!", "a b@x.com").is_err());
    }

    #[test]
    fn test_errors_are_itemized() {
        let err = validate_new_user("jo", "", "nope").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("username"));
        assert!(message.contains("password"));
        assert!(message.contains("email"));
    }

    #[test]
    fn test_update_skips_absent_fields() {
        assert!(validate_profile_update(None, None, None).is_ok());
        assert!(validate_profile_update(Some("johndoe123"), None, None).is_ok());
        assert!(validate_profile_update(Some("jo"), None, None).is_err());
        assert!(validate_profile_update(None, Some(""), None).is_err());
    }

    proptest! {
        // Any alphanumeric name of length >= 5 is accepted
        #[test]
        fn prop_alphanumeric_usernames_accepted(name in "[A-Za-z0-9]{5,30}") {
            prop_assert!(username_error(&name).is_none());
        }

        // Any name shorter than 5 characters is rejected
        #[test]
        fn prop_short_usernames_rejected(name in "[A-Za-z0-9]{0,4}") {
            prop_assert!(username_error(&name).is_some());
        }
    }
}
