//! Password hashing and verification using bcrypt
//!
//! bcrypt embeds a random per-hash salt, so hashing the same password twice
//! yields different strings that both verify against it.

use crate::core::error::{MyflixError, Result};

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| MyflixError::DependencyError(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored hash
///
/// A malformed stored hash is a data integrity error, not a failed login:
/// it surfaces as a 500-class error rather than rejecting the credentials.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| MyflixError::DependencyError(format!("Malformed password hash: {}", e)))
}
