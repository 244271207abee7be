//! User-facing request/response models

use crate::db::models::User;
use serde::{Deserialize, Serialize};

/// Identity as returned by the API.
///
/// Deliberately has no password field of any kind; this type is the only
/// shape in which a user record leaves the server.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub birthday: Option<String>,
    /// Favorited movie IDs, in insertion order
    pub favorites: Vec<String>,
}

impl UserResponse {
    pub fn from_user(user: User, favorites: Vec<String>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            birthday: user.birthday,
            favorites,
        }
    }
}

/// Update user request; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<String>,
}
