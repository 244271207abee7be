//! Database models
//!
//! Data structures representing database tables

use serde::{Deserialize, Serialize};

/// User record in the database
///
/// password_hash is only ever produced by the password hasher; the raw
/// password is never stored and never serialized back out of the API layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub birthday: Option<String>,
    pub created_at: String,
}

/// Movie record in the database
///
/// Genre and director are embedded sub-documents of the movie, flattened
/// into columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year: Option<i32>,
    pub genre_name: Option<String>,
    pub genre_description: Option<String>,
    pub director_name: Option<String>,
    pub director_bio: Option<String>,
    pub image_url: Option<String>,
    pub featured: i32, // 0 or 1
    pub created_at: String,
}

/// Favorite record in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub movie_id: String,
    pub created_at: String,
}
