//! User profile and favorites handlers
//!
//! Every route here is scoped to the authenticated identity: the username in
//! the path must match the token's resolved subject, even when the token is
//! otherwise valid. A valid token for bob never touches alice's account.

use crate::api::models::{UpdateUserRequest, UserResponse};
use crate::api::validate::validate_profile_update;
use crate::auth::middleware::AuthUser;
use crate::auth::password::hash_password;
use crate::core::error::{MyflixError, Result};
use crate::db::models::Favorite;
use crate::db::repository::Repository;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use super::AppState;

fn ensure_self(user: &AuthUser, username: &str) -> Result<()> {
    if user.username != username {
        return Err(MyflixError::PermissionDenied(
            "You can only act on your own account".to_string(),
        ));
    }
    Ok(())
}

/// Assemble the API view of the authenticated user, favorites included
async fn user_response(state: &AppState, user_id: &str) -> Result<UserResponse> {
    let user = state
        .user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| MyflixError::NotFound(format!("User {} not found", user_id)))?;
    let favorites = state.favorite_repo.movie_ids_for_user(user_id).await?;
    Ok(UserResponse::from_user(user, favorites))
}

/// Handler for GET /users/:username - Own profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    user: AuthUser,
) -> Result<Json<UserResponse>> {
    ensure_self(&user, &username)?;
    Ok(Json(user_response(&state, &user.id).await?))
}

/// Handler for PUT /users/:username - Update own identity
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    user: AuthUser,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>> {
    ensure_self(&user, &username)?;

    validate_profile_update(
        req.username.as_deref(),
        req.password.as_deref(),
        req.email.as_deref(),
    )?;

    let mut record = state
        .user_repo
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| MyflixError::NotFound(format!("User {} not found", username)))?;

    if let Some(new_username) = req.username {
        record.username = new_username;
    }
    if let Some(new_password) = req.password {
        record.password_hash = hash_password(&new_password)?;
    }
    if let Some(new_email) = req.email {
        record.email = new_email;
    }
    if let Some(new_birthday) = req.birthday {
        record.birthday = Some(new_birthday);
    }

    // A username change can collide; the repository reports it as Conflict
    state.user_repo.update(&record).await?;

    tracing::info!(user_id = %user.id, "User profile updated");

    Ok(Json(user_response(&state, &user.id).await?))
}

/// Handler for DELETE /users/:username - Deregister own account
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    user: AuthUser,
) -> Result<impl IntoResponse> {
    ensure_self(&user, &username)?;

    state
        .user_repo
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| MyflixError::NotFound(format!("User {} not found", username)))?;

    state.user_repo.delete(&user.id).await?;

    tracing::info!(user_id = %user.id, username = %username, "User deregistered");

    Ok(format!("User {} has been deregistered.", username))
}

/// Handler for PUT /users/:username/movies/:movie_id - Add a favorite
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((username, movie_id)): Path<(String, String)>,
    user: AuthUser,
) -> Result<Json<UserResponse>> {
    ensure_self(&user, &username)?;

    state
        .movie_repo
        .find_by_id(&movie_id)
        .await?
        .ok_or_else(|| MyflixError::NotFound(format!("Movie {} not found", movie_id)))?;

    let favorite = Favorite {
        id: Uuid::new_v4().to_string(),
        user_id: user.id.clone(),
        movie_id: movie_id.clone(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    // Duplicate inserts are suppressed at the store level
    let inserted = state.favorite_repo.add(&favorite).await?;
    if inserted {
        tracing::info!(user_id = %user.id, movie_id = %movie_id, "Favorite added");
    }

    Ok(Json(user_response(&state, &user.id).await?))
}

/// Handler for DELETE /users/:username/movies/:movie_id - Remove a favorite
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((username, movie_id)): Path<(String, String)>,
    user: AuthUser,
) -> Result<Json<UserResponse>> {
    ensure_self(&user, &username)?;

    let removed = state.favorite_repo.remove(&user.id, &movie_id).await?;
    if removed {
        tracing::info!(user_id = %user.id, movie_id = %movie_id, "Favorite removed");
    }

    Ok(Json(user_response(&state, &user.id).await?))
}
