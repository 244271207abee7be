//! Authentication API handlers
//!
//! Registration and login flows. Login deliberately returns the same
//! rejection for an unknown username and a wrong password so responses
//! cannot be used to enumerate accounts.

use crate::api::handlers::AppState;
use crate::api::models::UserResponse;
use crate::api::validate::validate_new_user;
use crate::auth::models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::auth::password::{hash_password, verify_password};
use crate::core::error::{MyflixError, Result};
use crate::db::models::User;
use crate::db::repository::Repository;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

/// Handler for POST /users - User registration
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!(username = %req.username, "User registration attempt");

    // Validate before touching the store
    validate_new_user(&req.username, &req.password, &req.email)?;

    // The raw password exists only on this stack frame; only its hash is kept
    let password_hash = hash_password(&req.password)?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        username: req.username.clone(),
        password_hash,
        email: req.email.clone(),
        birthday: req.birthday.clone(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    // The UNIQUE constraint on username decides concurrent duplicates:
    // the first writer wins, the loser gets a Conflict from the repository.
    match state.user_repo.create(&user).await {
        Ok(_) => {
            tracing::info!(
                user_id = %user.id,
                username = %user.username,
                "User registered successfully"
            );
            Ok((
                StatusCode::CREATED,
                Json(UserResponse::from_user(user, Vec::new())),
            ))
        }
        Err(e) => {
            tracing::warn!(username = %req.username, error = %e, "Registration failed");
            Err(e)
        }
    }
}

/// Handler for POST /login - Credential exchange
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    tracing::info!(username = %req.username, "Login attempt");

    // Find user by username; an unknown name gets the same rejection as a
    // wrong password below
    let user = state
        .user_repo
        .find_by_username(&req.username)
        .await?
        .ok_or(MyflixError::InvalidCredentials)?;

    // Verify password
    let is_valid = verify_password(&req.password, &user.password_hash)?;
    if !is_valid {
        tracing::warn!(username = %req.username, "Invalid password");
        return Err(MyflixError::InvalidCredentials);
    }

    // Issue the bearer token for the verified identity
    let token = state.tokens.issue(&user.username)?;

    tracing::info!(user_id = %user.id, username = %user.username, "Login successful");

    let favorites = state.favorite_repo.movie_ids_for_user(&user.id).await?;

    Ok(Json(LoginResponse {
        user: UserResponse::from_user(user, favorites),
        token,
    }))
}
