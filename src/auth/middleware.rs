//! Authentication middleware
//!
//! The auth gate for protected routes: extracts the bearer token, verifies
//! signature and expiry, then re-resolves the subject against the user store
//! before letting the request through. A deleted user's still-valid token
//! stops working on the next request, not at token expiry.
//!
//! The gate never mutates anything and never extends a token's lifetime.

use crate::core::error::{MyflixError, Result};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Extension to store the authenticated identity in the request
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Authentication middleware
pub async fn authenticate(
    State(state): State<crate::api::handlers::AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    use axum::http::header;

    // Token transport is the Authorization header, nothing else
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer ").map(|t| t.to_string()));

    let token = match token {
        Some(t) => t,
        None => {
            let error =
                MyflixError::AuthenticationError("Missing authentication token".to_string());
            return error.into_response();
        }
    };

    // Validate signature and expiry
    let claims = match state.tokens.verify(&token) {
        Ok(c) => c,
        Err(e) => return e.into_response(),
    };

    // Re-resolve the subject; a token for a deleted user is invalid
    let user_result = state.user_repo.find_by_username(&claims.sub).await;

    let user = match user_result {
        Ok(Some(u)) => u,
        Ok(None) => {
            let error = MyflixError::AuthenticationError("Invalid token".to_string());
            return error.into_response();
        }
        Err(e) => return e.into_response(), // Database error
    };

    // Store authenticated identity in request extensions
    request.extensions_mut().insert(AuthUser {
        id: user.id,
        username: user.username,
        email: user.email,
    });

    next.run(request).await
}

// Implement FromRequestParts for AuthUser to enable extraction in handlers
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = MyflixError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| MyflixError::AuthenticationError("User not authenticated".to_string()))
    }
}
