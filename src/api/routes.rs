//! API routes

use crate::api::handlers::{
    add_favorite, delete_user, get_director, get_genre, get_movie, get_user, health_check,
    list_movies, remove_favorite, update_user, welcome, AppState,
};
use crate::auth::handlers::{login, register};
use crate::auth::middleware::authenticate;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

/// Build the API routes
pub fn build_api_routes(state: AppState) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/login", post(login))
        .route("/users", post(register))
        .with_state(state.clone());

    // Protected routes (valid bearer token required)
    let protected_routes = Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/:title", get(get_movie))
        .route("/genres/:name", get(get_genre))
        .route("/directors/:name", get(get_director))
        .route(
            "/users/:username",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/users/:username/movies/:movie_id",
            put(add_favorite).delete(remove_favorite),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .with_state(state);

    Router::new().merge(public_routes).merge(protected_routes)
}
