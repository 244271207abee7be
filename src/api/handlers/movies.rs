//! Movie catalog handlers
//!
//! All routes here sit behind the auth gate; by the time a handler runs the
//! request carries a verified identity. The lookups themselves are plain
//! field-match queries.

use crate::api::models::{DirectorResponse, GenreResponse, MovieResponse};
use crate::core::error::{MyflixError, Result};
use crate::db::repository::Repository;
use axum::{
    extract::{Path, State},
    Json,
};

use super::AppState;

/// Handler for GET /movies - Full catalog
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<MovieResponse>>> {
    let movies = state.movie_repo.find_all().await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Handler for GET /movies/:title - Single movie by title
pub async fn get_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<MovieResponse>> {
    let movie = state
        .movie_repo
        .find_by_title(&title)
        .await?
        .ok_or_else(|| MyflixError::NotFound(format!("Movie '{}' not found", title)))?;

    Ok(Json(MovieResponse::from(movie)))
}

/// Handler for GET /genres/:name - Genre description
pub async fn get_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<GenreResponse>> {
    let (name, description) = state
        .movie_repo
        .find_genre(&name)
        .await?
        .ok_or_else(|| MyflixError::NotFound(format!("Genre '{}' not found", name)))?;

    Ok(Json(GenreResponse { name, description }))
}

/// Handler for GET /directors/:name - Director bio
pub async fn get_director(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DirectorResponse>> {
    let (name, bio) = state
        .movie_repo
        .find_director(&name)
        .await?
        .ok_or_else(|| MyflixError::NotFound(format!("Director '{}' not found", name)))?;

    Ok(Json(DirectorResponse { name, bio }))
}
