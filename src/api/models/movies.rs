//! Movie-facing response models
//!
//! Genre and director are stored flat on the movie row but presented as
//! nested sub-documents, matching the catalog's document shape.

use crate::db::models::Movie;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GenreResponse {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DirectorResponse {
    pub name: String,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub genre: Option<GenreResponse>,
    pub director: Option<DirectorResponse>,
    pub image_url: Option<String>,
    pub featured: bool,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            year: movie.year,
            genre: movie.genre_name.map(|name| GenreResponse {
                name,
                description: movie.genre_description,
            }),
            director: movie.director_name.map(|name| DirectorResponse {
                name,
                bio: movie.director_bio,
            }),
            image_url: movie.image_url,
            featured: movie.featured != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_and_director_are_nested() {
        let movie = Movie {
            id: "m1".to_string(),
            title: "The Matrix".to_string(),
            description: "A computer hacker discovers the world is a simulated reality."
                .to_string(),
            year: Some(1999),
            genre_name: Some("Science Fiction".to_string()),
            genre_description: Some("Movies about science and technology.".to_string()),
            director_name: Some("The Wachowski Brothers".to_string()),
            director_bio: None,
            image_url: None,
            featured: 1,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let response = MovieResponse::from(movie);
        assert_eq!(response.genre.as_ref().unwrap().name, "Science Fiction");
        assert_eq!(
            response.director.as_ref().unwrap().name,
            "The Wachowski Brothers"
        );
        assert!(response.featured);
    }

    #[test]
    fn test_missing_genre_maps_to_none() {
        let movie = Movie {
            id: "m2".to_string(),
            title: "Untitled".to_string(),
            description: "No metadata yet.".to_string(),
            year: None,
            genre_name: None,
            genre_description: None,
            director_name: None,
            director_bio: None,
            image_url: None,
            featured: 0,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let response = MovieResponse::from(movie);
        assert!(response.genre.is_none());
        assert!(response.director.is_none());
        assert!(!response.featured);
    }
}
