//! Repository pattern implementation for data access layer
//!
//! This module provides the Repository pattern for abstracting database operations.

use crate::core::error::{MyflixError, Result};
use crate::db::manager::DatabaseManager;
use crate::db::models::{Favorite, Movie, User};
use async_trait::async_trait;
use rusqlite::OptionalExtension;
use std::sync::Arc;

/// Generic repository trait for CRUD operations
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Find an entity by its ID
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Find all entities
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Create a new entity
    async fn create(&self, entity: &T) -> Result<()>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> Result<()>;

    /// Delete an entity by its ID
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Translate a SQLite UNIQUE violation into a Conflict error.
///
/// The UNIQUE constraint at the store level is what makes concurrent
/// duplicate registration safe: the first writer wins, the second lands here.
fn map_constraint_error(e: rusqlite::Error, conflict_message: &str) -> MyflixError {
    match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            MyflixError::Conflict(conflict_message.to_string())
        }
        other => MyflixError::DatabaseError(other),
    }
}

/// Repository for User entities
pub struct UserRepository {
    db: Arc<DatabaseManager>,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let username = username.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT id, username, password_hash, email, birthday, created_at \
                     FROM users WHERE username = ?",
                    [&username],
                    |row| {
                        Ok(User {
                            id: row.get(0)?,
                            username: row.get(1)?,
                            password_hash: row.get(2)?,
                            email: row.get(3)?,
                            birthday: row.get(4)?,
                            created_at: row.get(5)?,
                        })
                    },
                )
                .optional()
                .map_err(MyflixError::DatabaseError)
            })
            .await
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64> {
        self.db
            .execute(|conn| {
                conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
                    .map_err(MyflixError::DatabaseError)
            })
            .await
    }
}

#[async_trait]
impl Repository<User> for UserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let id = id.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT id, username, password_hash, email, birthday, created_at \
                     FROM users WHERE id = ?",
                    [&id],
                    |row| {
                        Ok(User {
                            id: row.get(0)?,
                            username: row.get(1)?,
                            password_hash: row.get(2)?,
                            email: row.get(3)?,
                            birthday: row.get(4)?,
                            created_at: row.get(5)?,
                        })
                    },
                )
                .optional()
                .map_err(MyflixError::DatabaseError)
            })
            .await
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn
                    .prepare(
                        "SELECT id, username, password_hash, email, birthday, created_at \
                         FROM users ORDER BY created_at DESC",
                    )
                    .map_err(MyflixError::DatabaseError)?;

                let users = stmt
                    .query_map([], |row| {
                        Ok(User {
                            id: row.get(0)?,
                            username: row.get(1)?,
                            password_hash: row.get(2)?,
                            email: row.get(3)?,
                            birthday: row.get(4)?,
                            created_at: row.get(5)?,
                        })
                    })
                    .map_err(MyflixError::DatabaseError)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(MyflixError::DatabaseError)?;

                Ok(users)
            })
            .await
    }

    async fn create(&self, user: &User) -> Result<()> {
        let user = user.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO users (id, username, password_hash, email, birthday, created_at) \
                     VALUES (?, ?, ?, ?, ?, ?)",
                    rusqlite::params![
                        &user.id,
                        &user.username,
                        &user.password_hash,
                        &user.email,
                        &user.birthday,
                        &user.created_at,
                    ],
                )
                .map_err(|e| {
                    map_constraint_error(e, &format!("Username '{}' is already taken", user.username))
                })?;
                Ok(())
            })
            .await
    }

    async fn update(&self, user: &User) -> Result<()> {
        let user = user.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "UPDATE users SET username = ?, password_hash = ?, email = ?, birthday = ? \
                     WHERE id = ?",
                    rusqlite::params![
                        &user.username,
                        &user.password_hash,
                        &user.email,
                        &user.birthday,
                        &user.id,
                    ],
                )
                .map_err(|e| {
                    map_constraint_error(e, &format!("Username '{}' is already taken", user.username))
                })?;
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.db
            .execute(move |conn| {
                conn.execute("DELETE FROM users WHERE id = ?", [&id])
                    .map_err(MyflixError::DatabaseError)?;
                Ok(())
            })
            .await
    }
}

/// Repository for Movie entities
pub struct MovieRepository {
    db: Arc<DatabaseManager>,
}

impl MovieRepository {
    /// Create a new MovieRepository
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Find a movie by its exact title
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Movie>> {
        let title = title.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT id, title, description, year, genre_name, genre_description, \
                     director_name, director_bio, image_url, featured, created_at \
                     FROM movies WHERE title = ?",
                    [&title],
                    |row| {
                        Ok(Movie {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            description: row.get(2)?,
                            year: row.get(3)?,
                            genre_name: row.get(4)?,
                            genre_description: row.get(5)?,
                            director_name: row.get(6)?,
                            director_bio: row.get(7)?,
                            image_url: row.get(8)?,
                            featured: row.get(9)?,
                            created_at: row.get(10)?,
                        })
                    },
                )
                .optional()
                .map_err(MyflixError::DatabaseError)
            })
            .await
    }

    /// Find a genre by name, returning (name, description)
    pub async fn find_genre(&self, name: &str) -> Result<Option<(String, Option<String>)>> {
        let name = name.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT genre_name, genre_description FROM movies \
                     WHERE genre_name = ? LIMIT 1",
                    [&name],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()
                .map_err(MyflixError::DatabaseError)
            })
            .await
    }

    /// Find a director by name, returning (name, bio)
    pub async fn find_director(&self, name: &str) -> Result<Option<(String, Option<String>)>> {
        let name = name.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT director_name, director_bio FROM movies \
                     WHERE director_name = ? LIMIT 1",
                    [&name],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()
                .map_err(MyflixError::DatabaseError)
            })
            .await
    }

    /// Count total movies
    pub async fn count(&self) -> Result<i64> {
        self.db
            .execute(|conn| {
                conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
                    .map_err(MyflixError::DatabaseError)
            })
            .await
    }
}

#[async_trait]
impl Repository<Movie> for MovieRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let id = id.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT id, title, description, year, genre_name, genre_description, \
                     director_name, director_bio, image_url, featured, created_at \
                     FROM movies WHERE id = ?",
                    [&id],
                    |row| {
                        Ok(Movie {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            description: row.get(2)?,
                            year: row.get(3)?,
                            genre_name: row.get(4)?,
                            genre_description: row.get(5)?,
                            director_name: row.get(6)?,
                            director_bio: row.get(7)?,
                            image_url: row.get(8)?,
                            featured: row.get(9)?,
                            created_at: row.get(10)?,
                        })
                    },
                )
                .optional()
                .map_err(MyflixError::DatabaseError)
            })
            .await
    }

    async fn find_all(&self) -> Result<Vec<Movie>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn
                    .prepare(
                        "SELECT id, title, description, year, genre_name, genre_description, \
                         director_name, director_bio, image_url, featured, created_at \
                         FROM movies ORDER BY title ASC",
                    )
                    .map_err(MyflixError::DatabaseError)?;

                let movies = stmt
                    .query_map([], |row| {
                        Ok(Movie {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            description: row.get(2)?,
                            year: row.get(3)?,
                            genre_name: row.get(4)?,
                            genre_description: row.get(5)?,
                            director_name: row.get(6)?,
                            director_bio: row.get(7)?,
                            image_url: row.get(8)?,
                            featured: row.get(9)?,
                            created_at: row.get(10)?,
                        })
                    })
                    .map_err(MyflixError::DatabaseError)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(MyflixError::DatabaseError)?;

                Ok(movies)
            })
            .await
    }

    async fn create(&self, movie: &Movie) -> Result<()> {
        let movie = movie.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO movies (id, title, description, year, genre_name, \
                     genre_description, director_name, director_bio, image_url, featured) \
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                    rusqlite::params![
                        &movie.id,
                        &movie.title,
                        &movie.description,
                        movie.year,
                        &movie.genre_name,
                        &movie.genre_description,
                        &movie.director_name,
                        &movie.director_bio,
                        &movie.image_url,
                        movie.featured,
                    ],
                )
                .map_err(|e| {
                    map_constraint_error(e, &format!("Movie '{}' already exists", movie.title))
                })?;
                Ok(())
            })
            .await
    }

    async fn update(&self, movie: &Movie) -> Result<()> {
        let movie = movie.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "UPDATE movies SET title = ?, description = ?, year = ?, genre_name = ?, \
                     genre_description = ?, director_name = ?, director_bio = ?, image_url = ?, \
                     featured = ? WHERE id = ?",
                    rusqlite::params![
                        &movie.title,
                        &movie.description,
                        movie.year,
                        &movie.genre_name,
                        &movie.genre_description,
                        &movie.director_name,
                        &movie.director_bio,
                        &movie.image_url,
                        movie.featured,
                        &movie.id,
                    ],
                )
                .map_err(MyflixError::DatabaseError)?;
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.db
            .execute(move |conn| {
                conn.execute("DELETE FROM movies WHERE id = ?", [&id])
                    .map_err(MyflixError::DatabaseError)?;
                Ok(())
            })
            .await
    }
}

/// Repository for Favorite entities
pub struct FavoriteRepository {
    db: Arc<DatabaseManager>,
}

impl FavoriteRepository {
    /// Create a new FavoriteRepository
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Add a movie to a user's favorites
    ///
    /// Duplicate inserts are suppressed via the UNIQUE(user_id, movie_id)
    /// constraint; returns false when the pair was already present.
    pub async fn add(&self, favorite: &Favorite) -> Result<bool> {
        let favorite = favorite.clone();
        self.db
            .execute(move |conn| {
                let inserted = conn
                    .execute(
                        "INSERT OR IGNORE INTO favorites (id, user_id, movie_id, created_at) \
                         VALUES (?, ?, ?, ?)",
                        rusqlite::params![
                            &favorite.id,
                            &favorite.user_id,
                            &favorite.movie_id,
                            &favorite.created_at,
                        ],
                    )
                    .map_err(MyflixError::DatabaseError)?;
                Ok(inserted > 0)
            })
            .await
    }

    /// Remove a movie from a user's favorites; returns false when absent
    pub async fn remove(&self, user_id: &str, movie_id: &str) -> Result<bool> {
        let user_id = user_id.to_string();
        let movie_id = movie_id.to_string();
        self.db
            .execute(move |conn| {
                let removed = conn
                    .execute(
                        "DELETE FROM favorites WHERE user_id = ? AND movie_id = ?",
                        [&user_id, &movie_id],
                    )
                    .map_err(MyflixError::DatabaseError)?;
                Ok(removed > 0)
            })
            .await
    }

    /// Get the movie IDs a user has favorited, in insertion order
    pub async fn movie_ids_for_user(&self, user_id: &str) -> Result<Vec<String>> {
        let user_id = user_id.to_string();
        self.db
            .execute(move |conn| {
                let mut stmt = conn
                    .prepare(
                        "SELECT movie_id FROM favorites WHERE user_id = ? \
                         ORDER BY created_at ASC, rowid ASC",
                    )
                    .map_err(MyflixError::DatabaseError)?;

                let ids = stmt
                    .query_map([&user_id], |row| row.get(0))
                    .map_err(MyflixError::DatabaseError)?
                    .collect::<std::result::Result<Vec<String>, _>>()
                    .map_err(MyflixError::DatabaseError)?;

                Ok(ids)
            })
            .await
    }

    /// Check whether a movie is already in a user's favorites
    pub async fn is_favorited(&self, user_id: &str, movie_id: &str) -> Result<bool> {
        let user_id = user_id.to_string();
        let movie_id = movie_id.to_string();
        self.db
            .execute(move |conn| {
                let count: i64 = conn
                    .query_row(
                        "SELECT COUNT(*) FROM favorites WHERE user_id = ? AND movie_id = ?",
                        [&user_id, &movie_id],
                        |row| row.get(0),
                    )
                    .map_err(MyflixError::DatabaseError)?;
                Ok(count > 0)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn test_db() -> Arc<DatabaseManager> {
        Arc::new(DatabaseManager::new_in_memory().unwrap())
    }

    fn test_user(username: &str) -> User {
        User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password_hash: "$2b$12$fakefakefakefakefakefake".to_string(),
            email: format!("{}@example.com", username),
            birthday: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    fn test_movie(title: &str, genre: &str, director: &str) -> Movie {
        Movie {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: format!("A movie called {}", title),
            year: Some(1999),
            genre_name: Some(genre.to_string()),
            genre_description: Some(format!("{} movies", genre)),
            director_name: Some(director.to_string()),
            director_bio: Some(format!("{} directs movies", director)),
            image_url: None,
            featured: 0,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    #[tokio::test]
    async fn test_user_create_and_find() {
        let repo = UserRepository::new(test_db());
        let user = test_user("alice123");

        repo.create(&user).await.unwrap();

        let found = repo.find_by_username("alice123").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.email, "alice123@example.com");

        let missing = repo.find_by_username("nobody").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let repo = UserRepository::new(test_db());
        let first = test_user("alice123");
        let second = test_user("alice123");

        repo.create(&first).await.unwrap();
        let err = repo.create(&second).await.unwrap_err();
        assert!(matches!(err, MyflixError::Conflict(_)));

        // First registration's record is unaffected
        let found = repo.find_by_username("alice123").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_update_to_taken_username_is_conflict() {
        let repo = UserRepository::new(test_db());
        let alice = test_user("alice123");
        let mut bob = test_user("bob1234");

        repo.create(&alice).await.unwrap();
        repo.create(&bob).await.unwrap();

        bob.username = "alice123".to_string();
        let err = repo.update(&bob).await.unwrap_err();
        assert!(matches!(err, MyflixError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_movie_lookup_by_title_genre_director() {
        let repo = MovieRepository::new(test_db());
        repo.create(&test_movie("The Matrix", "Science Fiction", "The Wachowskis"))
            .await
            .unwrap();
        repo.create(&test_movie("Gladiator", "Action", "Ridley Scott"))
            .await
            .unwrap();

        let matrix = repo.find_by_title("The Matrix").await.unwrap().unwrap();
        assert_eq!(matrix.genre_name.as_deref(), Some("Science Fiction"));

        let genre = repo.find_genre("Action").await.unwrap().unwrap();
        assert_eq!(genre.0, "Action");
        assert_eq!(genre.1.as_deref(), Some("Action movies"));

        let director = repo.find_director("Ridley Scott").await.unwrap().unwrap();
        assert_eq!(director.1.as_deref(), Some("Ridley Scott directs movies"));

        assert!(repo.find_by_title("Gigli").await.unwrap().is_none());
        assert!(repo.find_genre("Mockumentary").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_favorites_dedup_and_order() {
        let db = test_db();
        let users = UserRepository::new(db.clone());
        let movies = MovieRepository::new(db.clone());
        let favorites = FavoriteRepository::new(db);

        let user = test_user("alice123");
        users.create(&user).await.unwrap();
        let m1 = test_movie("The Matrix", "Science Fiction", "The Wachowskis");
        let m2 = test_movie("Gladiator", "Action", "Ridley Scott");
        movies.create(&m1).await.unwrap();
        movies.create(&m2).await.unwrap();

        let fav = |movie_id: &str| Favorite {
            id: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            movie_id: movie_id.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        assert!(favorites.add(&fav(&m1.id)).await.unwrap());
        assert!(favorites.add(&fav(&m2.id)).await.unwrap());
        // Duplicate insert is suppressed
        assert!(!favorites.add(&fav(&m1.id)).await.unwrap());

        let ids = favorites.movie_ids_for_user(&user.id).await.unwrap();
        assert_eq!(ids, vec![m1.id.clone(), m2.id.clone()]);

        assert!(favorites.remove(&user.id, &m1.id).await.unwrap());
        assert!(!favorites.remove(&user.id, &m1.id).await.unwrap());

        let ids = favorites.movie_ids_for_user(&user.id).await.unwrap();
        assert_eq!(ids, vec![m2.id.clone()]);
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_favorites() {
        let db = test_db();
        let users = UserRepository::new(db.clone());
        let movies = MovieRepository::new(db.clone());
        let favorites = FavoriteRepository::new(db);

        let user = test_user("alice123");
        users.create(&user).await.unwrap();
        let movie = test_movie("The Matrix", "Science Fiction", "The Wachowskis");
        movies.create(&movie).await.unwrap();

        favorites
            .add(&Favorite {
                id: Uuid::new_v4().to_string(),
                user_id: user.id.clone(),
                movie_id: movie.id.clone(),
                created_at: Utc::now().to_rfc3339(),
            })
            .await
            .unwrap();

        users.delete(&user.id).await.unwrap();

        let ids = favorites.movie_ids_for_user(&user.id).await.unwrap();
        assert!(ids.is_empty());
    }
}
