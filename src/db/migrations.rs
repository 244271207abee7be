//! Database migrations
//!
//! This module provides database schema migration functionality.
//! Applied migrations are tracked in the schema_migrations table.

use crate::core::error::{MyflixError, Result};
use rusqlite::Connection;
use tracing::info;

/// Migration version tracking table
const MIGRATION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Initial schema migration (version 1)
const MIGRATION_V1: &str = r#"
-- Users table (registered identities)
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    username TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    email TEXT NOT NULL,
    birthday TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

-- Movies table (catalog, genre and director embedded)
CREATE TABLE IF NOT EXISTS movies (
    id TEXT PRIMARY KEY,
    title TEXT UNIQUE NOT NULL,
    description TEXT NOT NULL,
    year INTEGER,
    genre_name TEXT,
    genre_description TEXT,
    director_name TEXT,
    director_bio TEXT,
    image_url TEXT,
    featured INTEGER DEFAULT 0,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

-- Favorites table (per-user ordered set of movie references)
CREATE TABLE IF NOT EXISTS favorites (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    movie_id TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (movie_id) REFERENCES movies(id) ON DELETE CASCADE,
    UNIQUE(user_id, movie_id)
);

-- Indexes for performance
CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);
CREATE INDEX IF NOT EXISTS idx_movies_title ON movies(title);
CREATE INDEX IF NOT EXISTS idx_movies_genre ON movies(genre_name);
CREATE INDEX IF NOT EXISTS idx_movies_director ON movies(director_name);
CREATE INDEX IF NOT EXISTS idx_favorites_user_id ON favorites(user_id);
"#;

/// Run all pending database migrations
///
/// This function applies database schema migrations in order.
/// It tracks which migrations have been applied using the schema_migrations table.
pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    info!("Running database migrations");

    // Create migration tracking table
    conn.execute_batch(MIGRATION_TABLE)
        .map_err(MyflixError::DatabaseError)?;

    // Check current version
    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(MyflixError::DatabaseError)?;

    info!("Current database schema version: {}", current_version);

    if current_version < 1 {
        info!("Applying migration v1: Initial schema");
        apply_migration(conn, 1, MIGRATION_V1)?;
    }

    info!("Database migrations completed successfully");
    Ok(())
}

/// Apply a single migration
fn apply_migration(conn: &mut Connection, version: i64, sql: &str) -> Result<()> {
    let tx = conn.transaction().map_err(MyflixError::DatabaseError)?;

    tx.execute_batch(sql).map_err(MyflixError::DatabaseError)?;

    tx.execute(
        "INSERT INTO schema_migrations (version) VALUES (?)",
        [version],
    )
    .map_err(MyflixError::DatabaseError)?;

    tx.commit().map_err(MyflixError::DatabaseError)?;

    info!("Migration v{} applied successfully", version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_apply_on_fresh_database() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();

        let version: i64 = conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(version, 1);

        // All three tables must exist
        for table in ["users", "movies", "favorites"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {}", table);
        }
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        run_migrations(&mut conn).unwrap();

        let version: i64 = conn
            .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(version, 1);
    }

    #[test]
    fn test_username_unique_constraint() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();

        conn.execute(
            "INSERT INTO users (id, username, password_hash, email) \
             VALUES ('u1', 'alice123', 'hash', 'a@x.com')",
            [],
        )
        .unwrap();

        let duplicate = conn.execute(
            "INSERT INTO users (id, username, password_hash, email) \
             VALUES ('u2', 'alice123', 'other', 'b@x.com')",
            [],
        );
        assert!(duplicate.is_err());
    }
}
