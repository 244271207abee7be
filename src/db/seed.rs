//! First-run catalog seeding
//!
//! A fresh deployment starts with an empty movies table; this module fills it
//! with the default catalog so the API serves data immediately. Seeding only
//! runs when the table is empty.

use crate::core::error::Result;
use crate::db::models::Movie;
use crate::db::repository::{MovieRepository, Repository};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

struct SeedMovie {
    title: &'static str,
    description: &'static str,
    genre: (&'static str, &'static str),
    director: (&'static str, &'static str),
    image_url: &'static str,
}

const GENRE_CRIME: (&str, &str) = (
    "Crime",
    "Crime movies are movies that focus on criminal activities.",
);
const GENRE_SCIFI: (&str, &str) = (
    "Science Fiction",
    "Science Fiction movies are movies that focus on science and technology.",
);
const GENRE_ACTION: (&str, &str) = (
    "Action",
    "Action movies are movies that focus on physical action.",
);

const SEED_CATALOG: &[SeedMovie] = &[
    SeedMovie {
        title: "The Godfather",
        description: "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
        genre: GENRE_CRIME,
        director: (
            "Francis Ford Coppola",
            "Francis Ford Coppola is an American film director, producer, and screenwriter.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/1/1c/Godfather_ver1.jpg",
    },
    SeedMovie {
        title: "Star Wars",
        description: "A young farm boy joins a rebellion to save the galaxy from an evil empire.",
        genre: GENRE_SCIFI,
        director: (
            "George Lucas",
            "George Lucas is an American film director, producer, screenwriter, and entrepreneur.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/8/87/StarWarsMoviePoster1977.jpg",
    },
    SeedMovie {
        title: "Jurassic Park",
        description: "A theme park showcasing genetically-engineered dinosaurs turns deadly when the creatures escape.",
        genre: GENRE_SCIFI,
        director: (
            "Steven Spielberg",
            "Steven Spielberg is an American film director, producer, and screenwriter.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/e/e7/Jurassic_Park_poster.jpg",
    },
    SeedMovie {
        title: "The Matrix",
        description: "A computer hacker discovers the world is a simulated reality and joins a rebellion to free humanity.",
        genre: GENRE_SCIFI,
        director: (
            "The Wachowski Brothers",
            "The Wachowski Brothers are American film directors, writers, and producers.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/c/c1/The_Matrix_Poster.jpg",
    },
    SeedMovie {
        title: "Iron Man",
        description: "A wealthy inventor creates a high-tech suit of armor to fight crime as Iron Man.",
        genre: GENRE_ACTION,
        director: (
            "Jon Favreau",
            "Jon Favreau is an American film director, producer, and screenwriter.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/7/70/Ironmanposter.JPG",
    },
    SeedMovie {
        title: "Gladiator",
        description: "A betrayed Roman general fights for vengeance as a gladiator.",
        genre: GENRE_ACTION,
        director: (
            "Ridley Scott",
            "Ridley Scott is an English film director and producer.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/8/8d/Gladiator_ver1.jpg",
    },
    SeedMovie {
        title: "Indiana Jones and the Last Crusade",
        description: "An archaeologist embarks on a quest to find the Holy Grail while battling Nazis.",
        genre: GENRE_ACTION,
        director: (
            "Steven Spielberg",
            "Steven Spielberg is an American film director, producer, and screenwriter.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/f/fc/Indiana_Jones_and_the_Last_Crusade_A.jpg",
    },
    SeedMovie {
        title: "Avengers: Endgame",
        description: "The Avengers assemble once more to reverse the damage caused by Thanos and save the universe.",
        genre: GENRE_ACTION,
        director: (
            "Anthony and Joe Russo",
            "Anthony and Joe Russo are American film and television directors.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/0/0d/Avengers_Endgame_poster.jpg",
    },
    SeedMovie {
        title: "Armageddon",
        description: "A team of drillers is sent into space to prevent a giant asteroid from colliding with Earth.",
        genre: GENRE_ACTION,
        director: (
            "Michael Bay",
            "Michael Bay is an American film director and producer.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/f/fc/Armageddon-poster06.jpg",
    },
    SeedMovie {
        title: "Assassins Creed",
        description: "A man relives the memories of his ancestor, an Assassin, to uncover ancient secrets.",
        genre: GENRE_ACTION,
        director: (
            "Justin Kurzel",
            "Justin Kurzel is an Australian film director.",
        ),
        image_url: "https://upload.wikimedia.org/wikipedia/en/a/a3/Assassin%27s_Creed_film_poster.jpg",
    },
];

/// Seed the default catalog if the movies table is empty.
///
/// Returns the number of movies inserted (zero when the table already has
/// content).
pub async fn seed_movies(repo: &MovieRepository) -> Result<usize> {
    if repo.count().await? > 0 {
        return Ok(0);
    }

    info!("Movies table is empty, seeding default catalog");

    for entry in SEED_CATALOG {
        let movie = Movie {
            id: Uuid::new_v4().to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            year: None,
            genre_name: Some(entry.genre.0.to_string()),
            genre_description: Some(entry.genre.1.to_string()),
            director_name: Some(entry.director.0.to_string()),
            director_bio: Some(entry.director.1.to_string()),
            image_url: Some(entry.image_url.to_string()),
            featured: 0,
            created_at: Utc::now().to_rfc3339(),
        };
        repo.create(&movie).await?;
    }

    info!(count = SEED_CATALOG.len(), "Default catalog seeded");
    Ok(SEED_CATALOG.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::manager::DatabaseManager;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seed_fills_empty_catalog_once() {
        let db = Arc::new(DatabaseManager::new_in_memory().unwrap());
        let repo = MovieRepository::new(db);

        let inserted = seed_movies(&repo).await.unwrap();
        assert_eq!(inserted, SEED_CATALOG.len());

        // Second run is a no-op
        let inserted = seed_movies(&repo).await.unwrap();
        assert_eq!(inserted, 0);

        let matrix = repo.find_by_title("The Matrix").await.unwrap();
        assert!(matrix.is_some());
    }
}
