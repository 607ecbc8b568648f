//! Movie domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Movie record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Movie list response
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
}

/// Static top-movies entry, not backed by the store
#[derive(Debug, Clone, Serialize)]
pub struct TopMovie {
    pub title: &'static str,
    pub director: &'static str,
    pub year: i32,
}

/// Top movies response
#[derive(Debug, Serialize)]
pub struct TopMovieListResponse {
    pub movies: Vec<TopMovie>,
}

/// The fixed top-movies list served regardless of auth state
pub const TOP_MOVIES: [TopMovie; 3] = [
    TopMovie {
        title: "Treasure Planet",
        director: "John Musker, Ron Clements",
        year: 2002,
    },
    TopMovie {
        title: "Star Wars: Episode III - Revenge of the Sith",
        director: "George Lucas",
        year: 2005,
    },
    TopMovie {
        title: "Spider-Man: No Way Home",
        director: "Jon Watts",
        year: 2021,
    },
];
