//! The catalog store: every persistent operation on movie records.
//!
//! Each method runs exactly one autocommitted statement, so a failed call
//! leaves the table as it was.
//!
//! `update_rating` filters on the exact title. Earlier releases issued the
//! UPDATE without a WHERE clause and overwrote every movie's rating; that
//! behavior was fixed deliberately and is covered by a test.

use std::sync::Arc;

use rusqlite::{ffi, params};
use tracing::{debug, info};

use moviedb_core::error::MovieDbError;
use moviedb_core::types::{Catalog, MovieRecord};

use crate::db::Database;

/// Repository for movie records.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    db: Arc<Database>,
}

impl CatalogStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Ensure the backing table exists. Idempotent.
    pub fn initialize(&self) -> Result<(), MovieDbError> {
        self.db.initialize()
    }

    /// Every record, in insertion order.
    pub fn list_all(&self) -> Result<Catalog, MovieDbError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT title, year, rating, poster_url FROM movies ORDER BY id ASC")
                .map_err(|e| MovieDbError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(MovieRecord {
                        title: row.get(0)?,
                        release_year: row.get(1)?,
                        rating: row.get(2)?,
                        poster_url: row.get(3)?,
                    })
                })
                .map_err(|e| MovieDbError::Storage(e.to_string()))?;

            let mut movies = Vec::new();
            for row in rows {
                movies.push(row.map_err(|e| MovieDbError::Storage(e.to_string()))?);
            }
            debug!(count = movies.len(), "Loaded catalog");
            Ok(Catalog::new(movies))
        })
    }

    /// Add one record. Fails with `DuplicateTitle` if the title is taken.
    pub fn insert(&self, movie: &MovieRecord) -> Result<(), MovieDbError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO movies (title, year, rating, poster_url) VALUES (?1, ?2, ?3, ?4)",
                params![
                    movie.title,
                    movie.release_year,
                    movie.rating,
                    movie.poster_url,
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
                {
                    MovieDbError::DuplicateTitle {
                        title: movie.title.clone(),
                    }
                }
                other => MovieDbError::Storage(format!("Failed to add movie: {}", other)),
            })?;
            info!(title = %movie.title, "Movie added");
            Ok(())
        })
    }

    /// Delete records whose title matches a SQL `LIKE` pattern.
    ///
    /// The pattern is used verbatim, so `%` and `_` act as wildcards. Returns
    /// the number of rows removed; zero is not an error.
    pub fn delete_by_title_pattern(&self, pattern: &str) -> Result<usize, MovieDbError> {
        self.db.with_conn(|conn| {
            let removed = conn
                .execute("DELETE FROM movies WHERE title LIKE ?1", params![pattern])
                .map_err(|e| MovieDbError::Storage(format!("Failed to delete movie: {}", e)))?;
            info!(pattern, removed, "Movies deleted");
            Ok(removed)
        })
    }

    /// Set the rating of the movie with exactly this title.
    ///
    /// Returns the number of rows changed, `0` when no movie has the title.
    pub fn update_rating(&self, title: &str, rating: f64) -> Result<usize, MovieDbError> {
        self.db.with_conn(|conn| {
            let changed = conn
                .execute(
                    "UPDATE movies SET rating = ?1 WHERE title = ?2",
                    params![rating, title],
                )
                .map_err(|e| MovieDbError::Storage(format!("Failed to update movie: {}", e)))?;
            info!(title, rating, changed, "Movie rating updated");
            Ok(changed)
        })
    }

    /// Count stored movies.
    pub fn count(&self) -> Result<u64, MovieDbError> {
        self.db.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
                .map_err(|e| MovieDbError::Storage(e.to_string()))?;
            Ok(count as u64)
        })
    }

    /// Release the backing connection. Safe to call more than once.
    pub fn close(&self) -> Result<(), MovieDbError> {
        self.db.close()
    }
}
