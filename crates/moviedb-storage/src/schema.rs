//! Catalog table definition.

use rusqlite::Connection;
use tracing::debug;

use moviedb_core::error::MovieDbError;

/// Create the `movies` table if it does not already exist.
///
/// Safe to run on every start. There is no versioning: the table has had a
/// single shape since the first release.
pub fn initialize(conn: &Connection) -> Result<(), MovieDbError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS movies (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT UNIQUE NOT NULL,
            year        INTEGER NOT NULL,
            rating      REAL NOT NULL,
            poster_url  TEXT
        );",
    )
    .map_err(|e| MovieDbError::Storage(format!("Failed to create movies table: {}", e)))?;

    debug!("movies table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = open_test_conn();
        conn.execute(
            "INSERT INTO movies (title, year, rating) VALUES ('Up', 2009, 8.3)",
            [],
        )
        .unwrap();

        initialize(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_title_is_unique() {
        let conn = open_test_conn();
        conn.execute(
            "INSERT INTO movies (title, year, rating) VALUES ('Up', 2009, 8.3)",
            [],
        )
        .unwrap();
        let result = conn.execute(
            "INSERT INTO movies (title, year, rating) VALUES ('Up', 2010, 1.0)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_required_columns_reject_null() {
        let conn = open_test_conn();
        let result = conn.execute(
            "INSERT INTO movies (title, year, rating) VALUES (NULL, 2009, 8.3)",
            [],
        );
        assert!(result.is_err());

        let result = conn.execute(
            "INSERT INTO movies (title, year, rating) VALUES ('Up', 2009, NULL)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_poster_url_is_nullable() {
        let conn = open_test_conn();
        conn.execute(
            "INSERT INTO movies (title, year, rating, poster_url) VALUES ('Up', 2009, 8.3, NULL)",
            [],
        )
        .unwrap();
        let poster: Option<String> = conn
            .query_row("SELECT poster_url FROM movies WHERE title = 'Up'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert!(poster.is_none());
    }
}
