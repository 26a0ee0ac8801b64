//! Moviedb storage crate - SQLite persistence for the movie catalog.
//!
//! Provides the `Database` connection wrapper with an explicit open/close
//! lifecycle and the `CatalogStore` repository that runs every catalog
//! statement.

pub mod db;
pub mod repository;
pub mod schema;

pub use db::Database;
pub use repository::CatalogStore;
