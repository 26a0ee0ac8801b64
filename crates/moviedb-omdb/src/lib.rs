//! Moviedb OMDb crate - metadata lookup against the OMDb HTTP API.
//!
//! Provides `OmdbClient`, which implements the core `MetadataLookup` trait,
//! the raw response model with "N/A" normalization, and a `MockLookup` for
//! tests.

mod client;
mod error;
pub mod mock;
pub mod models;

pub use client::OmdbClient;
pub use error::LookupError;
pub use mock::MockLookup;

pub type Result<T> = std::result::Result<T, LookupError>;
