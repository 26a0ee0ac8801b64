//! Moviedb core crate - shared types, errors, configuration and catalog
//! analytics used by every other crate in the workspace.

pub mod catalog;
pub mod config;
pub mod error;
pub mod lookup;
pub mod types;
pub mod validate;

pub use catalog::CatalogStats;
pub use config::MovieDbConfig;
pub use error::{MovieDbError, Result};
pub use lookup::{LookupOutcome, MetadataLookup, MovieMetadata};
pub use types::*;
