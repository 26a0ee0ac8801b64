//! The metadata lookup seam between the menu loop and a remote movie
//! database.

use crate::error::MovieDbError;
use crate::types::{MovieRecord, UNKNOWN_YEAR};

/// Metadata for one title as reported by a lookup service.
///
/// Every field is optional: the service may omit a field or mark it as not
/// available, and both cases arrive here as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieMetadata {
    pub title: Option<String>,
    pub year: Option<u32>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}

impl MovieMetadata {
    /// True when the service returned nothing usable for the title.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.rating.is_none()
            && self.poster_url.is_none()
    }

    /// Build a storable record, filling unknown fields with defaults.
    ///
    /// The canonical title wins over `requested_title` when present.
    pub fn into_record(self, requested_title: &str) -> MovieRecord {
        MovieRecord {
            title: self.title.unwrap_or_else(|| requested_title.to_string()),
            release_year: self.year.unwrap_or(UNKNOWN_YEAR),
            rating: self.rating.unwrap_or(0.0),
            poster_url: self.poster_url,
        }
    }
}

/// Result of a successful round trip to the lookup service.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(MovieMetadata),
    /// The service answered but knows no such title.
    NotFound,
}

/// Service that resolves a title to movie metadata.
///
/// Implementations wrap a concrete remote API behind a uniform async
/// interface. Connectivity and configuration faults surface as
/// [`MovieDbError::LookupUnavailable`].
pub trait MetadataLookup: Send + Sync {
    fn fetch(
        &self,
        title: &str,
    ) -> impl std::future::Future<Output = Result<LookupOutcome, MovieDbError>> + Send;
}
