//! Canned lookup used by tests and offline runs.

use std::collections::HashMap;
use std::sync::Mutex;

use moviedb_core::error::MovieDbError;
use moviedb_core::lookup::{LookupOutcome, MetadataLookup, MovieMetadata};

/// Lookup that answers from an in-memory table.
///
/// Unknown titles resolve to `NotFound`. `unavailable()` builds a lookup
/// whose every call fails as if the network were down.
#[derive(Debug, Default)]
pub struct MockLookup {
    entries: HashMap<String, MovieMetadata>,
    unavailable: bool,
    calls: Mutex<Vec<String>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Register metadata returned for `title`.
    pub fn with_movie(mut self, title: &str, metadata: MovieMetadata) -> Self {
        self.entries.insert(title.to_string(), metadata);
        self
    }

    /// Titles requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl MetadataLookup for MockLookup {
    async fn fetch(&self, title: &str) -> Result<LookupOutcome, MovieDbError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(title.to_string());
        }
        if self.unavailable {
            return Err(MovieDbError::LookupUnavailable(
                "mock lookup is offline".to_string(),
            ));
        }
        Ok(match self.entries.get(title) {
            Some(meta) => LookupOutcome::Found(meta.clone()),
            None => LookupOutcome::NotFound,
        })
    }
}
