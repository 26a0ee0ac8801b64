use std::fmt;

use serde::{Deserialize, Serialize};

/// Release year used when the real year is not known.
pub const UNKNOWN_YEAR: u32 = 0;

/// A single movie in the catalog.
///
/// `title` is the identity of the record: it is unique across the catalog
/// and compared case-sensitively. `poster_url` is the only optional field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Release year, `0` when unknown.
    pub release_year: u32,
    /// Rating on a 0.0 to 10.0 scale.
    pub rating: f64,
    pub poster_url: Option<String>,
}

impl MovieRecord {
    pub fn new(
        title: impl Into<String>,
        release_year: u32,
        rating: f64,
        poster_url: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            release_year,
            rating,
            poster_url,
        }
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.title, self.release_year, self.rating)
    }
}

/// The full set of movies, in storage order.
///
/// Always materialized in full from the store. Order is significant: ties in
/// rating-based selections resolve to the record encountered first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Exact, case-sensitive lookup by title.
    pub fn get(&self, title: &str) -> Option<&MovieRecord> {
        self.movies.iter().find(|m| m.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.movies.iter()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }

    pub fn as_slice(&self) -> &[MovieRecord] {
        &self.movies
    }
}

impl From<Vec<MovieRecord>> for Catalog {
    fn from(movies: Vec<MovieRecord>) -> Self {
        Self::new(movies)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
