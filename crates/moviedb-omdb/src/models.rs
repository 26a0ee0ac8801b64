//! OMDb wire format and its normalization into [`MovieMetadata`].

use serde::Deserialize;

use moviedb_core::lookup::{LookupOutcome, MovieMetadata};

/// Marker OMDb uses for fields it has no value for.
pub const NOT_AVAILABLE: &str = "N/A";

/// Raw title-lookup response. OMDb encodes every field as a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbResponse {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    /// `"True"` or `"False"`.
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbResponse {
    /// Whether OMDb reported a match. A body without a `Response` marker is
    /// treated as no match.
    pub fn is_found(&self) -> bool {
        self.response
            .as_deref()
            .is_some_and(|r| !r.trim().eq_ignore_ascii_case("false"))
    }

    /// Collapse the response into a typed outcome, normalizing every
    /// "not available" marker to `None`. A match with no usable field is
    /// reported as `NotFound`.
    pub fn into_outcome(self) -> LookupOutcome {
        if !self.is_found() {
            return LookupOutcome::NotFound;
        }

        let metadata = MovieMetadata {
            title: available(self.title),
            year: available(self.year).and_then(|y| parse_year(&y)),
            rating: available(self.imdb_rating).and_then(|r| r.trim().parse().ok()),
            poster_url: available(self.poster),
        };
        if metadata.is_empty() {
            LookupOutcome::NotFound
        } else {
            LookupOutcome::Found(metadata)
        }
    }
}

fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != NOT_AVAILABLE
    })
}

/// Leading digits of a year field. Series report ranges like `2008–2013`.
fn parse_year(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
