//! Read-only analytics over a materialized [`Catalog`].
//!
//! Everything here is a pure function of the catalog contents, so the menu
//! handlers stay thin and these can be tested without a database.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::{Catalog, MovieRecord};

/// Summary statistics for a non-empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats<'a> {
    /// Arithmetic mean of all ratings.
    pub average: f64,
    pub best: &'a MovieRecord,
    pub worst: &'a MovieRecord,
}

/// Compute average, best and worst. Returns `None` for an empty catalog.
///
/// Best and worst keep the first record encountered when ratings tie.
pub fn stats(catalog: &Catalog) -> Option<CatalogStats<'_>> {
    let mut movies = catalog.iter();
    let first = movies.next()?;

    let mut sum = first.rating;
    let mut best = first;
    let mut worst = first;
    for movie in movies {
        sum += movie.rating;
        if movie.rating > best.rating {
            best = movie;
        }
        if movie.rating < worst.rating {
            worst = movie;
        }
    }

    Some(CatalogStats {
        average: sum / catalog.len() as f64,
        best,
        worst,
    })
}

/// Movies ordered by rating, highest first. Equal ratings keep catalog order.
pub fn sorted_by_rating_desc(catalog: &Catalog) -> Vec<&MovieRecord> {
    let mut movies: Vec<&MovieRecord> = catalog.iter().collect();
    // sort_by is stable
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    movies
}

/// Case-insensitive substring search over titles.
pub fn search<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a MovieRecord> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .collect()
}

/// Uniformly pick one movie. `None` for an empty catalog.
pub fn random_movie<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    rng: &mut R,
) -> Option<&'a MovieRecord> {
    catalog.as_slice().choose(rng)
}
