//! Input validation at the interactive boundary.

use crate::error::{MovieDbError, Result};

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// Parse a user-entered rating. Accepts any number in `0.0..=10.0`.
pub fn parse_rating(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let rating: f64 = trimmed
        .parse()
        .map_err(|_| MovieDbError::Validation(format!("'{trimmed}' is not a valid number")))?;

    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(MovieDbError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(rating)
}

/// Trim `input` and reject it if nothing is left. `what` names the field in
/// the error message.
pub fn require_non_empty<'a>(input: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MovieDbError::Validation(format!("{what} cannot be empty")));
    }
    Ok(trimmed)
}
