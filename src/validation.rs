// Validation utilities module
// Provides custom validation functions for movie fields

use std::borrow::Cow;

use validator::ValidationError;

/// Highest rating on the catalogue's ten-point scale
pub const MAX_RATING: f64 = 10.0;

/// Validates that a rating is above zero and at most ten
pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if rating > 0.0 && rating <= MAX_RATING {
        Ok(())
    } else {
        let mut error = ValidationError::new("rating_out_of_range");
        error.message = Some(Cow::from(format!(
            "Rating must be greater than 0 and at most {}",
            MAX_RATING
        )));
        Err(error)
    }
}
