use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::Validation;
use crate::security::Validator;

pub const RATING_MIN: i16 = 1;
pub const RATING_MAX: i16 = 10;

/// The author is the authenticated caller
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStoreRequest {
    #[schema(example = 1)]
    pub movie_id: i64,
    #[schema(example = "Still terrifying.")]
    pub text: String,
    #[schema(example = 9, minimum = 1, maximum = 10)]
    pub rating: i16,
}

impl FeedbackStoreRequest {
    pub fn validate(&self) -> Result<(), Validation> {
        let mut validation = Validation::new();

        if self.movie_id <= 0 {
            validation.add("movieId", "Movie id must be greater than 0");
        }

        if let Err(e) = Validator::validate_text("Text", &self.text, 1, 2000) {
            validation.add("text", e);
        }

        if !(RATING_MIN..=RATING_MAX).contains(&self.rating) {
            validation.add(
                "rating",
                format!("Rating must be between {RATING_MIN} and {RATING_MAX}"),
            );
        }

        if validation.is_empty() { Ok(()) } else { Err(validation) }
    }
}
