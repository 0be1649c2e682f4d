use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::prelude::NaiveDateTime;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = 1)]
    pub movie_id: i64,
    #[schema(example = "Still terrifying.")]
    pub text: String,
    #[schema(example = 9, minimum = 1, maximum = 10)]
    pub rating: i16,
    pub created_at: NaiveDateTime,
}
