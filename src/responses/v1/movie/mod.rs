use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::v1::movies::Genre;
use crate::prelude::NaiveDate;

/// Movie as returned by the catalog.
///
/// Memoized in the response cache, so every field is always serialized.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Alien")]
    pub title: String,
    #[schema(example = "The crew of a commercial spacecraft encounters a deadly lifeform.")]
    pub description: String,
    #[schema(example = "1979-05-25")]
    pub date_of_release: NaiveDate,
    pub genre: Genre,
    /// Minutes
    #[schema(example = 117)]
    pub duration: i32,
    #[schema(example = 1)]
    pub director_id: Option<i64>,
}
