use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::prelude::NaiveDate;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Sigourney")]
    pub first_name: String,
    #[schema(example = "Weaver")]
    pub last_name: String,
    #[schema(example = "1949-10-08")]
    pub date_of_birth: Option<NaiveDate>,
}
