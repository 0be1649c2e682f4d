use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::prelude::NaiveDate;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ridley")]
    pub first_name: String,
    #[schema(example = "Scott")]
    pub last_name: String,
    #[schema(example = "1937-11-30")]
    pub date_of_birth: Option<NaiveDate>,
}
