use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::Validation;
use crate::prelude::NaiveDate;
use crate::requests::v1::director::validate_person;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActorStoreRequest {
    #[schema(example = "Sigourney")]
    pub first_name: String,
    #[schema(example = "Weaver")]
    pub last_name: String,
    #[schema(example = "1949-10-08")]
    pub date_of_birth: Option<NaiveDate>,
}

impl ActorStoreRequest {
    pub fn validate(&self) -> Result<(), Validation> {
        validate_person(&self.first_name, &self.last_name)
    }
}
