use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::Validation;
use crate::prelude::NaiveDate;
use crate::security::Validator;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DirectorStoreRequest {
    #[schema(example = "Ridley")]
    pub first_name: String,
    #[schema(example = "Scott")]
    pub last_name: String,
    #[schema(example = "1937-11-30")]
    pub date_of_birth: Option<NaiveDate>,
}

impl DirectorStoreRequest {
    pub fn validate(&self) -> Result<(), Validation> {
        validate_person(&self.first_name, &self.last_name)
    }
}

/// Name checks shared with actors
pub(crate) fn validate_person(first_name: &str, last_name: &str) -> Result<(), Validation> {
    let mut validation = Validation::new();

    if let Err(e) = Validator::validate_text("First name", first_name, 1, 255) {
        validation.add("firstName", e);
    }

    if let Err(e) = Validator::validate_text("Last name", last_name, 1, 255) {
        validation.add("lastName", e);
    }

    if validation.is_empty() { Ok(()) } else { Err(validation) }
}
