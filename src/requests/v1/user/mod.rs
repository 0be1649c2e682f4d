use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::Validation;
use crate::security::Validator;

#[derive(Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "johnny")]
    pub nick_name: String,
    #[schema(example = "password")]
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), Validation> {
        let mut validation = Validation::new();

        if !Validator::validate_email(self.email.trim()) {
            validation.add("email", "Email format is invalid");
        }

        if !Validator::validate_length(self.nick_name.trim(), 3, 32) {
            validation.add("nickName", "Nickname must be between 3 and 32 characters");
        }

        if let Err(errors) = Validator::validate_password(&self.password) {
            validation.extend("password", errors);
        }

        if validation.is_empty() { Ok(()) } else { Err(validation) }
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("nick_name", &self.nick_name)
            .finish_non_exhaustive()
    }
}
