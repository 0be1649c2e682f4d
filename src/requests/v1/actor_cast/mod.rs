use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::Validation;
use crate::security::Validator;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActorCastStoreRequest {
    #[schema(example = 1)]
    pub actor_id: i64,
    #[schema(example = 1)]
    pub movie_id: i64,
    #[schema(example = "Ellen Ripley")]
    pub character_name: String,
}

impl ActorCastStoreRequest {
    pub fn validate(&self) -> Result<(), Validation> {
        let mut validation = Validation::new();

        if self.actor_id <= 0 {
            validation.add("actorId", "Actor id must be greater than 0");
        }

        if self.movie_id <= 0 {
            validation.add("movieId", "Movie id must be greater than 0");
        }

        if let Err(e) = Validator::validate_text("Character name", &self.character_name, 1, 255) {
            validation.add("characterName", e);
        }

        if validation.is_empty() { Ok(()) } else { Err(validation) }
    }
}
