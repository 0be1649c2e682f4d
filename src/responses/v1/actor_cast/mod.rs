use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActorCast {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub actor_id: i64,
    #[schema(example = 1)]
    pub movie_id: i64,
    #[schema(example = "Ellen Ripley")]
    pub character_name: String,
}
