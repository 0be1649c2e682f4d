use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::responses::v1::user::User;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Authenticated {
    /// Send back as `Authorization: Bearer <token>`
    #[schema(example = "5f0c1e2ab3d84c6f9e7a1b2c3d4e5f60")]
    pub token: String,
    pub user: User,
}

/// Returned by `GET /login` to unauthenticated clients
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginHint {
    #[schema(example = "Authentication required")]
    pub message: String,
    #[schema(example = "POST")]
    pub method: String,
    #[schema(example = "/login")]
    pub path: String,
}
