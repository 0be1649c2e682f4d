use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::v1::users::{self, Role};
use crate::errors::Error;

/// Authenticated caller resolved from a bearer token.
///
/// The security filter stores it in the request extensions, handlers take it
/// as an extractor.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    pub email: String,
    pub nick_name: String,
    pub role: Role,
    /// Token the request was authenticated with
    #[schema(value_type = String)]
    pub token: Uuid,
}

impl Identity {
    pub fn new(user: &users::Model, token: Uuid) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            nick_name: user.nick_name.clone(),
            role: user.role,
            token,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}

impl FromRequest for Identity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<Identity>().cloned();

        ready(identity.ok_or_else(|| Error::unauthorized("Unauthenticated")))
    }
}
