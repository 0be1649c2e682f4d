use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::v1::users::Role;
use crate::responses::v1::feedback::Feedback;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "johnny")]
    pub nick_name: String,
    pub role: Role,
}

/// A user together with every feedback they wrote
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserWithFeedback {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "johnny")]
    pub nick_name: String,
    pub role: Role,
    pub feedback_list: Vec<Feedback>,
}

impl<U, F> From<(U, Vec<F>)> for UserWithFeedback
where
    U: Into<User>,
    F: Into<Feedback>,
{
    fn from((user, feedbacks): (U, Vec<F>)) -> Self {
        let user: User = user.into();

        Self {
            id: user.id,
            email: user.email,
            nick_name: user.nick_name,
            role: user.role,
            feedback_list: feedbacks.into_iter().map(Into::into).collect(),
        }
    }
}
