use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{controllers, entities, errors, requests, responses, security};

/// Bearer token issued by `POST /login`
pub struct Authentication;

impl Modify for Authentication {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Movie catalog"),
    tags(
        (name = "Auth"),
        (name = "Movie"),
        (name = "Director"),
        (name = "Actor"),
        (name = "Actor cast"),
        (name = "User"),
        (name = "Feedback"),
        (name = "Health"),
    ),
    modifiers(&Authentication),
    paths(
        controllers::v1::auth::hint,
        controllers::v1::auth::login,
        controllers::v1::auth::logout,
        controllers::v1::auth::me,

        controllers::v1::movie::store,
        controllers::v1::movie::all,
        controllers::v1::movie::delete_all,
        controllers::v1::movie::show,
        controllers::v1::movie::delete,
        controllers::v1::movie::by_title,
        controllers::v1::movie::delete_by_title,
        controllers::v1::movie::by_description,
        controllers::v1::movie::by_date_of_release,
        controllers::v1::movie::by_genre,
        controllers::v1::movie::by_duration,
        controllers::v1::movie::by_director,
        controllers::v1::movie::delete_by_director,

        controllers::v1::director::store,
        controllers::v1::director::all,
        controllers::v1::director::show,
        controllers::v1::director::movies,
        controllers::v1::director::delete,

        controllers::v1::actor::store,
        controllers::v1::actor::all,
        controllers::v1::actor::show,
        controllers::v1::actor::delete,

        controllers::v1::actor_cast::store,
        controllers::v1::actor_cast::all,
        controllers::v1::actor_cast::show,
        controllers::v1::actor_cast::by_movie,
        controllers::v1::actor_cast::by_actor,
        controllers::v1::actor_cast::delete,

        controllers::v1::user::register,
        controllers::v1::user::all,
        controllers::v1::user::show,
        controllers::v1::user::by_email,
        controllers::v1::user::delete,

        controllers::v1::feedback::store,
        controllers::v1::feedback::all,
        controllers::v1::feedback::show,
        controllers::v1::feedback::by_movie,
        controllers::v1::feedback::by_user,
        controllers::v1::feedback::delete,

        controllers::health::health,
        controllers::health::ready,
    ),
    components(schemas(
        entities::v1::movies::Genre,
        entities::v1::users::Role,
        errors::ErrorResponse,
        security::Identity,

        requests::v1::auth::LoginRequest,
        requests::v1::movie::MovieStoreRequest,
        requests::v1::director::DirectorStoreRequest,
        requests::v1::actor::ActorStoreRequest,
        requests::v1::actor_cast::ActorCastStoreRequest,
        requests::v1::user::RegisterRequest,
        requests::v1::feedback::FeedbackStoreRequest,

        responses::v1::auth::Authenticated,
        responses::v1::auth::LoginHint,
        responses::v1::movie::Movie,
        responses::v1::director::Director,
        responses::v1::actor::Actor,
        responses::v1::actor_cast::ActorCast,
        responses::v1::user::User,
        responses::v1::user::UserWithFeedback,
        responses::v1::feedback::Feedback,

        controllers::health::LivenessResponse,
        controllers::health::ReadinessResponse,
    )),
)]
pub struct Definition;
