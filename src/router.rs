use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;
use crate::prelude::*;

/// Every route of the service. Shared state (`DatabaseConnection`,
/// `ResponseCache`, `Sessions`, ...) is registered by the caller.
pub fn route(app: &mut ServiceConfig) {
    // Extractor failures answer like any other invalid argument
    app.app_data(
        web::PathConfig::default()
            .error_handler(|e, _| Error::invalid_argument(e.to_string()).into()),
    );
    app.app_data(
        web::JsonConfig::default()
            .error_handler(|e, _| Error::invalid_argument(e.to_string()).into()),
    );

    // Auth
    app.service(controllers::v1::auth::hint);
    app.service(controllers::v1::auth::login);
    app.service(controllers::v1::auth::logout);
    app.service(controllers::v1::auth::me);
    // Movie
    app.service(controllers::v1::movie::store);
    app.service(controllers::v1::movie::all);
    app.service(controllers::v1::movie::delete_all);
    app.service(controllers::v1::movie::show);
    app.service(controllers::v1::movie::delete);
    app.service(controllers::v1::movie::by_title);
    app.service(controllers::v1::movie::delete_by_title);
    app.service(controllers::v1::movie::by_description);
    app.service(controllers::v1::movie::by_date_of_release);
    app.service(controllers::v1::movie::by_genre);
    app.service(controllers::v1::movie::by_duration);
    app.service(controllers::v1::movie::by_director);
    app.service(controllers::v1::movie::delete_by_director);
    // Director
    app.service(controllers::v1::director::store);
    app.service(controllers::v1::director::all);
    app.service(controllers::v1::director::show);
    app.service(controllers::v1::director::movies);
    app.service(controllers::v1::director::delete);
    // Actor
    app.service(controllers::v1::actor::store);
    app.service(controllers::v1::actor::all);
    app.service(controllers::v1::actor::show);
    app.service(controllers::v1::actor::delete);
    // Actor cast
    app.service(controllers::v1::actor_cast::store);
    app.service(controllers::v1::actor_cast::all);
    app.service(controllers::v1::actor_cast::show);
    app.service(controllers::v1::actor_cast::by_movie);
    app.service(controllers::v1::actor_cast::by_actor);
    app.service(controllers::v1::actor_cast::delete);
    // User
    app.service(controllers::v1::user::register);
    app.service(controllers::v1::user::all);
    app.service(controllers::v1::user::show);
    app.service(controllers::v1::user::by_email);
    app.service(controllers::v1::user::delete);
    // Feedback
    app.service(controllers::v1::feedback::store);
    app.service(controllers::v1::feedback::all);
    app.service(controllers::v1::feedback::show);
    app.service(controllers::v1::feedback::by_movie);
    app.service(controllers::v1::feedback::by_user);
    app.service(controllers::v1::feedback::delete);

    // Health
    app.service(controllers::health::health);
    app.service(controllers::health::ready);
}

/// Prometheus text exposition at `path`
pub fn metrics(app: &mut ServiceConfig, path: &str) {
    app.route(path, web::get().to(controllers::metrics::metrics));
}

/// Swagger UI under `/docs/`, must be registered last
pub fn docs(app: &mut ServiceConfig) {
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Movie catalog", "/api-docs/openapi.json"),
        Definition::openapi(),
    )]));
}
