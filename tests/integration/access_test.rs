//! Role based access through the security filter

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::test::{TestRequest, call_service};
use movie_catalog::entities::v1::users::Role;
use movie_catalog::testing::setup::Context;
use serde_json::json;

use super::{bearer, movie};

#[actix_web::test]
async fn test_anonymous_reads_are_redirected_to_login() {
    let ctx = Context::new().await;
    let service = movie_catalog::service!(ctx);

    for uri in ["/movies", "/movies/1", "/directors", "/actors", "/actorsCasts", "/users", "/feedbacks", "/me", "/metrics"] {
        let req = TestRequest::get().uri(uri).to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login", "{uri}");
    }
}

#[actix_web::test]
async fn test_user_and_admin_can_read_movies() {
    let ctx = Context::new().await;
    let user = ctx.token(Role::User).await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    for token in [&user, &admin] {
        let req = TestRequest::get()
            .uri("/movies")
            .insert_header(bearer(token))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[actix_web::test]
async fn test_user_cannot_write_catalog() {
    let ctx = Context::new().await;
    let user = ctx.token(Role::User).await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::post()
        .uri("/movies")
        .insert_header(bearer(&user))
        .set_json(movie("Alien"))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    for uri in ["/movies", "/movies/1", "/directors/1", "/users/1", "/feedbacks/1"] {
        let req = TestRequest::delete()
            .uri(uri)
            .insert_header(bearer(&user))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login", "{uri}");
    }
}

#[actix_web::test]
async fn test_percent_encoded_paths_follow_the_same_rules() {
    let ctx = Context::new().await;
    let user = ctx.token(Role::User).await;
    let service = movie_catalog::service!(ctx);

    for (uri, body) in [
        ("/%6Dovies", json!(movie("Alien"))),
        ("/movie%73", json!(movie("Aliens"))),
        ("/director%73", json!({"firstName": "Ridley", "lastName": "Scott"})),
        ("/%61ctors", json!({"firstName": "Sigourney", "lastName": "Weaver"})),
        ("/actorsCast%73", json!({"actorId": 1, "movieId": 1, "characterName": "Ripley"})),
    ] {
        let req = TestRequest::post()
            .uri(uri)
            .insert_header(bearer(&user))
            .set_json(body)
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login", "{uri}");
    }

    let req = TestRequest::get()
        .uri("/%6Dovies")
        .insert_header(bearer(&user))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_admin_reaches_handlers_through_encoded_paths() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::post()
        .uri("/%6Dovies")
        .insert_header(bearer(&admin))
        .set_json(movie("Alien"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_admin_can_delete() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::delete()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_authenticated_user_reaches_unlisted_routes() {
    let ctx = Context::new().await;
    let user = ctx.token(Role::User).await;
    let service = movie_catalog::service!(ctx);

    for uri in ["/me", "/metrics"] {
        let req = TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&user))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}
