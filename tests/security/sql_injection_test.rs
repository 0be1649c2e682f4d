//! Hostile input is bound as data, never executed
//!
//! sea-orm issues parameterised statements. Each test sends a classic
//! injection payload and checks that tables and rows survive.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use movie_catalog::entities::v1::{movies, users};
use movie_catalog::entities::v1::users::Role;
use movie_catalog::requests::v1::auth::LoginRequest;
use movie_catalog::requests::v1::movie::MovieStoreRequest;
use movie_catalog::responses::v1::movie::Movie;
use movie_catalog::services::v1::movie::delete;
use movie_catalog::testing::setup::Context;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::security::support::{bearer, movie};

#[actix_web::test]
async fn test_injection_in_title_lookup() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::post()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .set_json(movie("Alien"))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::CREATED);

    // ' OR '1'='1
    let req = TestRequest::get()
        .uri("/movies/title/%27%20OR%20%271%27%3D%271")
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_injection_stored_as_literal_title() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    let title = "Alien'; DROP TABLE movies; --";
    let req = TestRequest::post()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .set_json(MovieStoreRequest {
            description: "'; DELETE FROM users; --".to_string(),
            ..movie(title)
        })
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Movie = read_body_json(resp).await;
    assert_eq!(created.title, title);

    assert_eq!(movies::Entity::find().count(&ctx.db).await.unwrap(), 1);
    assert!(users::Entity::find().count(&ctx.db).await.unwrap() >= 2);
}

#[actix_web::test]
async fn test_injection_in_login_credentials() {
    let ctx = Context::new().await;
    ctx.user("user@example.com", Role::User).await;
    let service = movie_catalog::service!(ctx);

    for (email, password) in [
        ("user@example.com' --", "anything"),
        ("' OR 1=1 --", "' OR 1=1 --"),
        ("user@example.com", "' OR '1'='1"),
    ] {
        let req = TestRequest::post()
            .uri("/login")
            .set_json(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .to_request();

        assert_eq!(
            call_service(&service, req).await.status(),
            StatusCode::UNAUTHORIZED,
            "{email}"
        );
    }
}

#[tokio::test]
async fn test_injection_in_title_pattern_delete() {
    let ctx = Context::new().await;

    for title in ["Alien", "Heat"] {
        movie_catalog::services::v1::movie::store::store(&ctx.db, &ctx.cache, movie(title))
            .await
            .unwrap();
    }

    delete::delete_by_title(&ctx.db, &ctx.cache, "x' OR '1'='1".to_string())
        .await
        .unwrap();

    assert_eq!(movies::Entity::find().count(&ctx.db).await.unwrap(), 2);
}
