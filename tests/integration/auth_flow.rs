//! Register, login, current identity and logout over HTTP

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::test::{TestRequest, call_service, read_body_json};
use movie_catalog::entities::v1::users::{self, Role};
use movie_catalog::requests::v1::auth::LoginRequest;
use movie_catalog::requests::v1::user::RegisterRequest;
use movie_catalog::responses::v1::auth::{Authenticated, LoginHint};
use movie_catalog::responses::v1::user::User;
use movie_catalog::security::Identity;
use movie_catalog::testing::setup::{self, Context};

use super::bearer;

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[actix_web::test]
async fn test_register_login_me_logout() {
    let ctx = Context::new().await;
    let service = movie_catalog::service!(ctx);

    // register is public
    let req = TestRequest::post()
        .uri("/register")
        .set_json(RegisterRequest {
            email: "Jane.Doe@Example.com".to_string(),
            nick_name: "jane".to_string(),
            password: "correct horse".to_string(),
        })
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let user: User = read_body_json(resp).await;
    assert_eq!(user.email, "jane.doe@example.com");
    assert_eq!(user.role, Role::User);

    // login with a differently cased email
    let req = TestRequest::post()
        .uri("/login")
        .set_json(login("JANE.DOE@example.com", "correct horse"))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let authenticated: Authenticated = read_body_json(resp).await;
    assert_eq!(authenticated.user.id, user.id);
    assert!(!authenticated.token.is_empty());

    // current identity
    let req = TestRequest::get()
        .uri("/me")
        .insert_header(bearer(&authenticated.token))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let identity: Identity = read_body_json(resp).await;
    assert_eq!(identity.id, user.id);
    assert_eq!(identity.email, "jane.doe@example.com");

    // logout revokes the token and the cached identity
    let req = TestRequest::post()
        .uri("/logout")
        .insert_header(bearer(&authenticated.token))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri("/me")
        .insert_header(bearer(&authenticated.token))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn test_bad_credentials_share_one_error() {
    let ctx = Context::new().await;
    ctx.user("user@example.com", Role::User).await;
    let service = movie_catalog::service!(ctx);

    let mut messages = Vec::new();
    for request in [
        login("user@example.com", "wrong password"),
        login("nobody@example.com", setup::PASSWORD),
    ] {
        let req = TestRequest::post().uri("/login").set_json(request).to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = read_body_json(resp).await;
        messages.push(body["message"].as_str().unwrap().to_string());
    }

    assert_eq!(messages[0], "Invalid email or password");
    assert_eq!(messages[0], messages[1]);
}

#[actix_web::test]
async fn test_seeded_admin_login_upgrades_hash() {
    let ctx = Context::new().await;
    let service = movie_catalog::service!(ctx);

    let before = users::Model::find_by_email(&ctx.db, "admin@local")
        .await
        .unwrap()
        .unwrap();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(login("admin@local", "password"))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let authenticated: Authenticated = read_body_json(resp).await;
    assert_eq!(authenticated.user.role, Role::Admin);

    let after = users::Model::find_by_email(&ctx.db, "admin@local")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(before.password, after.password);
    assert!(!ctx.hasher.needs_rehash(&after.password).unwrap());
    assert!(ctx.hasher.verify("password", &after.password).unwrap());
}

#[actix_web::test]
async fn test_register_rejects_duplicate_and_invalid_input() {
    let ctx = Context::new().await;
    ctx.user("taken@example.com", Role::User).await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::post()
        .uri("/register")
        .set_json(RegisterRequest {
            email: "taken@example.com".to_string(),
            nick_name: "taken".to_string(),
            password: "password".to_string(),
        })
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = TestRequest::post()
        .uri("/register")
        .set_json(RegisterRequest {
            email: "not-an-email".to_string(),
            nick_name: "x".to_string(),
            password: "short".to_string(),
        })
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = read_body_json(resp).await;
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["nickName"].is_array());
    assert!(body["errors"]["password"].is_array());
}

#[actix_web::test]
async fn test_login_hint_is_public() {
    let ctx = Context::new().await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::get().uri("/login").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let hint: LoginHint = read_body_json(resp).await;
    assert_eq!(hint.path, "/login");
}

#[actix_web::test]
async fn test_unknown_token_is_redirected() {
    let ctx = Context::new().await;
    let service = movie_catalog::service!(ctx);

    for header in ["Bearer 00000000000000000000000000000000", "Bearer not-a-token", "Basic abc"] {
        let req = TestRequest::get()
            .uri("/movies")
            .insert_header(("Authorization", header))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND, "{header}");
    }
}
