//! Actors, casts, users and feedback

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use movie_catalog::entities::v1::users::Role;
use movie_catalog::requests::v1::actor::ActorStoreRequest;
use movie_catalog::requests::v1::actor_cast::ActorCastStoreRequest;
use movie_catalog::requests::v1::feedback::FeedbackStoreRequest;
use movie_catalog::responses::v1::actor::Actor;
use movie_catalog::responses::v1::actor_cast::ActorCast;
use movie_catalog::responses::v1::feedback::Feedback;
use movie_catalog::responses::v1::movie::Movie;
use movie_catalog::responses::v1::user::{User, UserWithFeedback};
use movie_catalog::testing::setup::{self, Context};

use super::{bearer, movie};

#[actix_web::test]
async fn test_cast_an_actor() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::post()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .set_json(movie("Alien"))
        .to_request();
    let movie: Movie = read_body_json(call_service(&service, req).await).await;

    let req = TestRequest::post()
        .uri("/actors")
        .insert_header(bearer(&admin))
        .set_json(ActorStoreRequest {
            first_name: "Sigourney".to_string(),
            last_name: "Weaver".to_string(),
            date_of_birth: None,
        })
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let actor: Actor = read_body_json(resp).await;

    // unknown movie
    let req = TestRequest::post()
        .uri("/actorsCasts")
        .insert_header(bearer(&admin))
        .set_json(ActorCastStoreRequest {
            actor_id: actor.id,
            movie_id: movie.id + 100,
            character_name: "Ellen Ripley".to_string(),
        })
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::post()
        .uri("/actorsCasts")
        .insert_header(bearer(&admin))
        .set_json(ActorCastStoreRequest {
            actor_id: actor.id,
            movie_id: movie.id,
            character_name: "Ellen Ripley".to_string(),
        })
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let cast: ActorCast = read_body_json(resp).await;
    assert_eq!(cast.character_name, "Ellen Ripley");

    for uri in [
        format!("/actorsCasts/movie/{}", movie.id),
        format!("/actorsCasts/actor/{}", actor.id),
    ] {
        let req = TestRequest::get()
            .uri(&uri)
            .insert_header(bearer(&admin))
            .to_request();
        let casts: Vec<ActorCast> = read_body_json(call_service(&service, req).await).await;
        assert_eq!(casts, vec![cast.clone()], "{uri}");
    }

    // deleting the actor cascades to the cast
    let req = TestRequest::delete()
        .uri(&format!("/actors/{}", actor.id))
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri(&format!("/actorsCasts/{}", cast.id))
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_feedback_is_authored_by_caller() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let user = ctx.user("viewer@example.com", Role::User).await;
    let token = setup::token(&ctx.db, &user).await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::post()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .set_json(movie("Alien"))
        .to_request();
    let movie: Movie = read_body_json(call_service(&service, req).await).await;

    let req = TestRequest::post()
        .uri("/feedbacks")
        .insert_header(bearer(&token))
        .set_json(FeedbackStoreRequest {
            movie_id: movie.id,
            text: "Still terrifying.".to_string(),
            rating: 9,
        })
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let feedback: Feedback = read_body_json(resp).await;
    assert_eq!(feedback.user_id, user.id);
    assert_eq!(feedback.movie_id, movie.id);

    let req = TestRequest::post()
        .uri("/feedbacks")
        .insert_header(bearer(&token))
        .set_json(FeedbackStoreRequest {
            movie_id: movie.id,
            text: "Off the scale".to_string(),
            rating: 11,
        })
        .to_request();
    assert_eq!(
        call_service(&service, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let req = TestRequest::get()
        .uri(&format!("/users/{}", user.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let shown: UserWithFeedback = read_body_json(resp).await;
    assert_eq!(shown.email, "viewer@example.com");
    assert_eq!(shown.feedback_list, vec![feedback.clone()]);

    for uri in [
        format!("/feedbacks/movie/{}", movie.id),
        format!("/feedbacks/user/{}", user.id),
    ] {
        let req = TestRequest::get()
            .uri(&uri)
            .insert_header(bearer(&token))
            .to_request();
        let feedbacks: Vec<Feedback> = read_body_json(call_service(&service, req).await).await;
        assert_eq!(feedbacks, vec![feedback.clone()], "{uri}");
    }
}

#[actix_web::test]
async fn test_user_lookup_and_removal() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let user = ctx.user("gone@example.com", Role::User).await;
    let token = setup::token(&ctx.db, &user).await;
    let service = movie_catalog::service!(ctx);

    // resolve once so the identity is cached
    let req = TestRequest::get()
        .uri("/me")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri("/users/email/gone@example.com")
        .insert_header(bearer(&admin))
        .to_request();
    let found: User = read_body_json(call_service(&service, req).await).await;
    assert_eq!(found.id, user.id);

    let req = TestRequest::get()
        .uri("/users")
        .insert_header(bearer(&admin))
        .to_request();
    let users: Vec<User> = read_body_json(call_service(&service, req).await).await;
    // seeded administrator, the admin token owner and the user
    assert_eq!(users.len(), 3);

    let req = TestRequest::delete()
        .uri(&format!("/users/{}", user.id))
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    // sessions of a deleted user stop working at once
    let req = TestRequest::get()
        .uri("/me")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::FOUND);

    let req = TestRequest::delete()
        .uri(&format!("/users/{}", user.id))
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);
}
