//! Movie catalogue over HTTP and through the service functions

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use movie_catalog::entities::v1::movies::{self, Genre};
use movie_catalog::entities::v1::users::Role;
use movie_catalog::errors::Error;
use movie_catalog::prelude::{DatabaseConnection, NaiveDate};
use movie_catalog::responses::v1::movie::Movie;
use movie_catalog::services::v1::movie::{delete, find, store};
use movie_catalog::testing::setup::Context;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use super::{bearer, movie};

#[actix_web::test]
async fn test_save_and_find_movie() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    let request = movie("Alien");
    let req = TestRequest::post()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .set_json(&request)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Movie = read_body_json(resp).await;
    assert!(created.id > 0);
    assert_eq!(created.title, request.title);
    assert_eq!(created.description, request.description);
    assert_eq!(created.date_of_release, request.date_of_release);
    assert_eq!(created.genre, request.genre);
    assert_eq!(created.duration, request.duration);
    assert_eq!(created.director_id, None);

    for uri in [
        format!("/movies/{}", created.id),
        "/movies/title/Alien".to_string(),
        "/movies/description/Alien%20description".to_string(),
    ] {
        let req = TestRequest::get()
            .uri(&uri)
            .insert_header(bearer(&admin))
            .to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");

        let found: Movie = read_body_json(resp).await;
        assert_eq!(found, created, "{uri}");
    }

    for uri in [
        "/movies/released/1979-05-25",
        "/movies/genre/SCIENCE_FICTION",
        "/movies/genre/science-fiction",
        "/movies/duration/117",
    ] {
        let req = TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&admin))
            .to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");

        let found: Vec<Movie> = read_body_json(resp).await;
        assert_eq!(found, vec![created.clone()], "{uri}");
    }
}

#[actix_web::test]
async fn test_duplicate_title_conflicts() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = TestRequest::post()
            .uri("/movies")
            .insert_header(bearer(&admin))
            .set_json(movie("Alien"))
            .to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), expected);

        if expected == StatusCode::CONFLICT {
            let body: serde_json::Value = read_body_json(resp).await;
            assert_eq!(body["message"], "Movie with title Alien already exists");
        }
    }

    assert_eq!(movies::Entity::find().count(&ctx.db).await.unwrap(), 1);
}

#[actix_web::test]
async fn test_bad_path_values_are_rejected() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    for (uri, status) in [
        ("/movies/0", StatusCode::BAD_REQUEST),
        ("/movies/-4", StatusCode::BAD_REQUEST),
        ("/movies/duration/0", StatusCode::BAD_REQUEST),
        ("/movies/director/0", StatusCode::BAD_REQUEST),
        ("/movies/genre/opera", StatusCode::BAD_REQUEST),
        ("/movies/released/25-05-1979", StatusCode::BAD_REQUEST),
        ("/movies/abc", StatusCode::BAD_REQUEST),
        ("/movies/duration/99999999999", StatusCode::BAD_REQUEST),
        ("/movies/director/abc", StatusCode::BAD_REQUEST),
        ("/movies/42", StatusCode::NOT_FOUND),
        ("/movies/title/Missing", StatusCode::NOT_FOUND),
        ("/movies/description/Missing", StatusCode::NOT_FOUND),
    ] {
        let req = TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&admin))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), status, "{uri}");
    }

    let req = TestRequest::get()
        .uri("/movies/0")
        .insert_header(bearer(&admin))
        .to_request();
    let body: serde_json::Value = read_body_json(call_service(&service, req).await).await;
    assert_eq!(body["message"], "id <= 0");
}

#[actix_web::test]
async fn test_unparsable_input_answers_with_a_message() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::get()
        .uri("/movies/abc")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = TestRequest::post()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = read_body_json(resp).await;
    assert!(body["message"].is_string());

    assert_eq!(movies::Entity::find().count(&ctx.db).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_delete_all_invalidates_cached_list() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    for title in ["Alien", "Aliens"] {
        let req = TestRequest::post()
            .uri("/movies")
            .insert_header(bearer(&admin))
            .set_json(movie(title))
            .to_request();
        assert_eq!(call_service(&service, req).await.status(), StatusCode::CREATED);
    }

    let list = |token: &str| {
        TestRequest::get()
            .uri("/movies")
            .insert_header(bearer(token))
            .to_request()
    };

    let movies: Vec<Movie> = read_body_json(call_service(&service, list(&admin)).await).await;
    assert_eq!(movies.len(), 2);

    let req = TestRequest::delete()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let movies: Vec<Movie> = read_body_json(call_service(&service, list(&admin)).await).await;
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_reads_are_memoized_until_a_write() {
    let ctx = Context::new().await;

    store::store(&ctx.db, &ctx.cache, movie("Alien")).await.unwrap();
    assert_eq!(find::all(&ctx.db, &ctx.cache).await.unwrap().len(), 1);

    // written behind the service, the cached list does not see it
    movies::ActiveModel {
        title: Set("Heat".to_string()),
        description: Set(String::new()),
        date_of_release: Set(NaiveDate::from_ymd_opt(1995, 12, 15).unwrap()),
        genre: Set(Genre::Crime),
        duration: Set(170),
        director_id: Set(None),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await
    .unwrap();
    assert_eq!(find::all(&ctx.db, &ctx.cache).await.unwrap().len(), 1);

    // any movie write drops the namespace
    store::store(&ctx.db, &ctx.cache, movie("Aliens")).await.unwrap();
    assert_eq!(find::all(&ctx.db, &ctx.cache).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_not_found_is_not_memoized() {
    let ctx = Context::new().await;

    let missing = find::find_by_title(&ctx.db, &ctx.cache, "Alien".to_string()).await;
    assert!(matches!(missing, Err(Error::NotFound { .. })));

    store::store(&ctx.db, &ctx.cache, movie("Alien")).await.unwrap();

    let found = find::find_by_title(&ctx.db, &ctx.cache, "Alien".to_string())
        .await
        .unwrap();
    assert_eq!(found.title, "Alien");
}

#[tokio::test]
async fn test_non_positive_ids_never_reach_the_store() {
    // every query on a disconnected handle fails with a database error
    let db = DatabaseConnection::default();
    let ctx = Context::new().await;

    for id in [0, -1, i64::MIN] {
        assert!(matches!(
            find::find_by_id(&db, id).await,
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            find::find_by_director_id(&db, id).await,
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            delete::delete_by_id(&db, &ctx.cache, id).await,
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            delete::delete_by_director_id(&db, &ctx.cache, id).await,
            Err(Error::InvalidArgument { .. })
        ));
    }

    assert!(matches!(
        find::find_by_duration(&db, &ctx.cache, 0).await,
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        find::find_by_id(&db, 1).await,
        Err(Error::Internal { .. })
    ));
}

#[tokio::test]
async fn test_delete_by_title_pattern() {
    let ctx = Context::new().await;

    for title in ["Alien", "Aliens", "Heat"] {
        store::store(&ctx.db, &ctx.cache, movie(title)).await.unwrap();
    }

    delete::delete_by_title(&ctx.db, &ctx.cache, "Alien%".to_string())
        .await
        .unwrap();

    let remaining = find::all(&ctx.db, &ctx.cache).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Heat");

    // a missing row is not an error
    assert!(delete::delete_by_id(&ctx.db, &ctx.cache, 999).await.is_ok());
}

#[tokio::test]
async fn test_save_with_unknown_director_fails() {
    let ctx = Context::new().await;

    let request = movie_catalog::requests::v1::movie::MovieStoreRequest {
        director_id: Some(99),
        ..movie("Alien")
    };

    assert!(matches!(
        store::store(&ctx.db, &ctx.cache, request).await,
        Err(Error::NotFound { .. })
    ));
    assert_eq!(movies::Entity::find().count(&ctx.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_insert() {
    let ctx = Context::new().await;

    let request = movie_catalog::requests::v1::movie::MovieStoreRequest {
        duration: -5,
        ..movie("Alien")
    };

    assert!(matches!(
        store::store(&ctx.db, &ctx.cache, request).await,
        Err(Error::Validation { .. })
    ));
    assert_eq!(movies::Entity::find().count(&ctx.db).await.unwrap(), 0);
}
