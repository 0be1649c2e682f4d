use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use movie_catalog::entities::v1::users::Role;
use movie_catalog::prelude::NaiveDate;
use movie_catalog::requests::v1::director::DirectorStoreRequest;
use movie_catalog::requests::v1::movie::MovieStoreRequest;
use movie_catalog::responses::v1::director::Director;
use movie_catalog::responses::v1::movie::Movie;
use movie_catalog::testing::setup::Context;

use super::{bearer, movie};

#[actix_web::test]
async fn test_deleting_director_removes_their_movies() {
    let ctx = Context::new().await;
    let admin = ctx.token(Role::Admin).await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::post()
        .uri("/directors")
        .insert_header(bearer(&admin))
        .set_json(DirectorStoreRequest {
            first_name: "Ridley".to_string(),
            last_name: "Scott".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1937, 11, 30),
        })
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let director: Director = read_body_json(resp).await;

    let mut ids = Vec::new();
    for (title, director_id) in [("Alien", Some(director.id)), ("Heat", None)] {
        let req = TestRequest::post()
            .uri("/movies")
            .insert_header(bearer(&admin))
            .set_json(MovieStoreRequest {
                director_id,
                ..movie(title)
            })
            .to_request();
        let created: Movie = read_body_json(call_service(&service, req).await).await;
        ids.push(created.id);
    }

    // warm the cached list
    let req = TestRequest::get()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .to_request();
    let movies: Vec<Movie> = read_body_json(call_service(&service, req).await).await;
    assert_eq!(movies.len(), 2);

    let req = TestRequest::get()
        .uri(&format!("/directors/{}/movies", director.id))
        .insert_header(bearer(&admin))
        .to_request();
    let movies: Vec<Movie> = read_body_json(call_service(&service, req).await).await;
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Alien");

    let req = TestRequest::delete()
        .uri(&format!("/directors/{}", director.id))
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri(&format!("/movies/{}", ids[0]))
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::get()
        .uri("/movies")
        .insert_header(bearer(&admin))
        .to_request();
    let movies: Vec<Movie> = read_body_json(call_service(&service, req).await).await;
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, ids[1]);

    let req = TestRequest::get()
        .uri(&format!("/directors/{}", director.id))
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_director_lookups() {
    let ctx = Context::new().await;
    let user = ctx.token(Role::User).await;
    let service = movie_catalog::service!(ctx);

    for (uri, status) in [
        ("/directors", StatusCode::OK),
        ("/directors/0", StatusCode::BAD_REQUEST),
        ("/directors/7", StatusCode::NOT_FOUND),
        ("/directors/7/movies", StatusCode::NOT_FOUND),
    ] {
        let req = TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&user))
            .to_request();

        assert_eq!(call_service(&service, req).await.status(), status, "{uri}");
    }
}
