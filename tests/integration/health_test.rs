use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use movie_catalog::controllers::health::ReadinessResponse;
use movie_catalog::testing::setup::Context;

#[actix_web::test]
async fn test_probes_are_public() {
    let ctx = Context::new().await;
    let service = movie_catalog::service!(ctx);

    let req = TestRequest::get().uri("/health").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/ready").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ReadinessResponse = read_body_json(resp).await;
    assert_eq!(body.status, "ready");
    assert_eq!(body.database, "connected");
    assert_eq!(body.cache, "available");
}
