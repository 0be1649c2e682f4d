use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{AUTHORIZATION, HeaderMap, LOCATION};
use actix_web::web::Data;
use actix_web::{HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::security::rules::{self, Decision, LOGIN_PATH};
use crate::security::{Identity, Sessions};

/// Authenticates the bearer token and applies the access rules.
///
/// Rules are evaluated against the percent-decoded path the router matches
/// on. Denied requests are redirected to [`LOGIN_PATH`]. Allowed requests
/// carry the resolved [`Identity`] in their extensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityFilter;

impl<S, B> Transform<S, ServiceRequest> for SecurityFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = SecurityFilterService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityFilterService {
            service: Rc::new(service),
        }))
    }
}

pub struct SecurityFilterService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SecurityFilterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let identity = match bearer_token(req.headers()) {
                Some(token) => authenticate(&req, token).await?,
                None => None,
            };

            let path = req.match_info().as_str().to_string();

            match rules::authorize(req.method().as_str(), &path, identity.as_ref()) {
                Decision::Allow => {
                    if let Some(identity) = identity {
                        req.extensions_mut().insert(identity);
                    }

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Decision::Deny(denial) => {
                    ::tracing::info!(
                        method = %req.method(),
                        path = %path,
                        ?denial,
                        "Access denied"
                    );

                    if let Some(metrics) = req.app_data::<Data<AppMetrics>>() {
                        metrics.record_access_denied(req.method().as_str());
                    }

                    let response = HttpResponse::Found()
                        .insert_header((LOCATION, LOGIN_PATH))
                        .finish();

                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Token of an `Authorization: Bearer <token>` header, malformed values are ignored
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    Uuid::parse_str(token.trim()).ok()
}

async fn authenticate(req: &ServiceRequest, token: Uuid) -> Result<Option<Identity>, Error> {
    let db = req
        .app_data::<Data<DatabaseConnection>>()
        .cloned()
        .ok_or_else(|| Error::internal("Database connection is not configured"))?;
    let sessions = req
        .app_data::<Data<Sessions>>()
        .cloned()
        .ok_or_else(|| Error::internal("Session store is not configured"))?;

    sessions.resolve(&db, token).await
}
