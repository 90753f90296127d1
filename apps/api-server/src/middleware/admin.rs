//! Admin gate - authentication, role guard and audit interception for `/admin`.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use futures::future::LocalBoxFuture;
use taskdesk_core::audit::RequestContext;
use taskdesk_core::domain::{AuthUser, Role};

use crate::middleware::auth::bearer_token;
use crate::middleware::error::AppError;
use crate::observability::RequestId;
use crate::state::AppState;

/// Middleware factory wrapping the admin scope.
///
/// For every request it authenticates the bearer token, requires the stored
/// role `ADMIN`, then runs the handler through the audit interceptor keyed by
/// the matched route name. The authenticated [`AuthUser`] is left in the
/// request extensions for handlers.
pub struct AdminGate;

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGateService {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminGateService<S> {
    service: Rc<S>,
}

/// Authenticate the caller and confirm the admin role.
async fn admit(req: &ServiceRequest) -> Result<(web::Data<AppState>, AuthUser), AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::Internal("AppState not found in app data".to_string()))?;

    let token = bearer_token(req.headers())?;
    let caller = state.identity.authenticate(token)?;
    state.roles.require(caller.id, Role::Admin).await?;

    Ok((state, caller))
}

fn request_context(req: &ServiceRequest, caller: &AuthUser) -> RequestContext {
    // Unnamed admin routes fall back to their path, which is never registered.
    let operation = req.match_name().unwrap_or_else(|| req.path()).to_string();
    let ctx = RequestContext::new(caller.id, operation, req.path());

    match req.extensions().get::<RequestId>() {
        Some(id) => ctx.with_request_id(id.as_str()),
        None => ctx,
    }
}

impl<S, B> Service<ServiceRequest> for AdminGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let admitted = admit(&req).await;
            let (state, caller) = match admitted {
                Ok(admitted) => admitted,
                Err(err) => {
                    tracing::warn!(path = %req.path(), error = %err, "Admin access denied");
                    return Ok(req.error_response(err).map_into_right_body());
                }
            };

            let ctx = request_context(&req, &caller);
            req.extensions_mut().insert(caller);

            let res = state
                .audit
                .intercept(&ctx, || service.call(req))
                .await?;

            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use actix_web::{App, HttpResponse, http::StatusCode, test};
    use taskdesk_core::audit::{AuditRecord, operations};
    use taskdesk_core::ports::AuditSink;
    use taskdesk_infra::{Argon2PasswordService, FixedWeatherClient, JwtConfig, JwtTokenService};

    use super::*;
    use crate::observability::RequestIdMiddleware;
    use crate::state::Repositories;

    #[derive(Default)]
    struct RecordingSink {
        records: Mutex<Vec<AuditRecord>>,
    }

    impl AuditSink for RecordingSink {
        fn record(&self, record: &AuditRecord) {
            self.records.lock().unwrap().push(record.clone());
        }
    }

    fn state_with(sink: Arc<RecordingSink>) -> AppState {
        AppState::from_parts(
            Repositories::in_memory(),
            Arc::new(Argon2PasswordService::new()),
            Arc::new(JwtTokenService::new(JwtConfig {
                secret: "gate-test-secret".to_string(),
                ..JwtConfig::default()
            })),
            Arc::new(FixedWeatherClient("Sunny".to_string())),
            sink,
        )
    }

    async fn bearer(state: &AppState, email: &str, role: Role) -> String {
        let session = state
            .identity
            .signup(email, "Password1", role)
            .await
            .unwrap();
        format!("Bearer {}", session.token)
    }

    async fn audited_handler() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    macro_rules! admin_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .wrap(RequestIdMiddleware)
                    .app_data(web::Data::new($state))
                    .service(
                        web::scope("/admin")
                            .wrap(AdminGate)
                            .service(
                                web::resource("/comments/{comment_id}")
                                    .name(operations::DELETE_COMMENT)
                                    .route(web::delete().to(audited_handler)),
                            )
                            .service(
                                web::resource("/ping")
                                    .name("admin.ping")
                                    .route(web::get().to(audited_handler)),
                            ),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_admin_request_is_audited_with_route_name() {
        let sink = Arc::new(RecordingSink::default());
        let state = state_with(sink.clone());
        let token = bearer(&state, "admin@example.com", Role::Admin).await;
        let app = admin_app!(state);

        let req = test::TestRequest::delete()
            .uri("/admin/comments/3")
            .insert_header(("Authorization", token))
            .insert_header(("X-Request-ID", "req-42"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].operation, operations::DELETE_COMMENT);
        assert_eq!(records[0].path, "/admin/comments/3");
        assert_eq!(records[0].caller_id, 1);
        assert_eq!(records[0].request_id.as_deref(), Some("req-42"));
    }

    #[actix_web::test]
    async fn test_non_admin_is_forbidden_and_not_audited() {
        let sink = Arc::new(RecordingSink::default());
        let state = state_with(sink.clone());
        let token = bearer(&state, "user@example.com", Role::User).await;
        let app = admin_app!(state);

        let req = test::TestRequest::delete()
            .uri("/admin/comments/3")
            .insert_header(("Authorization", token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(sink.records.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let sink = Arc::new(RecordingSink::default());
        let app = admin_app!(state_with(sink.clone()));

        let req = test::TestRequest::delete()
            .uri("/admin/comments/3")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(sink.records.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_demoted_admin_token_is_forbidden() {
        let sink = Arc::new(RecordingSink::default());
        let state = state_with(sink.clone());
        let token = bearer(&state, "admin@example.com", Role::Admin).await;
        state.roles.change_user_role(1, "USER").await.unwrap();
        let app = admin_app!(state);

        let req = test::TestRequest::delete()
            .uri("/admin/comments/3")
            .insert_header(("Authorization", token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_unregistered_admin_route_is_guarded_but_not_audited() {
        let sink = Arc::new(RecordingSink::default());
        let state = state_with(sink.clone());
        let token = bearer(&state, "admin@example.com", Role::Admin).await;
        let app = admin_app!(state);

        let req = test::TestRequest::get()
            .uri("/admin/ping")
            .insert_header(("Authorization", token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(sink.records.lock().unwrap().is_empty());
    }
}
