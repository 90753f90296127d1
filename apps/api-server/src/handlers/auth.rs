//! Signup and signin.

use actix_web::{HttpResponse, web};
use taskdesk_core::domain::Role;
use taskdesk_core::services::AuthSession;
use taskdesk_shared::dto::{AuthResponse, SigninRequest, SignupRequest};

use super::user_response;
use crate::middleware::AppResult;
use crate::state::AppState;

fn auth_response(session: AuthSession) -> AuthResponse {
    AuthResponse {
        bearer_token: format!("Bearer {}", session.token),
        expires_in: session.expires_in,
        user: user_response(session.identity),
    }
}

/// POST /auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let role: Role = req.user_role.parse()?;

    let session = state.identity.signup(&req.email, &req.password, role).await?;
    tracing::info!(user_id = session.identity.id, role = %session.role, "User signed up");

    Ok(HttpResponse::Created().json(auth_response(session)))
}

/// POST /auth/signin
pub async fn signin(
    state: web::Data<AppState>,
    body: web::Json<SigninRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let session = state.identity.signin(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(auth_response(session)))
}
