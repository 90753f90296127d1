//! Account lookups and password changes.

use actix_web::{HttpResponse, web};
use taskdesk_shared::dto::ChangePasswordRequest;

use super::user_response;
use crate::middleware::{AppResult, Caller};
use crate::state::AppState;

/// GET /users/{user_id}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let summary = state.identity.get_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user_response(summary)))
}

/// PUT /users - change the caller's password.
pub async fn change_password(
    state: web::Data<AppState>,
    Caller(caller): Caller,
    body: web::Json<ChangePasswordRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state
        .identity
        .change_password(caller.id, &req.old_password, &req.new_password)
        .await?;

    tracing::info!(user_id = caller.id, "Password changed");
    Ok(HttpResponse::NoContent().finish())
}
