//! Admin handlers. Only reachable through the admin gate, which has already
//! confirmed the caller's role and emitted the audit record.

use actix_web::{HttpResponse, web};
use taskdesk_shared::dto::{ChangeRoleRequest, RoleChangedResponse};

use crate::middleware::{AppResult, Caller};
use crate::state::AppState;

/// PATCH /admin/users/{user_id}
pub async fn change_user_role(
    state: web::Data<AppState>,
    Caller(admin): Caller,
    path: web::Path<i64>,
    body: web::Json<ChangeRoleRequest>,
) -> AppResult<HttpResponse> {
    let identity = state
        .roles
        .change_user_role(path.into_inner(), &body.role)
        .await?;

    tracing::info!(
        admin_id = admin.id,
        user_id = identity.id,
        role = %identity.role,
        "User role changed"
    );
    Ok(HttpResponse::Ok().json(RoleChangedResponse {
        id: identity.id,
        email: identity.email,
        role: identity.role.to_string(),
    }))
}

/// DELETE /admin/comments/{comment_id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    Caller(admin): Caller,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let comment_id = path.into_inner();
    state.comments.delete_comment(comment_id).await?;

    tracing::info!(admin_id = admin.id, comment_id, "Comment deleted");
    Ok(HttpResponse::NoContent().finish())
}
