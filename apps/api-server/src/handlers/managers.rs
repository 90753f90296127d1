//! Manager assignment handlers.

use actix_web::{HttpResponse, web};
use taskdesk_shared::dto::{ManagerResponse, SaveManagerRequest};

use super::manager_response;
use crate::middleware::{AppResult, Caller};
use crate::state::AppState;

/// POST /todos/{todo_id}/managers
pub async fn save_manager(
    state: web::Data<AppState>,
    Caller(caller): Caller,
    path: web::Path<i64>,
    body: web::Json<SaveManagerRequest>,
) -> AppResult<HttpResponse> {
    let todo_id = path.into_inner();
    let view = state
        .managers
        .save_manager(&caller, todo_id, body.manager_user_id)
        .await?;

    tracing::info!(
        todo_id,
        manager_id = view.id,
        assigned_user_id = view.identity.id,
        "Manager assigned"
    );
    Ok(HttpResponse::Created().json(manager_response(view)))
}

/// GET /todos/{todo_id}/managers
pub async fn get_managers(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let managers: Vec<ManagerResponse> = state
        .managers
        .get_managers(path.into_inner())
        .await?
        .into_iter()
        .map(manager_response)
        .collect();

    Ok(HttpResponse::Ok().json(managers))
}

/// DELETE /todos/{todo_id}/managers/{manager_id}
pub async fn delete_manager(
    state: web::Data<AppState>,
    Caller(caller): Caller,
    path: web::Path<(i64, i64)>,
) -> AppResult<HttpResponse> {
    let (todo_id, manager_id) = path.into_inner();
    state
        .managers
        .delete_manager(caller.id, todo_id, manager_id)
        .await?;

    tracing::info!(todo_id, manager_id, "Manager removed");
    Ok(HttpResponse::NoContent().finish())
}
