//! Todo handlers.

use actix_web::{HttpResponse, web};
use taskdesk_core::domain::PageRequest;
use taskdesk_shared::dto::{PageQuery, PageResponse, SaveTodoRequest};

use super::todo_response;
use crate::middleware::{AppResult, Caller};
use crate::state::AppState;

/// POST /todos
pub async fn save_todo(
    state: web::Data<AppState>,
    Caller(caller): Caller,
    body: web::Json<SaveTodoRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let detail = state
        .todos
        .save_todo(&caller, &req.title, &req.contents)
        .await?;

    Ok(HttpResponse::Created().json(todo_response(detail)))
}

/// GET /todos?page=&size=
pub async fn get_todos(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .todos
        .get_todos(PageRequest::new(query.page, query.size))
        .await?;

    let total_pages = page.total_pages();
    let page = page.map(todo_response);
    Ok(HttpResponse::Ok().json(PageResponse {
        content: page.items,
        page: page.page,
        size: page.size,
        total_elements: page.total_items,
        total_pages,
    }))
}

/// GET /todos/{todo_id}
pub async fn get_todo(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let detail = state.todos.get_todo(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(todo_response(detail)))
}
