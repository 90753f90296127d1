//! Comment handlers.

use actix_web::{HttpResponse, web};
use taskdesk_shared::dto::{CommentResponse, SaveCommentRequest};

use super::comment_response;
use crate::middleware::{AppResult, Caller};
use crate::state::AppState;

/// POST /todos/{todo_id}/comments
pub async fn save_comment(
    state: web::Data<AppState>,
    Caller(caller): Caller,
    path: web::Path<i64>,
    body: web::Json<SaveCommentRequest>,
) -> AppResult<HttpResponse> {
    let view = state
        .comments
        .save_comment(&caller, path.into_inner(), &body.contents)
        .await?;

    Ok(HttpResponse::Created().json(comment_response(view)))
}

/// GET /todos/{todo_id}/comments
pub async fn get_comments(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let comments: Vec<CommentResponse> = state
        .comments
        .get_comments(path.into_inner())
        .await?
        .into_iter()
        .map(comment_response)
        .collect();

    Ok(HttpResponse::Ok().json(comments))
}
