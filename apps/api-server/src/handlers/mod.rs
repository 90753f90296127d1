//! HTTP handlers and route configuration.

mod admin;
mod auth;
mod comments;
mod health;
mod managers;
mod todos;
mod users;

use actix_web::web;
use taskdesk_core::audit::operations;
use taskdesk_core::domain::{CommentView, IdentitySummary, ManagerView, TodoDetail};
use taskdesk_shared::dto::{CommentResponse, ManagerResponse, TodoResponse, UserResponse};

use crate::middleware::AdminGate;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/auth")
                .route("/signup", web::post().to(auth::signup))
                .route("/signin", web::post().to(auth::signin)),
        )
        .service(
            web::scope("/users")
                .route("", web::put().to(users::change_password))
                .route("/{user_id}", web::get().to(users::get_user)),
        )
        .service(
            web::scope("/todos")
                .route("", web::post().to(todos::save_todo))
                .route("", web::get().to(todos::get_todos))
                .route("/{todo_id}", web::get().to(todos::get_todo))
                .route("/{todo_id}/managers", web::post().to(managers::save_manager))
                .route("/{todo_id}/managers", web::get().to(managers::get_managers))
                .route(
                    "/{todo_id}/managers/{manager_id}",
                    web::delete().to(managers::delete_manager),
                )
                .route("/{todo_id}/comments", web::post().to(comments::save_comment))
                .route("/{todo_id}/comments", web::get().to(comments::get_comments)),
        )
        // Route names double as audit operation ids.
        .service(
            web::scope("/admin")
                .wrap(AdminGate)
                .service(
                    web::resource("/users/{user_id}")
                        .name(operations::CHANGE_USER_ROLE)
                        .route(web::patch().to(admin::change_user_role)),
                )
                .service(
                    web::resource("/comments/{comment_id}")
                        .name(operations::DELETE_COMMENT)
                        .route(web::delete().to(admin::delete_comment)),
                ),
        );
}

fn user_response(summary: IdentitySummary) -> UserResponse {
    UserResponse {
        id: summary.id,
        email: summary.email,
    }
}

fn todo_response(detail: TodoDetail) -> TodoResponse {
    let TodoDetail { todo, owner } = detail;
    TodoResponse {
        id: todo.id,
        title: todo.title,
        contents: todo.contents,
        weather: todo.weather,
        user: user_response(owner),
        created_at: todo.created_at,
        modified_at: todo.modified_at,
    }
}

fn manager_response(view: ManagerView) -> ManagerResponse {
    ManagerResponse {
        id: view.id,
        user: user_response(view.identity),
    }
}

fn comment_response(view: CommentView) -> CommentResponse {
    CommentResponse {
        id: view.id,
        contents: view.contents,
        user: user_response(view.author),
    }
}
