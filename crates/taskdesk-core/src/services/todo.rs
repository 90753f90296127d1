//! Todo creation and lookup.

use std::sync::Arc;

use crate::domain::{AuthUser, Page, PageRequest, Todo, TodoDetail};
use crate::error::DomainError;
use crate::ports::{IdentityRepository, TodoRepository, WeatherClient};

#[derive(Clone)]
pub struct TodoService {
    todos: Arc<dyn TodoRepository>,
    identities: Arc<dyn IdentityRepository>,
    weather: Arc<dyn WeatherClient>,
}

impl TodoService {
    pub fn new(
        todos: Arc<dyn TodoRepository>,
        identities: Arc<dyn IdentityRepository>,
        weather: Arc<dyn WeatherClient>,
    ) -> Self {
        Self {
            todos,
            identities,
            weather,
        }
    }

    /// Create a todo owned by `caller`, stamped with today's weather.
    pub async fn save_todo(
        &self,
        caller: &AuthUser,
        title: &str,
        contents: &str,
    ) -> Result<TodoDetail, DomainError> {
        let owner = self
            .identities
            .find_by_id(caller.id)
            .await?
            .ok_or(DomainError::UnknownIdentity)?;

        let weather = self.weather.today_weather().await?;
        let todo = Todo::new(title.to_string(), contents.to_string(), weather, owner.id);
        let saved = self.todos.save(todo).await?;

        Ok(TodoDetail {
            todo: saved,
            owner: owner.summary(),
        })
    }

    pub async fn get_todos(&self, request: PageRequest) -> Result<Page<TodoDetail>, DomainError> {
        Ok(self.todos.find_page(request).await?)
    }

    pub async fn get_todo(&self, todo_id: i64) -> Result<TodoDetail, DomainError> {
        self.todos
            .find_by_id_with_owner(todo_id)
            .await?
            .ok_or(DomainError::TodoNotFound)
    }
}
