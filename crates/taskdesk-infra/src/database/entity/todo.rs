//! Todo entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use taskdesk_core::domain::Todo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
    pub weather: String,
    pub user_id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub modified_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Todo {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            contents: model.contents,
            weather: model.weather,
            owner_id: Some(model.user_id),
            created_at: model.created_at.into(),
            modified_at: model.modified_at.into(),
        }
    }
}

/// Ownership is written only on insert; updates leave `user_id` untouched.
impl From<Todo> for ActiveModel {
    fn from(todo: Todo) -> Self {
        let is_new = todo.is_new();
        Self {
            id: if is_new { NotSet } else { Set(todo.id) },
            title: Set(todo.title),
            contents: Set(todo.contents),
            weather: Set(todo.weather),
            user_id: match todo.owner_id {
                Some(owner_id) if is_new => Set(owner_id),
                _ => NotSet,
            },
            created_at: Set(todo.created_at.into()),
            modified_at: Set(todo.modified_at.into()),
        }
    }
}
