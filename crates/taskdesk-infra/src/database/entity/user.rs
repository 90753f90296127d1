//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use taskdesk_core::domain::{Identity, IdentitySummary, Role};

/// Role column, stored as its literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "USER")]
    User,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

impl From<UserRole> for Role {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => Role::User,
            UserRole::Admin => Role::Admin,
        }
    }
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => UserRole::User,
            Role::Admin => UserRole::Admin,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub user_role: UserRole,
    pub created_at: DateTimeWithTimeZone,
    pub modified_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Identity.
impl From<Model> for Identity {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            password_hash: model.password,
            role: model.user_role.into(),
            created_at: model.created_at.into(),
            modified_at: model.modified_at.into(),
        }
    }
}

impl From<Model> for IdentitySummary {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
        }
    }
}

/// Conversion from Domain Identity to SeaORM ActiveModel.
/// An unsaved identity leaves `id` unset so the database assigns it.
impl From<Identity> for ActiveModel {
    fn from(identity: Identity) -> Self {
        Self {
            id: if identity.is_new() {
                NotSet
            } else {
                Set(identity.id)
            },
            email: Set(identity.email),
            password: Set(identity.password_hash),
            user_role: Set(identity.role.into()),
            created_at: Set(identity.created_at.into()),
            modified_at: Set(identity.modified_at.into()),
        }
    }
}
