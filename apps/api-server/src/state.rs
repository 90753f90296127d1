//! Application state - shared across all handlers.

use std::sync::Arc;

use taskdesk_core::audit::AuditInterceptor;
use taskdesk_core::ports::{
    AuditSink, CommentRepository, IdentityRepository, ManagerRepository, PasswordService,
    TodoRepository, TokenService, WeatherClient,
};
use taskdesk_core::services::{
    CommentService, IdentityService, ManagerService, RoleGuard, TodoService,
};
use taskdesk_infra::{
    Argon2PasswordService, InMemoryCommentRepository, InMemoryDatabase,
    InMemoryIdentityRepository, InMemoryManagerRepository, InMemoryTodoRepository,
    JwtTokenService, TracingAuditSink,
};

use crate::config::AppConfig;

/// The storage-backed ports, all pointing at the same backend.
#[derive(Clone)]
pub struct Repositories {
    pub identities: Arc<dyn IdentityRepository>,
    pub todos: Arc<dyn TodoRepository>,
    pub managers: Arc<dyn ManagerRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        let db = InMemoryDatabase::new();
        Self {
            identities: Arc::new(InMemoryIdentityRepository::new(db.clone())),
            todos: Arc::new(InMemoryTodoRepository::new(db.clone())),
            managers: Arc::new(InMemoryManagerRepository::new(db.clone())),
            comments: Arc::new(InMemoryCommentRepository::new(db)),
        }
    }

    #[cfg(feature = "postgres")]
    async fn postgres(config: &taskdesk_infra::database::DatabaseConfig) -> Option<Self> {
        use taskdesk_infra::database::{
            PostgresCommentRepository, PostgresIdentityRepository, PostgresManagerRepository,
            PostgresTodoRepository, connect,
        };

        match connect(config).await {
            Ok(conn) => Some(Self {
                identities: Arc::new(PostgresIdentityRepository::new(conn.clone())),
                todos: Arc::new(PostgresTodoRepository::new(conn.clone())),
                managers: Arc::new(PostgresManagerRepository::new(conn.clone())),
                comments: Arc::new(PostgresCommentRepository::new(conn)),
            }),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                None
            }
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub identity: IdentityService,
    pub roles: RoleGuard,
    pub todos: TodoService,
    pub managers: ManagerService,
    pub comments: CommentService,
    pub audit: AuditInterceptor,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let repos = Self::repositories(config).await;

        Self::from_parts(
            repos,
            Arc::new(Argon2PasswordService::new()),
            Arc::new(JwtTokenService::new(config.jwt.clone())),
            Self::weather_client(config),
            Arc::new(TracingAuditSink),
        )
    }

    /// Wire the services over explicit collaborators.
    pub fn from_parts(
        repos: Repositories,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
        weather: Arc<dyn WeatherClient>,
        audit_sink: Arc<dyn AuditSink>,
    ) -> Self {
        let state = Self {
            identity: IdentityService::new(repos.identities.clone(), passwords, tokens),
            roles: RoleGuard::new(repos.identities.clone()),
            todos: TodoService::new(repos.todos.clone(), repos.identities.clone(), weather),
            managers: ManagerService::new(
                repos.managers.clone(),
                repos.identities.clone(),
                repos.todos.clone(),
            ),
            comments: CommentService::new(repos.comments, repos.identities, repos.todos),
            audit: AuditInterceptor::with_privileged_operations(audit_sink),
        };

        tracing::info!("Application state initialized");
        state
    }

    #[cfg(feature = "postgres")]
    async fn repositories(config: &AppConfig) -> Repositories {
        match &config.database {
            Some(db_config) => Repositories::postgres(db_config)
                .await
                .unwrap_or_else(Repositories::in_memory),
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Repositories::in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn repositories(_config: &AppConfig) -> Repositories {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Repositories::in_memory()
    }

    #[cfg(feature = "weather")]
    fn weather_client(config: &AppConfig) -> Arc<dyn WeatherClient> {
        Arc::new(taskdesk_infra::HttpWeatherClient::new(config.weather_url.clone()))
    }

    #[cfg(not(feature = "weather"))]
    fn weather_client(_config: &AppConfig) -> Arc<dyn WeatherClient> {
        tracing::warn!("Weather feature disabled - todos are stamped with a fixed forecast");
        Arc::new(taskdesk_infra::FixedWeatherClient("Unknown".to_string()))
    }
}
