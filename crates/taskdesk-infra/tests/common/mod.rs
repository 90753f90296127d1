#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use taskdesk_core::domain::{AuthUser, Identity, Role, Todo};
use taskdesk_core::error::RepoError;
use taskdesk_core::ports::{
    AuthError, BaseRepository, IdentityRepository, PasswordService,
};
use taskdesk_core::services::{CommentService, IdentityService, ManagerService, RoleGuard};
use taskdesk_infra::{
    FixedWeatherClient, InMemoryCommentRepository, InMemoryDatabase, InMemoryIdentityRepository,
    InMemoryManagerRepository, InMemoryTodoRepository, JwtConfig, JwtTokenService,
};

/// Identity repository that counts reads and writes.
pub struct CountingIdentityRepository {
    inner: InMemoryIdentityRepository,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl CountingIdentityRepository {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseRepository<Identity, i64> for CountingIdentityRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, RepoError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn save(&self, entity: Identity) -> Result<Identity, RepoError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.save(entity).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }
}

#[async_trait]
impl IdentityRepository for CountingIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepoError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_email(email).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.exists_by_email(email).await
    }
}

/// Reversible stand-in for Argon2 so scenario tests stay fast.
pub struct PlainPasswordService;

impl PasswordService for PlainPasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash.strip_prefix("plain:") == Some(password))
    }
}

pub struct Harness {
    pub identities: Arc<CountingIdentityRepository>,
    pub todos: Arc<InMemoryTodoRepository>,
    pub managers: Arc<InMemoryManagerRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub tokens: Arc<JwtTokenService>,
    pub weather: Arc<FixedWeatherClient>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_passwords(Arc::new(PlainPasswordService))
    }

    pub fn with_passwords(passwords: Arc<dyn PasswordService>) -> Self {
        let db = InMemoryDatabase::new();
        Self {
            identities: Arc::new(CountingIdentityRepository {
                inner: InMemoryIdentityRepository::new(db.clone()),
                reads: AtomicUsize::new(0),
                writes: AtomicUsize::new(0),
            }),
            todos: Arc::new(InMemoryTodoRepository::new(db.clone())),
            managers: Arc::new(InMemoryManagerRepository::new(db.clone())),
            comments: Arc::new(InMemoryCommentRepository::new(db)),
            passwords,
            tokens: Arc::new(JwtTokenService::new(JwtConfig {
                secret: "scenario-secret".to_string(),
                expiration_hours: 1,
                issuer: "scenario".to_string(),
            })),
            weather: Arc::new(FixedWeatherClient("Sunny".to_string())),
        }
    }

    pub fn identity_service(&self) -> IdentityService {
        IdentityService::new(
            self.identities.clone(),
            self.passwords.clone(),
            self.tokens.clone(),
        )
    }

    pub fn manager_service(&self) -> ManagerService {
        ManagerService::new(
            self.managers.clone(),
            self.identities.clone(),
            self.todos.clone(),
        )
    }

    pub fn comment_service(&self) -> CommentService {
        CommentService::new(
            self.comments.clone(),
            self.identities.clone(),
            self.todos.clone(),
        )
    }

    pub fn role_guard(&self) -> RoleGuard {
        RoleGuard::new(self.identities.clone())
    }

    /// Insert an identity whose password is `password`.
    pub async fn identity(&self, email: &str, password: &str, role: Role) -> Identity {
        let hash = self.passwords.hash(password).unwrap();
        self.identities
            .save(Identity::new(email.to_string(), hash, role))
            .await
            .unwrap()
    }

    pub async fn todo(&self, owner: &Identity, title: &str) -> Todo {
        self.todos
            .save(Todo::new(
                title.to_string(),
                "contents".to_string(),
                "Sunny".to_string(),
                owner.id,
            ))
            .await
            .unwrap()
    }

    /// A todo whose owner reference was lost by storage.
    pub async fn orphan_todo(&self) -> Todo {
        let mut todo = Todo::new("orphan".into(), "contents".into(), "Sunny".into(), 0);
        todo.owner_id = None;
        self.todos.save(todo).await.unwrap()
    }
}

pub fn auth(identity: &Identity) -> AuthUser {
    AuthUser::new(identity.id, identity.email.clone(), identity.role)
}
