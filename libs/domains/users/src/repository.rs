use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, PaginatedResult, UpdateUser, User};

/// Repository trait for User persistence
///
/// Reports absence through `Option`/`bool`; turning absence into errors is
/// the service's job. Implementations never enforce email uniqueness.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by exact email match
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Create a new user with a fresh id
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Merge the present fields into an existing user, `None` if missing
    async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<Option<User>>;

    /// Delete a user by ID, `false` if missing
    async fn delete(&self, id: Uuid) -> UserResult<bool>;

    /// One 1-indexed page plus the total collection size
    async fn find_paginated(&self, page: u32, limit: u32) -> UserResult<PaginatedResult>;

    /// Check if a user exists
    async fn exists(&self, id: Uuid) -> UserResult<bool>;

    /// Check if another user already holds `email`
    async fn email_exists(&self, email: &str, exclude_id: Option<Uuid>) -> UserResult<bool>;
}

/// Users every fresh in-memory repository starts with
pub const SAMPLE_USERS: [(&str, &str); 4] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
    ("Alice Johnson", "alice@example.com"),
    ("Bob Wilson", "bob@example.com"),
];

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Repository seeded with [`SAMPLE_USERS`]
    pub fn new() -> Self {
        let users = SAMPLE_USERS
            .iter()
            .map(|(name, email)| {
                User::new(CreateUser {
                    name: name.to_string(),
                    email: email.to_string(),
                })
            })
            .collect();

        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Repository without sample data
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        let user = User::new(input);
        users.push(user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.apply_update(input);

        tracing::info!(user_id = %id, "Updated user");
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let mut users = self.users.write().await;

        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                tracing::info!(user_id = %id, "Deleted user");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_paginated(&self, page: u32, limit: u32) -> UserResult<PaginatedResult> {
        let users = self.users.read().await;

        let offset = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
        let items = users
            .iter()
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(PaginatedResult {
            items,
            total: users.len(),
            page,
            limit,
        })
    }

    async fn exists(&self, id: Uuid) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.id == id))
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<Uuid>) -> UserResult<bool> {
        let users = self.users.read().await;
        let exists = users
            .iter()
            .filter(|u| Some(u.id) != exclude_id)
            .any(|u| u.email.eq_ignore_ascii_case(email));
        Ok(exists)
    }
}
