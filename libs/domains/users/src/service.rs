use core_config::pagination::PaginationConfig;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, PaginatedResult, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Owns the existence and uniqueness checks; the repository only stores.
/// Email checks and the writes that depend on them run under `writes`, so
/// concurrent creates or updates cannot both claim the same email.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    pagination: PaginationConfig,
    writes: Arc<Mutex<()>>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_pagination(repository, PaginationConfig::default())
    }

    pub fn with_pagination(repository: R, pagination: PaginationConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            pagination,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// List every user in insertion order
    pub async fn list_all(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a new user, rejecting a taken email
    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        let _guard = self.writes.lock().await;

        if self.repository.email_exists(&input.email, None).await? {
            return Err(UserError::DuplicateEmail(input.email));
        }

        self.repository.create(input).await
    }

    /// Update a user
    pub async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        let _guard = self.writes.lock().await;

        if !self.repository.exists(id).await? {
            return Err(UserError::NotFound(id));
        }

        if let Some(ref email) = input.email {
            if self.repository.email_exists(email, Some(id)).await? {
                return Err(UserError::DuplicateEmail(email.clone()));
            }
        }

        // A concurrent delete can land between the existence check and here
        self.repository
            .update(id, input)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }

    /// One page of users
    ///
    /// Absent values fall back to the configured defaults and `limit` is
    /// clamped to the configured maximum. `page` is not clamped.
    pub async fn list_paginated(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> UserResult<PaginatedResult> {
        let page = page.unwrap_or(self.pagination.default_page);
        let limit = limit.unwrap_or(self.pagination.default_limit);

        if page == 0 {
            return Err(UserError::Validation(
                "page must be a positive number".to_string(),
            ));
        }
        if limit == 0 {
            return Err(UserError::Validation(
                "limit must be a positive number".to_string(),
            ));
        }

        let limit = limit.min(self.pagination.max_limit);
        self.repository.find_paginated(page, limit).await
    }
}
