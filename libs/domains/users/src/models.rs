use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::id_generator::generate_uuid;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh id and equal timestamps
    pub fn new(input: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id: generate_uuid(),
            name: input.name,
            email: input.email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update; absent fields keep their value
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        // Clock steps backwards must not break updated_at >= created_at
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// DTO for updating an existing user
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

/// Query parameters for listing users
#[derive(Debug, Clone, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number, starting at 1
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    /// Page size, capped at the configured maximum
    #[validate(range(min = 1))]
    pub limit: Option<u64>,
}

impl PaginationQuery {
    /// Requested page size narrowed to `u32`; oversized values saturate
    /// and are clamped to the configured maximum later.
    pub fn page_size(&self) -> Option<u32> {
        self.limit.map(|limit| u32::try_from(limit).unwrap_or(u32::MAX))
    }
}

/// One page of users plus the size of the whole collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedResult {
    pub items: Vec<User>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}
