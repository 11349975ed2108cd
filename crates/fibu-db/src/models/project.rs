//! Project entity model.
//!
//! A project is the tenant scope: it owns accounts and bookings and is
//! addressed by an opaque key carried as the subject of a verified
//! credential.

use chrono::{DateTime, Utc};
use fibu_core::ProjectId;
use sqlx::FromRow;
use uuid::Uuid;

/// A tenant owning accounts and bookings.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: Uuid,

    /// Opaque tenant key (the JWT subject of the project's credential).
    pub key: String,

    /// Optional display name.
    pub name: Option<String>,

    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Get the project ID as a typed `ProjectId`.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        ProjectId::from_uuid(self.id)
    }

    /// Find a project by its opaque key.
    pub async fn find_by_key(
        executor: impl sqlx::PgExecutor<'_>,
        key: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM projects WHERE key = $1")
            .bind(key)
            .fetch_optional(executor)
            .await
    }

    /// Find the project for a key, provisioning the row on first sight.
    ///
    /// Concurrent first requests for the same key race on the unique `key`
    /// constraint; the no-op conflict update makes `RETURNING` yield the
    /// winning row either way.
    pub async fn find_or_create(
        executor: impl sqlx::PgExecutor<'_>,
        key: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO projects (id, key)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET key = EXCLUDED.key
            RETURNING *
            ",
        )
        .bind(Uuid::new_v4())
        .bind(key)
        .fetch_one(executor)
        .await
    }
}
