//! Account entity model.
//!
//! Accounts are scoped to a project and addressed in batches by their
//! account number (the natural key). The number is stored as text; duplicate
//! numbers within a project are tolerated in storage and resolved
//! first-loaded-wins when a batch builds its index.

use chrono::{DateTime, Utc};
use fibu_core::{AccountId, ProjectId};
use sqlx::FromRow;
use uuid::Uuid;

/// A ledger account within a project.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    /// Surrogate key assigned by the database.
    pub id: i64,

    /// The project this account belongs to.
    pub project_id: Uuid,

    /// Natural key within the project, stored as text.
    pub account_number: String,

    /// Display name; an explicit null in a batch entry clears it.
    pub name: Option<String>,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Get the account ID as a typed `AccountId`.
    #[must_use]
    pub fn account_id(&self) -> AccountId {
        AccountId::from_i64(self.id)
    }

    /// Get the project ID as a typed `ProjectId`.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        ProjectId::from_uuid(self.project_id)
    }

    /// List all accounts of a project, oldest first.
    ///
    /// Ascending id order makes "first encountered" equal insertion order,
    /// which the batch index relies on for duplicate account numbers.
    pub async fn find_by_project(
        executor: impl sqlx::PgExecutor<'_>,
        project_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM accounts WHERE project_id = $1 ORDER BY id ASC")
            .bind(project_id)
            .fetch_all(executor)
            .await
    }

    /// Insert a new account, returning the persisted row with its id.
    pub async fn insert(
        executor: impl sqlx::PgExecutor<'_>,
        project_id: Uuid,
        account_number: &str,
        name: Option<&str>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO accounts (project_id, account_number, name)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(project_id)
        .bind(account_number)
        .bind(name)
        .fetch_one(executor)
        .await
    }

    /// Update the name of an existing account, returning the persisted row.
    pub async fn update_name(
        executor: impl sqlx::PgExecutor<'_>,
        id: i64,
        name: Option<&str>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            UPDATE accounts
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(id)
        .bind(name)
        .fetch_one(executor)
        .await
    }

    /// Delete an account by id.
    ///
    /// Fails if a booking still references the account; the FK violation
    /// propagates as a storage fault and aborts the batch.
    pub async fn delete(
        executor: impl sqlx::PgExecutor<'_>,
        id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
