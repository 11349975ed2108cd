//! The ledger storage seam.
//!
//! The reconciliation engine needs three operations per entity type from its
//! storage collaborator: list-by-project, save and delete (save is split
//! into insert and update here, keeping the assigned-id-on-create
//! semantics). The traits keep the engine independent of Postgres; tests
//! drive it against an in-memory implementation.
//!
//! [`PgStore`] is the production implementation. It owns a transaction so a
//! whole batch commits atomically: every mutation goes through the same
//! transaction and [`PgStore::commit`] publishes all of them together.
//! Dropping the store rolls back.

use async_trait::async_trait;
use chrono::NaiveDate;
use fibu_core::{AccountId, BookingId, ProjectId};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::DbError;
use crate::models::{Account, Booking};

/// Field values for a booking about to be created.
#[derive(Debug, Clone)]
pub struct NewBooking {
    /// Booking date (may be explicitly null).
    pub date: Option<NaiveDate>,
    /// Booking text (may be explicitly null).
    pub text: Option<String>,
    /// Resolved debit account.
    pub debit_account_id: AccountId,
    /// Resolved credit account.
    pub credit_account_id: AccountId,
    /// Booked amount.
    pub amount: Decimal,
}

/// Project-scoped account persistence.
#[async_trait]
pub trait AccountStore {
    /// List all accounts of a project, oldest first.
    async fn list_accounts(&mut self, project_id: ProjectId) -> Result<Vec<Account>, DbError>;

    /// Insert a new account, returning the persisted row with its id.
    async fn insert_account(
        &mut self,
        project_id: ProjectId,
        account_number: &str,
        name: Option<String>,
    ) -> Result<Account, DbError>;

    /// Update the name of an existing account, returning the persisted row.
    async fn update_account_name(
        &mut self,
        id: AccountId,
        name: Option<String>,
    ) -> Result<Account, DbError>;

    /// Delete an account.
    async fn delete_account(&mut self, id: AccountId) -> Result<(), DbError>;
}

/// Project-scoped booking persistence.
#[async_trait]
pub trait BookingStore {
    /// List all bookings of a project, oldest first.
    async fn list_bookings(&mut self, project_id: ProjectId) -> Result<Vec<Booking>, DbError>;

    /// Insert a new booking, returning the persisted row with its id.
    async fn insert_booking(
        &mut self,
        project_id: ProjectId,
        booking: NewBooking,
    ) -> Result<Booking, DbError>;

    /// Persist the current field values of an existing booking.
    async fn update_booking(&mut self, booking: &Booking) -> Result<Booking, DbError>;

    /// Delete a booking.
    async fn delete_booking(&mut self, id: BookingId) -> Result<(), DbError>;
}

/// Transactional Postgres implementation of the storage seam.
pub struct PgStore<'c> {
    tx: Transaction<'c, Postgres>,
}

impl PgStore<'static> {
    /// Begin a new batch transaction on the pool.
    pub async fn begin(pool: &PgPool) -> Result<Self, DbError> {
        let tx = pool.begin().await.map_err(DbError::ConnectionFailed)?;
        Ok(Self { tx })
    }
}

impl<'c> PgStore<'c> {
    /// Wrap an existing transaction.
    pub fn new(tx: Transaction<'c, Postgres>) -> Self {
        Self { tx }
    }

    /// Commit the batch. Dropping the store without committing rolls back.
    pub async fn commit(self) -> Result<(), DbError> {
        self.tx.commit().await.map_err(DbError::QueryFailed)
    }
}

#[async_trait]
impl AccountStore for PgStore<'_> {
    async fn list_accounts(&mut self, project_id: ProjectId) -> Result<Vec<Account>, DbError> {
        Ok(Account::find_by_project(&mut *self.tx, project_id.into()).await?)
    }

    async fn insert_account(
        &mut self,
        project_id: ProjectId,
        account_number: &str,
        name: Option<String>,
    ) -> Result<Account, DbError> {
        Ok(Account::insert(
            &mut *self.tx,
            project_id.into(),
            account_number,
            name.as_deref(),
        )
        .await?)
    }

    async fn update_account_name(
        &mut self,
        id: AccountId,
        name: Option<String>,
    ) -> Result<Account, DbError> {
        Ok(Account::update_name(&mut *self.tx, id.as_i64(), name.as_deref()).await?)
    }

    async fn delete_account(&mut self, id: AccountId) -> Result<(), DbError> {
        Ok(Account::delete(&mut *self.tx, id.as_i64()).await?)
    }
}

#[async_trait]
impl BookingStore for PgStore<'_> {
    async fn list_bookings(&mut self, project_id: ProjectId) -> Result<Vec<Booking>, DbError> {
        Ok(Booking::find_by_project(&mut *self.tx, project_id.into()).await?)
    }

    async fn insert_booking(
        &mut self,
        project_id: ProjectId,
        booking: NewBooking,
    ) -> Result<Booking, DbError> {
        Ok(Booking::insert(
            &mut *self.tx,
            project_id.into(),
            booking.date,
            booking.text.as_deref(),
            booking.debit_account_id.as_i64(),
            booking.credit_account_id.as_i64(),
            booking.amount,
        )
        .await?)
    }

    async fn update_booking(&mut self, booking: &Booking) -> Result<Booking, DbError> {
        Ok(booking.update(&mut *self.tx).await?)
    }

    async fn delete_booking(&mut self, id: BookingId) -> Result<(), DbError> {
        Ok(Booking::delete(&mut *self.tx, id.as_i64()).await?)
    }
}
