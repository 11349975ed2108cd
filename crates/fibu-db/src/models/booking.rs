//! Booking entity model.
//!
//! A double-entry booking within a project. Both account references must
//! belong to the same project as the booking; the reconciliation engine
//! only ever resolves references through the project-scoped account index,
//! so a booking can never point outside its project.

use chrono::{DateTime, NaiveDate, Utc};
use fibu_core::{AccountId, BookingId, ProjectId};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// A double-entry booking within a project.
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    /// Surrogate key assigned by the database.
    pub id: i64,

    /// The project this booking belongs to.
    pub project_id: Uuid,

    /// Booking date; an explicit null in a batch entry stores NULL.
    pub booking_date: Option<NaiveDate>,

    /// Booking text; an explicit null in a batch entry stores NULL.
    pub text: Option<String>,

    /// Debit ("Soll") account reference.
    pub debit_account_id: i64,

    /// Credit ("Haben") account reference.
    pub credit_account_id: i64,

    /// Booked amount.
    pub amount: Decimal,

    /// When the booking was created.
    pub created_at: DateTime<Utc>,

    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Get the booking ID as a typed `BookingId`.
    #[must_use]
    pub fn booking_id(&self) -> BookingId {
        BookingId::from_i64(self.id)
    }

    /// Get the project ID as a typed `ProjectId`.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        ProjectId::from_uuid(self.project_id)
    }

    /// Get the debit account reference as a typed `AccountId`.
    #[must_use]
    pub fn debit_account_id(&self) -> AccountId {
        AccountId::from_i64(self.debit_account_id)
    }

    /// Get the credit account reference as a typed `AccountId`.
    #[must_use]
    pub fn credit_account_id(&self) -> AccountId {
        AccountId::from_i64(self.credit_account_id)
    }

    /// List all bookings of a project, oldest first.
    pub async fn find_by_project(
        executor: impl sqlx::PgExecutor<'_>,
        project_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM bookings WHERE project_id = $1 ORDER BY id ASC")
            .bind(project_id)
            .fetch_all(executor)
            .await
    }

    /// Insert a new booking, returning the persisted row with its id.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        executor: impl sqlx::PgExecutor<'_>,
        project_id: Uuid,
        booking_date: Option<NaiveDate>,
        text: Option<&str>,
        debit_account_id: i64,
        credit_account_id: i64,
        amount: Decimal,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO bookings
                (project_id, booking_date, text, debit_account_id, credit_account_id, amount)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            ",
        )
        .bind(project_id)
        .bind(booking_date)
        .bind(text)
        .bind(debit_account_id)
        .bind(credit_account_id)
        .bind(amount)
        .fetch_one(executor)
        .await
    }

    /// Persist the current field values of an existing booking.
    pub async fn update(
        &self,
        executor: impl sqlx::PgExecutor<'_>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            UPDATE bookings
            SET booking_date = $2,
                text = $3,
                debit_account_id = $4,
                credit_account_id = $5,
                amount = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(self.id)
        .bind(self.booking_date)
        .bind(self.text.as_deref())
        .bind(self.debit_account_id)
        .bind(self.credit_account_id)
        .bind(self.amount)
        .fetch_one(executor)
        .await
    }

    /// Delete a booking by id.
    pub async fn delete(
        executor: impl sqlx::PgExecutor<'_>,
        id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
