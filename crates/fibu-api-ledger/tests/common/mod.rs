//! Common test utilities for fibu-api-ledger integration tests.
//!
//! `MemStore` is an in-memory double of the ledger storage seam with the
//! same observable behavior as the Postgres store: project-scoped listing
//! in ascending id order, assigned ids on insert, and whole-row updates.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fibu_core::{AccountId, BookingId, ProjectId};
use fibu_db::{Account, AccountStore, Booking, BookingStore, DbError, NewBooking};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// In-memory implementation of `AccountStore` and `BookingStore`.
#[derive(Debug, Default)]
pub struct MemStore {
    pub accounts: BTreeMap<i64, Account>,
    pub bookings: BTreeMap<i64, Booking>,
    next_account_id: i64,
    next_booking_id: i64,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_account_id(&mut self) -> i64 {
        self.next_account_id += 1;
        self.next_account_id
    }

    fn next_booking_id(&mut self) -> i64 {
        self.next_booking_id += 1;
        self.next_booking_id
    }

    /// Seed a persisted account, bypassing reconciliation.
    pub fn seed_account(&mut self, project_id: ProjectId, number: &str, name: &str) -> Account {
        let now = Utc::now();
        let id = self.next_account_id();
        let account = Account {
            id,
            project_id: project_id.into(),
            account_number: number.to_string(),
            name: Some(name.to_string()),
            created_at: now,
            updated_at: now,
        };
        self.accounts.insert(id, account.clone());
        account
    }

    /// Seed a persisted booking, bypassing reconciliation.
    pub fn seed_booking(
        &mut self,
        project_id: ProjectId,
        date: Option<NaiveDate>,
        text: &str,
        debit: &Account,
        credit: &Account,
        amount: Decimal,
    ) -> Booking {
        let now = Utc::now();
        let id = self.next_booking_id();
        let booking = Booking {
            id,
            project_id: project_id.into(),
            booking_date: date,
            text: Some(text.to_string()),
            debit_account_id: debit.id,
            credit_account_id: credit.id,
            amount,
            created_at: now,
            updated_at: now,
        };
        self.bookings.insert(id, booking.clone());
        booking
    }

    /// All persisted accounts of a project, ascending id order.
    pub fn project_accounts(&self, project_id: ProjectId) -> Vec<Account> {
        self.accounts
            .values()
            .filter(|a| a.project_id == *project_id.as_uuid())
            .cloned()
            .collect()
    }

    /// All persisted bookings of a project, ascending id order.
    pub fn project_bookings(&self, project_id: ProjectId) -> Vec<Booking> {
        self.bookings
            .values()
            .filter(|b| b.project_id == *project_id.as_uuid())
            .cloned()
            .collect()
    }

    /// First persisted account with the given number, any project.
    pub fn account_by_number(&self, number: &str) -> Option<&Account> {
        self.accounts
            .values()
            .find(|a| a.account_number == number)
    }
}

#[async_trait]
impl AccountStore for MemStore {
    async fn list_accounts(&mut self, project_id: ProjectId) -> Result<Vec<Account>, DbError> {
        Ok(self.project_accounts(project_id))
    }

    async fn insert_account(
        &mut self,
        project_id: ProjectId,
        account_number: &str,
        name: Option<String>,
    ) -> Result<Account, DbError> {
        let now = Utc::now();
        let id = self.next_account_id();
        let account = Account {
            id,
            project_id: project_id.into(),
            account_number: account_number.to_string(),
            name,
            created_at: now,
            updated_at: now,
        };
        self.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn update_account_name(
        &mut self,
        id: AccountId,
        name: Option<String>,
    ) -> Result<Account, DbError> {
        let account = self
            .accounts
            .get_mut(&id.as_i64())
            .ok_or(DbError::QueryFailed(sqlx::Error::RowNotFound))?;
        account.name = name;
        account.updated_at = Utc::now();
        Ok(account.clone())
    }

    async fn delete_account(&mut self, id: AccountId) -> Result<(), DbError> {
        self.accounts.remove(&id.as_i64());
        Ok(())
    }
}

#[async_trait]
impl BookingStore for MemStore {
    async fn list_bookings(&mut self, project_id: ProjectId) -> Result<Vec<Booking>, DbError> {
        Ok(self.project_bookings(project_id))
    }

    async fn insert_booking(
        &mut self,
        project_id: ProjectId,
        booking: NewBooking,
    ) -> Result<Booking, DbError> {
        let now = Utc::now();
        let id = self.next_booking_id();
        let booking = Booking {
            id,
            project_id: project_id.into(),
            booking_date: booking.date,
            text: booking.text,
            debit_account_id: booking.debit_account_id.as_i64(),
            credit_account_id: booking.credit_account_id.as_i64(),
            amount: booking.amount,
            created_at: now,
            updated_at: now,
        };
        self.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn update_booking(&mut self, booking: &Booking) -> Result<Booking, DbError> {
        let stored = self
            .bookings
            .get_mut(&booking.id)
            .ok_or(DbError::QueryFailed(sqlx::Error::RowNotFound))?;
        stored.booking_date = booking.booking_date;
        stored.text = booking.text.clone();
        stored.debit_account_id = booking.debit_account_id;
        stored.credit_account_id = booking.credit_account_id;
        stored.amount = booking.amount;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete_booking(&mut self, id: BookingId) -> Result<(), DbError> {
        self.bookings.remove(&id.as_i64());
        Ok(())
    }
}

/// Parse batch entries from their JSON wire form, preserving tri-state
/// field presence.
pub fn account_entries(
    value: serde_json::Value,
) -> Vec<Option<fibu_api_ledger::models::AccountUpdate>> {
    serde_json::from_value(value).expect("valid account entries")
}

/// Parse booking batch entries from their JSON wire form.
pub fn booking_entries(
    value: serde_json::Value,
) -> Vec<Option<fibu_api_ledger::models::BookingUpdate>> {
    serde_json::from_value(value).expect("valid booking entries")
}
