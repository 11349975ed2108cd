//! Response models for the Ledger API read endpoints.
//!
//! The wire format exposes account numbers as integers while storage keeps
//! them as text. Rows with non-numeric stored numbers are handled on the
//! display path only: accounts are omitted from the account list, booking
//! account references are nulled. This is a read-view rule, not a
//! reconciliation rule.

use chrono::NaiveDate;
use fibu_db::{Account, Booking};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// An account as returned by `GET /accounts`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountResponse {
    /// Account number.
    pub number: i32,
    /// Account name.
    pub name: Option<String>,
}

impl AccountResponse {
    /// Map a stored account to its wire form.
    ///
    /// Returns `None` when the stored number does not parse as an integer;
    /// such accounts are silently omitted from the list.
    #[must_use]
    pub fn from_account(account: &Account) -> Option<Self> {
        let number = account.account_number.parse().ok()?;
        Some(Self {
            number,
            name: account.name.clone(),
        })
    }
}

/// A booking as returned by `GET /bookings`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingResponse {
    /// Surrogate id, usable to address the booking in a batch.
    pub id: i64,
    /// Booking date.
    pub date: Option<NaiveDate>,
    /// Booking text.
    pub text: Option<String>,
    /// Debit account number; null when the stored number is not numeric.
    pub debit: Option<i32>,
    /// Credit account number; null when the stored number is not numeric.
    pub credit: Option<i32>,
    /// Booked amount.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
}

impl BookingResponse {
    /// Map a stored booking to its wire form.
    ///
    /// `numbers_by_account` maps account ids to stored account numbers.
    /// An unparsable (or unknown) referenced number nulls that side only;
    /// the booking itself is never dropped.
    #[must_use]
    pub fn from_booking(booking: &Booking, numbers_by_account: &HashMap<i64, String>) -> Self {
        let number_of = |account_id: i64| -> Option<i32> {
            numbers_by_account
                .get(&account_id)
                .and_then(|number| number.parse().ok())
        };
        Self {
            id: booking.id,
            date: booking.booking_date,
            text: booking.text.clone(),
            debit: number_of(booking.debit_account_id),
            credit: number_of(booking.credit_account_id),
            amount: booking.amount,
        }
    }
}
