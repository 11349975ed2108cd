//! Request models for the Ledger API.
//!
//! Every optional field is a tri-state [`Patch`]: a missing key, an explicit
//! `null` and a concrete value are three different inputs. `#[serde(default)]`
//! maps missing keys to `Patch::Absent`; anything supplied deserializes to
//! `Null` or `Value`.

use chrono::NaiveDate;
use fibu_core::Patch;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

/// Batch update of accounts, keyed by account number.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAccountsRequest {
    /// Update entries, applied strictly in array order. A `null` or missing
    /// array is treated as empty; `null` entries are skipped.
    #[serde(default)]
    pub accounts: Option<Vec<Option<AccountUpdate>>>,
}

/// One account entry of a batch.
///
/// Presence of `name` selects the operation: supplied (even as `null`)
/// upserts, omitted deletes.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AccountUpdate {
    /// Account number addressing the entry. Entries without a concrete
    /// number have no effect.
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub number: Patch<i32>,

    /// New account name; an explicit `null` clears the stored name.
    /// Omitting the key deletes the account.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
}

/// Batch update of bookings, keyed by surrogate id.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBookingsRequest {
    /// Update entries, applied strictly in array order. A `null` or missing
    /// array is treated as empty; `null` entries are skipped.
    #[serde(default)]
    pub entries: Option<Vec<Option<BookingUpdate>>>,
}

/// One booking entry of a batch.
///
/// No id selects the create path (all five fields required, all-or-nothing);
/// an id selects update (present fields applied independently) or, with zero
/// fields present, delete.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookingUpdate {
    /// Surrogate id of an existing booking; omit to create.
    #[serde(default)]
    pub id: Option<i64>,

    /// Booking date.
    #[serde(default)]
    #[schema(value_type = Option<NaiveDate>)]
    pub date: Patch<NaiveDate>,

    /// Booking text.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub text: Patch<String>,

    /// Debit account number, matched by its decimal string form.
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub debit: Patch<i32>,

    /// Credit account number, matched by its decimal string form.
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub credit: Patch<i32>,

    /// Booked amount.
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub amount: Patch<Decimal>,
}

impl BookingUpdate {
    /// Whether any of the five optional fields was supplied (including as
    /// explicit `null`).
    #[must_use]
    pub fn any_field_present(&self) -> bool {
        self.date.is_present()
            || self.text.is_present()
            || self.debit.is_present()
            || self.credit.is_present()
            || self.amount.is_present()
    }

    /// Whether all five optional fields were supplied.
    #[must_use]
    pub fn all_fields_present(&self) -> bool {
        self.date.is_present()
            && self.text.is_present()
            && self.debit.is_present()
            && self.credit.is_present()
            && self.amount.is_present()
    }
}
