//! Reconciliation services.
//!
//! The services turn a sparse batch of tri-state change entries into
//! concrete create/update/delete operations against the storage seam.
//! Entries are applied strictly in input order through a per-batch index;
//! ordering determines the override semantics, so there is no parallel
//! application.

mod account_reconciler;
mod booking_reconciler;
mod index;

pub use account_reconciler::reconcile_accounts;
pub use booking_reconciler::reconcile_bookings;
pub use index::{index_by_account_number, index_by_booking_id};
