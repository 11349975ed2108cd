//! Endpoint handlers.

pub mod accounts;
pub mod bookings;

pub use accounts::{list_accounts_handler, update_accounts_handler};
pub use bookings::{list_bookings_handler, update_bookings_handler};
