//! fibu Database Library
//!
//! Postgres persistence for the fibu ledger.
//!
//! # Modules
//!
//! - [`models`] - Entity models with query methods (`Project`, `Account`, `Booking`)
//! - [`store`] - The ledger storage seam: `AccountStore`/`BookingStore` traits and the
//!   transactional Postgres implementation
//! - [`migrations`] - Embedded sqlx migrations
//! - [`error`] - Database error types

pub mod error;
pub mod migrations;
pub mod models;
pub mod store;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{Account, Booking, Project};
pub use store::{AccountStore, BookingStore, NewBooking, PgStore};
