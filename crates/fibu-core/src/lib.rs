//! fibu Core Library
//!
//! Shared types for the fibu bookkeeping service.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (ProjectId, AccountId, BookingId)
//! - [`patch`] - Tri-state input fields (absent / null / value)

pub mod ids;
pub mod patch;

// Re-export main types for convenient access
pub use ids::{AccountId, BookingId, ProjectId};
pub use patch::Patch;
