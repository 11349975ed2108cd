//! Entity models.

mod account;
mod booking;
mod project;

pub use account::Account;
pub use booking::Booking;
pub use project::Project;
