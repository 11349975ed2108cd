//! Request and response models for the Ledger API.

mod requests;
mod responses;

pub use requests::{AccountUpdate, BookingUpdate, UpdateAccountsRequest, UpdateBookingsRequest};
pub use responses::{AccountResponse, BookingResponse};
