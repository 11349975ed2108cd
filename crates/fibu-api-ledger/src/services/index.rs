//! Per-batch entity indexes.
//!
//! Built once from the persisted set when a batch starts and kept current
//! as entries are applied. Construction is insert-if-absent: when source
//! data contains duplicate natural keys, the first-loaded entity is
//! authoritative for the whole batch and later duplicates stay unreachable
//! (they remain in storage untouched).

use fibu_db::{Account, Booking};
use std::collections::HashMap;

/// Index accounts by their account number, first occurrence wins.
#[must_use]
pub fn index_by_account_number(accounts: Vec<Account>) -> HashMap<String, Account> {
    let mut by_number = HashMap::new();
    for account in accounts {
        by_number
            .entry(account.account_number.clone())
            .or_insert(account);
    }
    by_number
}

/// Index bookings by their surrogate id, first occurrence wins.
///
/// Ids are unique in storage, so in practice every occurrence is the first.
#[must_use]
pub fn index_by_booking_id(bookings: Vec<Booking>) -> HashMap<i64, Booking> {
    let mut by_id = HashMap::new();
    for booking in bookings {
        by_id.entry(booking.id).or_insert(booking);
    }
    by_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn account(id: i64, number: &str, name: &str) -> Account {
        let now = Utc::now();
        Account {
            id,
            project_id: Uuid::new_v4(),
            account_number: number.to_string(),
            name: Some(name.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn first_loaded_account_wins_on_duplicate_numbers() {
        let index = index_by_account_number(vec![
            account(1, "300", "first"),
            account(2, "300", "second"),
            account(3, "400", "other"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index["300"].id, 1);
        assert_eq!(index["300"].name.as_deref(), Some("first"));
    }
}
