//! Booking batch reconciliation.
//!
//! Entries are keyed by surrogate id. No id selects the create path, which
//! is all-or-nothing: every one of the five fields must be supplied and both
//! account references must resolve, otherwise the entry is dropped without
//! effect. An id selects update (present fields applied independently) or,
//! with zero fields present, delete.

use fibu_core::{AccountId, Patch, ProjectId};
use fibu_db::{Account, Booking, BookingStore, DbError, NewBooking};
use std::collections::HashMap;
use tracing::instrument;

use super::index::index_by_booking_id;
use crate::models::BookingUpdate;

/// Apply a batch of booking changes for one project.
///
/// `accounts_by_number` must be the project-scoped account index
/// ([`super::index_by_account_number`]); submitted account numbers are
/// matched by their decimal string form against stored `account_number`
/// values, with no other coercion.
///
/// The id index only contains bookings loaded for this project, so unknown
/// ids and ids belonging to another project are indistinguishable: both are
/// silent no-ops. Only storage faults propagate and abort the batch.
#[instrument(skip_all, fields(project_id = %project_id, entries = updates.len()))]
pub async fn reconcile_bookings<S>(
    store: &mut S,
    project_id: ProjectId,
    existing: Vec<Booking>,
    accounts_by_number: &HashMap<String, Account>,
    updates: &[Option<BookingUpdate>],
) -> Result<(), DbError>
where
    S: BookingStore + Send,
{
    let mut by_id = index_by_booking_id(existing);

    for update in updates.iter().flatten() {
        let any_field_present = update.any_field_present();

        match update.id {
            // Create path.
            None => {
                if !any_field_present {
                    continue;
                }
                // All-or-nothing: a partial create is rejected, not
                // completed with defaults.
                if !update.all_fields_present() {
                    continue;
                }
                // An explicit null amount or account number never resolves.
                let Some(amount) = update.amount.value().copied() else {
                    continue;
                };
                let (Some(debit), Some(credit)) = (
                    resolve(accounts_by_number, &update.debit),
                    resolve(accounts_by_number, &update.credit),
                ) else {
                    continue;
                };

                let created = store
                    .insert_booking(
                        project_id,
                        NewBooking {
                            date: update.date.value().copied(),
                            text: update.text.value().cloned(),
                            debit_account_id: debit,
                            credit_account_id: credit,
                            amount,
                        },
                    )
                    .await?;
                by_id.insert(created.id, created);
            }

            // Update or delete path.
            Some(id) => {
                if !any_field_present {
                    if let Some(booking) = by_id.remove(&id) {
                        store.delete_booking(booking.booking_id()).await?;
                    }
                    continue;
                }

                let Some(booking) = by_id.get_mut(&id) else {
                    continue;
                };

                // Each present field applies independently. An unresolvable
                // account reference is skipped without touching its
                // siblings.
                if update.date.is_present() {
                    booking.booking_date = update.date.value().copied();
                }
                if update.text.is_present() {
                    booking.text = update.text.value().cloned();
                }
                if let Some(amount) = update.amount.value() {
                    booking.amount = *amount;
                }
                if let Some(debit) = resolve(accounts_by_number, &update.debit) {
                    booking.debit_account_id = debit.as_i64();
                }
                if let Some(credit) = resolve(accounts_by_number, &update.credit) {
                    booking.credit_account_id = credit.as_i64();
                }

                *booking = store.update_booking(booking).await?;
            }
        }
    }

    Ok(())
}

/// Resolve a submitted account number against the project index.
///
/// Absent and explicit-null fields resolve to nothing, as do numbers with
/// no matching account.
fn resolve(
    accounts_by_number: &HashMap<String, Account>,
    number: &Patch<i32>,
) -> Option<AccountId> {
    let number = number.value()?;
    accounts_by_number
        .get(&number.to_string())
        .map(Account::account_id)
}
