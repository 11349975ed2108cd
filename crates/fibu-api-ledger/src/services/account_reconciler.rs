//! Account batch reconciliation.
//!
//! Entries are keyed by account number (the natural key). Presence of the
//! `name` field selects the operation: supplied (even as explicit `null`)
//! means upsert, omitted means delete. Note that this makes a pure no-op
//! entry impossible to express for an existing account, an implicit
//! protocol choice the API consumer has to live with.

use fibu_core::ProjectId;
use fibu_db::{Account, AccountStore, DbError};
use tracing::instrument;

use super::index::index_by_account_number;
use crate::models::AccountUpdate;

/// Apply a batch of account changes for one project.
///
/// Entries apply strictly in array order; later entries for the same number
/// override the effect of earlier ones within the batch. Business-rule
/// violations (no number, delete of an unknown number) are silent per-entry
/// no-ops. Only storage faults propagate; the caller's transaction then
/// aborts the whole batch.
#[instrument(skip_all, fields(project_id = %project_id, entries = updates.len()))]
pub async fn reconcile_accounts<S>(
    store: &mut S,
    project_id: ProjectId,
    existing: Vec<Account>,
    updates: &[Option<AccountUpdate>],
) -> Result<(), DbError>
where
    S: AccountStore + Send,
{
    let mut by_number = index_by_account_number(existing);

    for update in updates.iter().flatten() {
        // An absent or explicitly null number addresses nothing.
        let Some(number) = update.number.value() else {
            continue;
        };
        let number = number.to_string();

        if update.name.is_present() {
            // Upsert; an explicit null clears the stored name.
            let name = update.name.value().cloned();
            let saved = match by_number.get(&number) {
                Some(account) => {
                    store
                        .update_account_name(account.account_id(), name)
                        .await?
                }
                None => store.insert_account(project_id, &number, name).await?,
            };
            by_number.insert(number, saved);
        } else if let Some(account) = by_number.remove(&number) {
            store.delete_account(account.account_id()).await?;
        }
    }

    Ok(())
}
