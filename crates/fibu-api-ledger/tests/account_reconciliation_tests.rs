//! Account batch reconciliation behavior against an in-memory store.

mod common;

use common::{account_entries, MemStore};
use fibu_api_ledger::models::AccountResponse;
use fibu_api_ledger::services::reconcile_accounts;
use fibu_core::ProjectId;
use serde_json::json;

#[tokio::test]
async fn creates_account_when_number_is_unknown() {
    let mut store = MemStore::new();
    let project = ProjectId::new();

    let entries = account_entries(json!([{"number": 1020, "name": "Bank"}]));
    reconcile_accounts(&mut store, project, vec![], &entries)
        .await
        .unwrap();

    let accounts = store.project_accounts(project);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_number, "1020");
    assert_eq!(accounts[0].name.as_deref(), Some("Bank"));
}

#[tokio::test]
async fn repeated_upsert_is_idempotent() {
    let mut store = MemStore::new();
    let project = ProjectId::new();

    let entries = account_entries(json!([{"number": 100, "name": "Cash"}]));
    reconcile_accounts(&mut store, project, vec![], &entries)
        .await
        .unwrap();
    let existing = store.project_accounts(project);
    reconcile_accounts(&mut store, project, existing, &entries)
        .await
        .unwrap();

    let accounts = store.project_accounts(project);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_number, "100");
    assert_eq!(accounts[0].name.as_deref(), Some("Cash"));
}

#[tokio::test]
async fn upserted_account_round_trips_through_the_read_view() {
    let mut store = MemStore::new();
    let project = ProjectId::new();

    let entries = account_entries(json!([{"number": 100, "name": "Cash"}]));
    reconcile_accounts(&mut store, project, vec![], &entries)
        .await
        .unwrap();

    let listed: Vec<_> = store
        .project_accounts(project)
        .iter()
        .filter_map(AccountResponse::from_account)
        .collect();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].number, 100);
    assert_eq!(listed[0].name.as_deref(), Some("Cash"));
}

#[tokio::test]
async fn updates_name_of_existing_account() {
    let mut store = MemStore::new();
    let project = ProjectId::new();
    let seeded = store.seed_account(project, "1020", "Bank");
    let existing = store.project_accounts(project);

    let entries = account_entries(json!([{"number": 1020, "name": "Postbank"}]));
    reconcile_accounts(&mut store, project, existing, &entries)
        .await
        .unwrap();

    let accounts = store.project_accounts(project);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, seeded.id);
    assert_eq!(accounts[0].name.as_deref(), Some("Postbank"));
}

#[tokio::test]
async fn explicit_null_name_clears_the_stored_name() {
    let mut store = MemStore::new();
    let project = ProjectId::new();
    store.seed_account(project, "1020", "Bank");
    let existing = store.project_accounts(project);

    let entries = account_entries(json!([{"number": 1020, "name": null}]));
    reconcile_accounts(&mut store, project, existing, &entries)
        .await
        .unwrap();

    let accounts = store.project_accounts(project);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name, None);
}

#[tokio::test]
async fn omitted_name_deletes_the_account() {
    let mut store = MemStore::new();
    let project = ProjectId::new();
    store.seed_account(project, "1020", "Bank");
    store.seed_account(project, "3000", "Revenue");
    let existing = store.project_accounts(project);

    let entries = account_entries(json!([{"number": 1020}]));
    reconcile_accounts(&mut store, project, existing, &entries)
        .await
        .unwrap();

    let accounts = store.project_accounts(project);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_number, "3000");
}

#[tokio::test]
async fn delete_of_unknown_number_is_a_silent_noop() {
    let mut store = MemStore::new();
    let project = ProjectId::new();
    store.seed_account(project, "1020", "Bank");
    let existing = store.project_accounts(project);

    let entries = account_entries(json!([{"number": 9999}]));
    reconcile_accounts(&mut store, project, existing, &entries)
        .await
        .unwrap();

    assert_eq!(store.project_accounts(project).len(), 1);
}

#[tokio::test]
async fn entries_without_a_concrete_number_are_skipped() {
    let mut store = MemStore::new();
    let project = ProjectId::new();
    store.seed_account(project, "1020", "Bank");
    let existing = store.project_accounts(project);

    // No number and explicit-null number both address nothing; a null
    // entry is skipped outright.
    let entries = account_entries(json!([
        {"name": "Orphan"},
        {"number": null, "name": "AlsoOrphan"},
        null
    ]));
    reconcile_accounts(&mut store, project, existing, &entries)
        .await
        .unwrap();

    let accounts = store.project_accounts(project);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name.as_deref(), Some("Bank"));
}

#[tokio::test]
async fn later_entry_overrides_earlier_entry_for_same_number() {
    let mut store = MemStore::new();
    let project = ProjectId::new();

    // The first entry creates the account, the second renames the account
    // the first one just created.
    let entries = account_entries(json!([
        {"number": 1020, "name": "Bank"},
        {"number": 1020, "name": "Postbank"}
    ]));
    reconcile_accounts(&mut store, project, vec![], &entries)
        .await
        .unwrap();

    let accounts = store.project_accounts(project);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name.as_deref(), Some("Postbank"));
}

#[tokio::test]
async fn create_then_delete_in_one_batch_leaves_nothing() {
    let mut store = MemStore::new();
    let project = ProjectId::new();

    let entries = account_entries(json!([
        {"number": 1020, "name": "Bank"},
        {"number": 1020}
    ]));
    reconcile_accounts(&mut store, project, vec![], &entries)
        .await
        .unwrap();

    assert!(store.project_accounts(project).is_empty());
}

#[tokio::test]
async fn duplicate_stored_numbers_resolve_to_first_loaded() {
    let mut store = MemStore::new();
    let project = ProjectId::new();
    let first = store.seed_account(project, "1020", "First");
    let second = store.seed_account(project, "1020", "Second");
    let existing = store.project_accounts(project);

    let entries = account_entries(json!([{"number": 1020, "name": "Renamed"}]));
    reconcile_accounts(&mut store, project, existing, &entries)
        .await
        .unwrap();

    // Only the first-loaded duplicate is addressable; the second stays as
    // it was.
    assert_eq!(
        store.accounts[&first.id].name.as_deref(),
        Some("Renamed")
    );
    assert_eq!(
        store.accounts[&second.id].name.as_deref(),
        Some("Second")
    );
}

#[tokio::test]
async fn batches_are_isolated_per_project() {
    let mut store = MemStore::new();
    let project_a = ProjectId::new();
    let project_b = ProjectId::new();
    store.seed_account(project_b, "1020", "Other tenant");
    let existing = store.project_accounts(project_a);

    let entries = account_entries(json!([{"number": 1020}]));
    reconcile_accounts(&mut store, project_a, existing, &entries)
        .await
        .unwrap();

    // Same number in another project is out of scope for the batch.
    assert_eq!(store.project_bookings(project_b).len(), 0);
    assert_eq!(store.project_accounts(project_b).len(), 1);
}
