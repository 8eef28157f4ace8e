//! Database bootstrap tests

use hr_server::db::DbService;

#[tokio::test]
async fn test_on_disk_database_bootstrap_is_idempotent() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("hrms.db");
    let db_path = db_path.to_string_lossy();

    // First open defines tables and unique indexes
    let service = DbService::new(&db_path).await.expect("first open failed");
    drop(service);

    // let the storage layer release its file lock before reopening
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    // Re-opening against the same files must re-run the schema cleanly
    let service = DbService::new(&db_path).await.expect("second open failed");

    // The store answers queries
    service
        .db
        .query("RETURN 1")
        .await
        .expect("probe query failed")
        .check()
        .expect("probe query rejected");
}

#[tokio::test]
async fn test_memory_database_enforces_unique_account_email() {
    let service = DbService::new_memory().await.expect("memory open failed");

    service
        .db
        .query("CREATE account SET displayName = 'A', email = 'dup@x.com', hashPass = 'h', role = 'employee', createdAt = 0")
        .await
        .expect("first insert failed")
        .check()
        .expect("first insert rejected");

    // Unique index on email must reject the second insert at the store level
    let second = service
        .db
        .query("CREATE account SET displayName = 'B', email = 'dup@x.com', hashPass = 'h', role = 'employee', createdAt = 0")
        .await
        .expect("query dispatch failed")
        .check();

    assert!(second.is_err(), "duplicate email insert should be rejected");
}
