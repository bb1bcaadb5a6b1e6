mod common;
use common::{
    init_db_with_data, jas, sample_snapshot, setup_test_db, write_snapshot,
};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_sync_reports_loaded_counts() {
    let db = setup_test_db("sync_counts");

    jas()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    let snap = write_snapshot("sync_counts", &sample_snapshot());

    jas()
        .args(["--db", &db, "--test", "sync", "--file", &snap])
        .assert()
        .success()
        .stdout(contains("4 repositions"))
        .stdout(contains("3 notifications"))
        .stdout(contains("1 transfers"));
}

#[test]
fn test_sync_replaces_previous_snapshot() {
    let db = setup_test_db("sync_replaces");
    init_db_with_data("sync_replaces", &db);

    // second snapshot with a single, different reposition
    let doc = serde_json::json!({
        "repositions": [{
            "id": 99,
            "folio": "RP-099",
            "status": "pendiente",
            "createdAt": common::ts(common::hours_ago(1))
        }]
    });
    let snap = write_snapshot("sync_replaces_v2", &doc);

    jas()
        .args(["--db", &db, "--test", "sync", "--file", &snap])
        .assert()
        .success();

    jas()
        .args(["--db", &db, "--viewer", "admin", "--test", "history"])
        .assert()
        .success()
        .stdout(contains("RP-099").and(contains("RP-001").not()));
}

#[test]
fn test_sync_rejects_malformed_document() {
    let db = setup_test_db("sync_malformed");

    jas()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    let mut path = std::env::temp_dir();
    path.push("sync_malformed_snapshot.json");
    std::fs::write(&path, "{ not json").expect("write bad file");

    jas()
        .args([
            "--db",
            &db,
            "--test",
            "sync",
            "--file",
            &path.to_string_lossy(),
        ])
        .assert()
        .failure();
}

#[test]
fn test_sync_tolerates_minimal_records() {
    let db = setup_test_db("sync_minimal");

    jas()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    // only the required fields: everything optional missing
    let doc = serde_json::json!({
        "repositions": [{
            "id": 1,
            "folio": "RP-MIN",
            "status": "pendiente",
            "createdAt": common::ts(common::hours_ago(2))
        }]
    });
    let snap = write_snapshot("sync_minimal", &doc);

    jas()
        .args(["--db", &db, "--test", "sync", "--file", &snap])
        .assert()
        .success();

    jas()
        .args(["--db", &db, "--viewer", "bordado", "--test", "history"])
        .assert()
        .success()
        .stdout(contains("RP-MIN"));
}

#[test]
fn test_db_info_shows_snapshot_contents() {
    let db = setup_test_db("db_info");
    init_db_with_data("db_info", &db);

    jas()
        .args(["--db", &db, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Repositions:"))
        .stdout(contains("4"));
}

#[test]
fn test_db_check_passes_on_fresh_cache() {
    let db = setup_test_db("db_check");
    init_db_with_data("db_check", &db);

    jas()
        .args(["--db", &db, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_log_records_operations() {
    let db = setup_test_db("log_operations");
    init_db_with_data("log_operations", &db);

    jas()
        .args(["--db", &db, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("sync"));
}

#[test]
fn test_activity_shows_latest_first() {
    let db = setup_test_db("activity_order");
    init_db_with_data("activity_order", &db);

    let output = jas()
        .args(["--db", &db, "--test", "activity", "--limit", "2"])
        .output()
        .expect("run activity");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();

    // newest two by createdAt: RP-002 (5h ago) then RP-003 (1 day ago)
    assert!(stdout.contains("RP-002"));
    assert!(stdout.contains("RP-003"));
    assert!(!stdout.contains("RP-004"));

    let pos = |folio: &str| stdout.find(folio).unwrap_or(usize::MAX);
    assert!(pos("RP-002") < pos("RP-003"));
}

#[test]
fn test_status_reports_badge_and_snapshot_age() {
    let db = setup_test_db("status_summary");
    init_db_with_data("status_summary", &db);

    jas()
        .args(["--db", &db, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("2 notificaciones pendientes"))
        .stdout(contains("Snapshot:"));
}

#[test]
fn test_backup_copies_cache_file() {
    let db = setup_test_db("backup_copy");
    init_db_with_data("backup_copy", &db);

    let dest = common::temp_out("backup_copy", "sqlite");

    jas()
        .args(["--db", &db, "--test", "backup", "--file", &dest, "--force"])
        .assert()
        .success();

    let src_len = std::fs::metadata(&db).expect("source cache").len();
    let dest_len = std::fs::metadata(&dest).expect("backup file").len();
    assert_eq!(src_len, dest_len);
}

#[test]
fn test_backup_compress_produces_zip() {
    let db = setup_test_db("backup_zip");
    init_db_with_data("backup_zip", &db);

    let dest = common::temp_out("backup_zip", "sqlite");

    jas()
        .args([
            "--db", &db, "--test", "backup", "--file", &dest, "--compress", "--force",
        ])
        .assert()
        .success();

    let zip_path = std::path::Path::new(&dest).with_extension("zip");
    let content = std::fs::read(&zip_path).expect("compressed backup exists");
    // zip local file header magic
    assert!(content.starts_with(b"PK"));
}
