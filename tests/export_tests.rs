mod common;
use common::{init_db_with_data, jas, setup_test_db, temp_out};
use std::fs;

#[test]
fn test_export_csv_all() {
    let db = setup_test_db("export_csv_all");
    init_db_with_data("export_csv_all", &db);

    let out = temp_out("export_csv_all", "csv");

    jas()
        .args([
            "--db", &db, "--viewer", "admin", "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("folio"));
    assert!(content.contains("RP-001"));
    assert!(content.contains("RP-004"));
}

#[test]
fn test_export_json_with_status_filter() {
    let db = setup_test_db("export_json_status");
    init_db_with_data("export_json_status", &db);

    let out = temp_out("export_json_status", "json");

    jas()
        .args([
            "--db", &db, "--viewer", "admin", "--test", "export", "--format", "json", "--file",
            &out, "--status", "en_proceso",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("RP-002"));
    assert!(!content.contains("RP-001"));
}

#[test]
fn test_export_applies_visibility_rules() {
    let db = setup_test_db("export_visibility");
    init_db_with_data("export_visibility", &db);

    let out = temp_out("export_visibility", "json");

    // bordado must not export RP-001 (finalized 13h ago by corte)
    jas()
        .args([
            "--db", &db, "--viewer", "bordado", "--test", "export", "--format", "json", "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("RP-002"));
    assert!(!content.contains("RP-001"));
}

#[test]
fn test_export_xlsx_creates_file() {
    let db = setup_test_db("export_xlsx");
    init_db_with_data("export_xlsx", &db);

    let out = temp_out("export_xlsx", "xlsx");

    jas()
        .args([
            "--db", &db, "--viewer", "admin", "--test", "export", "--format", "xlsx", "--file",
            &out,
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_pdf_creates_file() {
    let db = setup_test_db("export_pdf");
    init_db_with_data("export_pdf", &db);

    let out = temp_out("export_pdf", "pdf");

    jas()
        .args([
            "--db", &db, "--viewer", "admin", "--test", "export", "--format", "pdf", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read(&out).expect("read exported pdf");
    assert!(content.starts_with(b"%PDF"));
}

#[test]
fn test_export_rejects_relative_path() {
    let db = setup_test_db("export_relative");
    init_db_with_data("export_relative", &db);

    jas()
        .args([
            "--db",
            &db,
            "--viewer",
            "admin",
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            "relative-output.csv",
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_range_bounds_creation_date() {
    let db = setup_test_db("export_range");
    init_db_with_data("export_range", &db);

    let out = temp_out("export_range", "csv");

    // a range far in the past matches nothing: the writer is skipped and no
    // file is produced
    jas()
        .args([
            "--db", &db, "--viewer", "admin", "--test", "export", "--format", "csv", "--file",
            &out, "--range", "2019",
        ])
        .assert()
        .success();

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db = setup_test_db("export_force");
    init_db_with_data("export_force", &db);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed existing file");

    jas()
        .args([
            "--db", &db, "--viewer", "admin", "--test", "export", "--format", "csv", "--file",
            &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("RP-001"));
    assert!(!content.contains("old content"));
}
