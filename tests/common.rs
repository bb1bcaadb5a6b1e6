#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn jas() -> Command {
    cargo_bin_cmd!("jasana")
}

/// Create a unique test cache path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jasana.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a snapshot JSON document to a temp file and return its path
pub fn write_snapshot(name: &str, doc: &serde_json::Value) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_snapshot.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, serde_json::to_string_pretty(doc).expect("serialize snapshot"))
        .expect("write snapshot file");
    p
}

pub fn ts(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

pub fn hours_ago(h: i64) -> DateTime<Utc> {
    Utc::now() - Duration::hours(h)
}

pub fn days_ago(d: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(d)
}

/// A small but realistic snapshot used by several tests. Timestamps are
/// relative to the real clock because the binary evaluates visibility
/// against `now`:
/// - RP-001: completed 13h ago, requested by corte (visible only to corte,
///   admin and envios)
/// - RP-002: active, bordado, with an accident origin (plancha)
/// - RP-003: completed 2h ago, requested by ensamble (visible to everyone)
/// - RP-004: active, created 40 days ago (outside week/month periods)
pub fn sample_snapshot() -> serde_json::Value {
    serde_json::json!({
        "fetchedAt": ts(Utc::now()),
        "repositions": [
            {
                "id": 1,
                "folio": "RP-001",
                "status": "completado",
                "urgencia": "media",
                "tipo": "reparacion",
                "currentArea": "envios",
                "solicitanteArea": "corte",
                "cliente": "Marisol",
                "modelo": "Vestido V-12",
                "motivo": "Costura abierta",
                "piezas": 3,
                "createdAt": ts(days_ago(2)),
                "finalizadoAt": ts(hours_ago(13))
            },
            {
                "id": 2,
                "folio": "RP-002",
                "status": "en_proceso",
                "urgencia": "alta",
                "tipo": "rehechura",
                "currentArea": "bordado",
                "solicitanteArea": "bordado",
                "areaCausanteDano": "plancha",
                "cliente": "Talleres Luna",
                "modelo": "Camisa C-3",
                "motivo": "Quemadura de plancha",
                "descripcion": "Rehacer el panel frontal completo",
                "piezas": 8,
                "createdAt": ts(hours_ago(5))
            },
            {
                "id": 3,
                "folio": "RP-003",
                "status": "completado",
                "urgencia": "baja",
                "tipo": "ajuste",
                "currentArea": "calidad",
                "solicitanteArea": "ensamble",
                "cliente": "Boutique Sol",
                "modelo": "Falda F-7",
                "motivo": "Dobladillo irregular",
                "piezas": 1,
                "createdAt": ts(days_ago(1)),
                "finalizadoAt": ts(hours_ago(2))
            },
            {
                "id": 4,
                "folio": "RP-004",
                "status": "pendiente",
                "urgencia": "media",
                "tipo": "calidad",
                "currentArea": "corte",
                "solicitanteArea": "calidad",
                "cliente": "Marisol",
                "modelo": "Saco S-1",
                "motivo": "Tela con falla",
                "piezas": 5,
                "createdAt": ts(days_ago(40))
            }
        ],
        "notifications": [
            {
                "id": 10,
                "type": "new_reposition",
                "message": "Nueva reposición RP-002 creada por Bordado",
                "folio": "RP-002",
                "area": "bordado",
                "read": false,
                "createdAt": ts(hours_ago(5))
            },
            {
                "id": 11,
                "type": "reposition_completed",
                "message": "Reposición RP-003 completada",
                "folio": "RP-003",
                "read": true,
                "createdAt": ts(hours_ago(2))
            },
            {
                "id": 12,
                "type": "system_maintenance",
                "message": "Mantenimiento programado",
                "read": false,
                "createdAt": ts(hours_ago(1))
            }
        ],
        "transfers": [
            {
                "id": 20,
                "folio": "RP-002",
                "fromArea": "bordado",
                "toArea": "plancha",
                "status": "pending",
                "createdAt": ts(hours_ago(3))
            }
        ]
    })
}

/// Initialize a cache and load the sample snapshot through the CLI
pub fn init_db_with_data(name: &str, db_path: &str) -> String {
    jas()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let snap = write_snapshot(name, &sample_snapshot());

    jas()
        .args(["--db", db_path, "--test", "sync", "--file", &snap])
        .assert()
        .success();

    snap
}
