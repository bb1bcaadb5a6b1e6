//! Cache schema creation and upgrades.
//!
//! The cache mirrors the backend snapshot, so migrations here are about the
//! local mirror only: create the tables, and patch columns older cache files
//! are missing.

use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the snapshot mirror tables with the current schema.
fn create_snapshot_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS repositions (
            id                  INTEGER PRIMARY KEY,
            folio               TEXT NOT NULL,
            status              TEXT NOT NULL,
            urgencia            TEXT,
            tipo                TEXT,
            current_area        TEXT,
            solicitante_area    TEXT,
            area_causante_dano  TEXT,
            cliente             TEXT,
            modelo              TEXT,
            motivo              TEXT,
            descripcion         TEXT,
            piezas              INTEGER NOT NULL DEFAULT 0,
            created_at          TEXT NOT NULL,
            finalizado_at       TEXT,
            completed_at        TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_repositions_created ON repositions(created_at);
        CREATE INDEX IF NOT EXISTS idx_repositions_status  ON repositions(status);

        CREATE TABLE IF NOT EXISTS notifications (
            id         INTEGER PRIMARY KEY,
            kind       TEXT NOT NULL,
            message    TEXT,
            folio      TEXT,
            area       TEXT,
            read       INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS transfers (
            id         INTEGER PRIMARY KEY,
            folio      TEXT,
            from_area  TEXT,
            to_area    TEXT,
            status     TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS snapshot_meta (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn repositions_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='repositions'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn repositions_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('repositions')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Cache files written before 0.4 predate the backend's `completedAt`
/// fallback field; add the column in place.
fn migrate_add_completed_at(conn: &Connection) -> Result<()> {
    if !repositions_table_exists(conn)? {
        return Ok(());
    }

    if repositions_has_column(conn, "completed_at")? {
        return Ok(());
    }

    warning("Adding 'completed_at' column to repositions table...");
    conn.execute_batch("ALTER TABLE repositions ADD COLUMN completed_at TEXT;")?;
    success("'completed_at' column added.");

    Ok(())
}

/// Run every schema step. Each one is idempotent, so this is safe to call
/// on every startup path that touches the database.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_add_completed_at(conn)?;
    create_snapshot_tables(conn)?;
    Ok(())
}

/// `db --check`: quick integrity pass over the cache file.
pub fn check_integrity(conn: &Connection) -> Result<bool> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result == "ok")
}
