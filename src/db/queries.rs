//! Snapshot mirror queries: replace-on-sync writes and full loads.
//!
//! Loads return the whole table; all filtering/sorting happens in `core` so
//! the engine stays a pure function over an in-memory snapshot.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::notification::Notification;
use crate::models::reposition::Reposition;
use crate::models::transfer::Transfer;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, Row, params};

fn parse_ts(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(raw.to_string())),
            )
        })
}

fn parse_opt_ts(raw: Option<String>) -> Result<Option<DateTime<Utc>>> {
    raw.map(|s| parse_ts(&s)).transpose()
}

// ---------------------------
// Repositions
// ---------------------------

pub fn map_reposition_row(row: &Row) -> Result<Reposition> {
    let created_raw: String = row.get("created_at")?;
    let finalizado_raw: Option<String> = row.get("finalizado_at")?;
    let completed_raw: Option<String> = row.get("completed_at")?;

    Ok(Reposition {
        id: row.get("id")?,
        folio: row.get("folio")?,
        status: row.get("status")?,
        urgencia: row.get("urgencia")?,
        tipo: row.get("tipo")?,
        current_area: row.get("current_area")?,
        solicitante_area: row.get("solicitante_area")?,
        area_causante_dano: row.get("area_causante_dano")?,
        cliente: row.get("cliente")?,
        modelo: row.get("modelo")?,
        motivo: row.get("motivo")?,
        descripcion: row.get("descripcion")?,
        piezas: row.get("piezas")?,
        created_at: parse_ts(&created_raw)?,
        finalizado_at: parse_opt_ts(finalizado_raw)?,
        completed_at: parse_opt_ts(completed_raw)?,
    })
}

/// Full snapshot load, in backend order (by id).
pub fn load_repositions(pool: &mut DbPool) -> AppResult<Vec<Reposition>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM repositions ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_reposition_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_reposition(pool: &mut DbPool, id: i64) -> AppResult<Reposition> {
    let mut stmt = pool.conn.prepare("SELECT * FROM repositions WHERE id = ?1")?;

    let mut rows = stmt.query_map([id], map_reposition_row)?;

    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::RepositionNotFound(id)),
    }
}

fn insert_reposition(conn: &Connection, r: &Reposition) -> AppResult<()> {
    conn.execute(
        "INSERT INTO repositions (
            id, folio, status, urgencia, tipo,
            current_area, solicitante_area, area_causante_dano,
            cliente, modelo, motivo, descripcion, piezas,
            created_at, finalizado_at, completed_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
        params![
            r.id,
            r.folio,
            r.status,
            r.urgencia,
            r.tipo,
            r.current_area,
            r.solicitante_area,
            r.area_causante_dano,
            r.cliente,
            r.modelo,
            r.motivo,
            r.descripcion,
            r.piezas,
            r.created_at.to_rfc3339(),
            r.finalizado_at.map(|ts| ts.to_rfc3339()),
            r.completed_at.map(|ts| ts.to_rfc3339()),
        ],
    )?;
    Ok(())
}

pub fn delete_reposition(pool: &mut DbPool, id: i64) -> AppResult<()> {
    let affected = pool
        .conn
        .execute("DELETE FROM repositions WHERE id = ?1", [id])?;

    if affected == 0 {
        return Err(AppError::RepositionNotFound(id));
    }
    Ok(())
}

// ---------------------------
// Notifications
// ---------------------------

fn map_notification_row(row: &Row) -> Result<Notification> {
    let created_raw: String = row.get("created_at")?;

    Ok(Notification {
        id: row.get("id")?,
        kind: row.get("kind")?,
        message: row.get("message")?,
        folio: row.get("folio")?,
        area: row.get("area")?,
        read: row.get::<_, i64>("read")? != 0,
        created_at: parse_ts(&created_raw)?,
    })
}

pub fn load_notifications(pool: &mut DbPool) -> AppResult<Vec<Notification>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM notifications ORDER BY created_at DESC")?;

    let rows = stmt.query_map([], map_notification_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn mark_notification_read(pool: &mut DbPool, id: i64) -> AppResult<bool> {
    let affected = pool
        .conn
        .execute("UPDATE notifications SET read = 1 WHERE id = ?1", [id])?;
    Ok(affected > 0)
}

pub fn mark_all_notifications_read(pool: &mut DbPool) -> AppResult<usize> {
    let affected = pool
        .conn
        .execute("UPDATE notifications SET read = 1 WHERE read = 0", [])?;
    Ok(affected)
}

// ---------------------------
// Transfers
// ---------------------------

fn map_transfer_row(row: &Row) -> Result<Transfer> {
    let created_raw: String = row.get("created_at")?;

    Ok(Transfer {
        id: row.get("id")?,
        folio: row.get("folio")?,
        from_area: row.get("from_area")?,
        to_area: row.get("to_area")?,
        status: row.get("status")?,
        created_at: parse_ts(&created_raw)?,
    })
}

pub fn load_transfers(pool: &mut DbPool) -> AppResult<Vec<Transfer>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM transfers ORDER BY created_at DESC")?;

    let rows = stmt.query_map([], map_transfer_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Snapshot replacement
// ---------------------------

/// Replace the whole mirror with the given snapshot, atomically. The cache
/// never holds a mix of two snapshots.
pub fn replace_snapshot(
    pool: &mut DbPool,
    repositions: &[Reposition],
    notifications: &[Notification],
    transfers: &[Transfer],
    fetched_at: DateTime<Utc>,
) -> AppResult<()> {
    let tx = pool.conn.transaction()?;

    tx.execute("DELETE FROM repositions", [])?;
    tx.execute("DELETE FROM notifications", [])?;
    tx.execute("DELETE FROM transfers", [])?;

    for r in repositions {
        insert_reposition(&tx, r)?;
    }

    for n in notifications {
        tx.execute(
            "INSERT INTO notifications (id, kind, message, folio, area, read, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                n.id,
                n.kind,
                n.message,
                n.folio,
                n.area,
                n.read as i64,
                n.created_at.to_rfc3339(),
            ],
        )?;
    }

    for t in transfers {
        tx.execute(
            "INSERT INTO transfers (id, folio, from_area, to_area, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                t.id,
                t.folio,
                t.from_area,
                t.to_area,
                t.status,
                t.created_at.to_rfc3339(),
            ],
        )?;
    }

    tx.execute(
        "INSERT INTO snapshot_meta (key, value) VALUES ('fetched_at', ?1)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![fetched_at.to_rfc3339()],
    )?;

    tx.commit()?;
    Ok(())
}

/// When the last snapshot was fetched, if any sync ever ran.
pub fn snapshot_fetched_at(pool: &mut DbPool) -> AppResult<Option<DateTime<Utc>>> {
    use rusqlite::OptionalExtension;

    let raw: Option<String> = pool
        .conn
        .query_row(
            "SELECT value FROM snapshot_meta WHERE key = 'fetched_at'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match raw {
        Some(s) => Ok(Some(
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| AppError::InvalidTimestamp(s))?,
        )),
        None => Ok(None),
    }
}
