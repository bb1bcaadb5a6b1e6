//! `db --info`: a quick look at what the cache currently holds.

use crate::db::pool::DbPool;
use crate::db::queries::snapshot_fetched_at;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::format_datetime;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) SNAPSHOT AGE
    //
    match snapshot_fetched_at(pool)? {
        Some(ts) => println!(
            "{}• Snapshot fetched:{} {}",
            CYAN,
            RESET,
            format_datetime(ts)
        ),
        None => println!("{}• Snapshot fetched:{} {GREY}never{RESET}", CYAN, RESET),
    }

    //
    // 3) ROW COUNTS
    //
    let repositions: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM repositions", [], |row| row.get(0))?;
    let notifications: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM notifications", [], |row| row.get(0))?;
    let unread: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM notifications WHERE read = 0",
        [],
        |row| row.get(0),
    )?;
    let transfers: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM transfers", [], |row| row.get(0))?;

    println!(
        "{}• Repositions:{} {}{}{}",
        CYAN, RESET, GREEN, repositions, RESET
    );
    println!(
        "{}• Notifications:{} {} ({} unread)",
        CYAN, RESET, notifications, unread
    );
    println!("{}• Transfers:{} {}", CYAN, RESET, transfers);

    //
    // 4) STATUS BREAKDOWN
    //
    let mut stmt = pool
        .conn
        .prepare("SELECT status, COUNT(*) FROM repositions GROUP BY status ORDER BY COUNT(*) DESC")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    println!("{}• By status:{}", CYAN, RESET);
    for r in rows {
        let (status, count) = r?;
        println!("    {status}: {count}");
    }

    println!();
    Ok(())
}
