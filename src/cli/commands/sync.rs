use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::jlog;
use crate::db::pool::DbPool;
use crate::db::queries::replace_snapshot;
use crate::errors::AppResult;
use crate::snapshot::Snapshot;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_timestamp;
use crate::utils::path::expand_tilde;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { file, fetched_at } = cmd {
        let path = expand_tilde(file);
        let snapshot = Snapshot::from_file(&path)?;

        if snapshot.is_empty() {
            warning("Snapshot document contains no data; cache will be emptied.");
        }

        // explicit flag wins, then the document's own stamp, then our clock
        let stamp = match fetched_at {
            Some(raw) => parse_timestamp(raw)?,
            None => snapshot.fetched_at.unwrap_or_else(Utc::now),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        replace_snapshot(
            &mut pool,
            &snapshot.repositions,
            &snapshot.notifications,
            &snapshot.transfers,
            stamp,
        )?;

        jlog(
            &pool.conn,
            "sync",
            &path.to_string_lossy(),
            &format!(
                "Snapshot loaded: {} repositions, {} notifications, {} transfers",
                snapshot.repositions.len(),
                snapshot.notifications.len(),
                snapshot.transfers.len()
            ),
        )?;

        success(format!(
            "Snapshot loaded: {} repositions, {} notifications, {} transfers.",
            snapshot.repositions.len(),
            snapshot.notifications.len(),
            snapshot.transfers.len()
        ));
    }
    Ok(())
}
