//! Removal of a reposition from the local cache.
//!
//! Only Admin and Envíos may delete repositions; the backend enforces the
//! same rule, this mirrors it so the cache never diverges silently. The
//! actual system-of-record delete happens through the API; here we drop the
//! cached row and record the operation in the internal log.

use crate::config::Config;
use crate::db::log::jlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_reposition, load_reposition};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub struct DelLogic;

impl DelLogic {
    pub fn delete(pool: &mut DbPool, cfg: &Config, id: i64) -> AppResult<()> {
        let privileged = cfg.viewer().map(|a| a.is_privileged()).unwrap_or(false);

        if !privileged {
            return Err(AppError::PermissionDenied(
                "only Admin or Envíos can delete repositions".to_string(),
            ));
        }

        let repo = load_reposition(pool, id)?;
        delete_reposition(pool, id)?;

        jlog(
            &pool.conn,
            "del",
            &repo.folio,
            "Reposition removed from local cache",
        )?;

        success(format!("Reposition {} deleted.", repo.folio));
        Ok(())
    }
}
