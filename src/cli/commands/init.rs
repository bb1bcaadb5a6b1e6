use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::jlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = DbPool::new(&db_path.to_string_lossy())?;
    init_db(&pool.conn)?;

    jlog(&pool.conn, "init", "", "Cache initialized")?;

    Ok(())
}
