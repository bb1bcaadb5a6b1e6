use crate::cli::commands::history::build_criteria;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        search,
        area,
        status,
        period,
        force,
    } = cmd
    {
        let criteria = build_criteria(search, area, status, &None, &None, &None, period)?;

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, cfg, format, file, range, &criteria, *force)?;
    }
    Ok(())
}
