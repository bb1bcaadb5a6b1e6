use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DelLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::io::{Write, stdin, stdout};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        if !*force {
            println!("Esta acción no se puede deshacer.");
            print!("Delete reposition {id}? [y/N]: ");
            stdout().flush().ok();

            let mut answer = String::new();
            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();
            if !(answer == "y" || answer == "yes") {
                println!("Delete cancelled.");
                return Ok(());
            }
        }

        let mut pool = DbPool::new(&cfg.database)?;
        DelLogic::delete(&mut pool, cfg, *id)?;
    }
    Ok(())
}
