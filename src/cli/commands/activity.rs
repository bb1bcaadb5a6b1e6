use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::activity::recent;
use crate::db::pool::DbPool;
use crate::db::queries::load_repositions;
use crate::errors::AppResult;
use crate::models::area::Area;
use crate::models::status::display_status;
use crate::models::tipo::display_tipo;
use crate::models::urgency::display_urgency;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, color_for_status, color_for_urgency};
use crate::utils::time::format_time_ago;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity { limit } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let records = load_repositions(&mut pool)?;

        let feed = recent(&records, limit.unwrap_or(cfg.recent_limit));

        header("Reposiciones Recientes");
        println!();

        if feed.is_empty() {
            println!("No hay reposiciones recientes");
            return Ok(());
        }

        let now = Utc::now();

        for r in &feed {
            let status = format!(
                "{}{}{}",
                color_for_status(&r.status),
                display_status(&r.status),
                RESET
            );
            let urgency = r
                .urgencia
                .as_deref()
                .map(|u| format!(" [{}{}{}]", color_for_urgency(u), display_urgency(u), RESET))
                .unwrap_or_default();
            let tipo = r
                .tipo
                .as_deref()
                .map(|t| format!(" · {}", display_tipo(t)))
                .unwrap_or_default();

            println!("{} — {}{}{}", r.folio, status, urgency, tipo);

            if let Some(modelo) = r.modelo.as_deref() {
                println!("  Modelo: {modelo}");
            }
            let area = r
                .current_area
                .as_deref()
                .map(|raw| match Area::from_code(raw) {
                    Some(a) => format!("{}{}{}", a.color(), a.display_name(), RESET),
                    None => raw.to_string(),
                })
                .unwrap_or_default();

            println!(
                "  {}{}{}  {}",
                GREY,
                format_time_ago(r.created_at, now),
                RESET,
                area
            );
            println!();
        }
    }
    Ok(())
}
