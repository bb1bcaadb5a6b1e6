use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::countdown::Countdown;
use crate::core::notifications::badge_count;
use crate::core::profile::{greeting_for_hour, user_initials};
use crate::db::pool::DbPool;
use crate::db::queries::{load_notifications, load_transfers, snapshot_fetched_at};
use crate::errors::AppResult;
use crate::models::area::display_area;
use crate::ui::messages::warning;
use crate::utils::colors::{GREY, MAGENTA, RESET, YELLOW};
use crate::utils::date::parse_timestamp;
use crate::utils::time::format_time_ago;
use chrono::{Local, Timelike, Utc};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status = cmd {
        let now_local = Local::now();
        let now = Utc::now();

        println!(
            "{}, {} [{}]",
            greeting_for_hour(now_local.hour()),
            cfg.user_name,
            user_initials(&cfg.user_name)
        );
        println!("Área: {}", display_area(&cfg.area));
        println!();

        let mut pool = DbPool::new(&cfg.database)?;

        match snapshot_fetched_at(&mut pool)? {
            Some(ts) => println!(
                "Snapshot: {}{}{}",
                GREY,
                format_time_ago(ts, now),
                RESET
            ),
            None => warning("No snapshot loaded yet: run `jasana sync --file <snapshot.json>`."),
        }

        let notifications = load_notifications(&mut pool)?;
        let transfers = load_transfers(&mut pool)?;
        let badge = badge_count(&notifications, &transfers);

        if badge > 0 {
            println!("🔔 {badge} notificaciones pendientes");
        } else {
            println!("🔔 Sin notificaciones pendientes");
        }

        // Countdown banner, only while an update is announced
        if let Some(raw) = cfg.release_date.as_deref() {
            match parse_timestamp(raw) {
                Ok(target) => {
                    let countdown = Countdown::until(target, now);
                    if countdown.is_elapsed() {
                        println!("{MAGENTA}🚀 ¡La actualización ya está disponible!{RESET}");
                    } else {
                        println!("{MAGENTA}🚀 Próxima actualización en {countdown}{RESET}");
                    }
                }
                Err(_) => {
                    println!("{YELLOW}release_date in config is not a valid timestamp{RESET}")
                }
            }
        }
    }
    Ok(())
}
