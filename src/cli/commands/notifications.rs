use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notifications::{PanelState, badge_count, describe_kind, unread};
use crate::db::log::jlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    load_notifications, load_transfers, mark_all_notifications_read, mark_notification_read,
};
use crate::errors::AppResult;
use crate::models::area::display_area;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::wrap_indented;
use crate::utils::time::format_time_ago;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notifications {
        read,
        clear_all,
        full,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // ---- CLEAR ALL ----
        if *clear_all {
            let n = mark_all_notifications_read(&mut pool)?;
            jlog(&pool.conn, "clear_all", "", "All notifications marked read")?;
            success(format!("{n} notificaciones marcadas como leídas."));
            return Ok(());
        }

        // ---- MARK READ ----
        if !read.is_empty() {
            let mut panel = PanelState::new();

            for id in read {
                panel.begin_dismiss(*id);
            }

            for id in read {
                if mark_notification_read(&mut pool, *id)? {
                    jlog(&pool.conn, "read", &id.to_string(), "Notification read")?;
                    success(format!("Notificación {id} marcada como leída."));
                } else {
                    warning(format!("Notificación {id} no encontrada."));
                }
                panel.finish_dismiss(*id);
            }

            return Ok(());
        }

        // ---- LIST ----
        let notifications = load_notifications(&mut pool)?;
        let transfers = load_transfers(&mut pool)?;

        let pending: Vec<_> = transfers.iter().filter(|t| t.is_pending()).collect();
        let unread_items = unread(&notifications);
        let badge = badge_count(&notifications, &transfers);

        header(format!("Notificaciones ({badge})"));
        println!();

        if unread_items.is_empty() && pending.is_empty() {
            println!("Sin notificaciones pendientes");
            return Ok(());
        }

        let now = Utc::now();

        for t in &pending {
            println!(
                "→ Transferencia pendiente{}: {} → {}",
                t.folio
                    .as_deref()
                    .map(|f| format!(" ({f})"))
                    .unwrap_or_default(),
                t.from_area.as_deref().map(display_area).unwrap_or_default(),
                t.to_area.as_deref().map(display_area).unwrap_or_default(),
            );
            println!("  {GREY}{}{RESET}", format_time_ago(t.created_at, now));
        }

        for n in &unread_items {
            let (icon, color) = describe_kind(&n.kind);

            let folio = n
                .folio
                .as_deref()
                .map(|f| format!(" ({f})"))
                .unwrap_or_default();

            println!("{} {}{}", color.paint(icon), n.kind, folio);

            if let Some(msg) = n.message.as_deref() {
                if *full {
                    println!("{}", wrap_indented(msg, 72, "  "));
                } else {
                    let first = msg.lines().next().unwrap_or(msg);
                    println!("  {first}");
                }
            }
            println!("  {GREY}{}{RESET}", format_time_ago(n.created_at, now));
        }
    }
    Ok(())
}
