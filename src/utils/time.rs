//! Relative-time formatting for feeds and notifications.

use chrono::{DateTime, Local, Utc};

/// "Hace ..." label for a timestamp, same buckets as the dashboard:
/// seconds under a minute, minutes (with clock time past five), hours and
/// days with the clock time, full date-time past a week.
pub fn format_time_ago(dt: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - dt;
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    let local = dt.with_timezone(&Local);
    let clock = local.format("%H:%M");

    if days > 7 {
        local.format("%d/%m/%Y %H:%M").to_string()
    } else if days > 0 {
        format!("Hace {} día{} - {}", days, plural(days), clock)
    } else if hours > 0 {
        format!("Hace {} hora{} - {}", hours, plural(hours), clock)
    } else if minutes > 5 {
        format!("Hace {} minuto{} - {}", minutes, plural(minutes), clock)
    } else if minutes > 0 {
        format!("Hace {} minuto{}", minutes, plural(minutes))
    } else {
        "Hace unos segundos".to_string()
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 { "s" } else { "" }
}
