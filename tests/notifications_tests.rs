//! Notification feed, panel state, countdown and status helpers.

mod common;
use common::{init_db_with_data, jas, setup_test_db};

use chrono::{Duration, TimeZone, Utc};
use jasana::core::countdown::Countdown;
use jasana::core::notifications::{PanelState, badge_count, is_reposition_related, unread};
use jasana::core::profile::{greeting_for_hour, user_initials};
use jasana::models::notification::Notification;
use jasana::models::transfer::Transfer;
use jasana::utils::time::format_time_ago;
use predicates::str::contains;

fn notification(id: i64, kind: &str, read: bool) -> Notification {
    Notification {
        id,
        kind: kind.to_string(),
        message: None,
        folio: None,
        area: None,
        read,
        created_at: Utc::now(),
    }
}

fn transfer(id: i64, status: &str) -> Transfer {
    Transfer {
        id,
        folio: None,
        from_area: Some("bordado".to_string()),
        to_area: Some("plancha".to_string()),
        status: status.to_string(),
        created_at: Utc::now(),
    }
}

// ---------------------------
// Feed filtering
// ---------------------------

#[test]
fn related_kinds_include_the_reposition_family() {
    for kind in [
        "new_reposition",
        "reposition_transfer",
        "reposition_approved",
        "reposition_rejected",
        "reposition_completed",
        "reposition_deleted",
        "completion_approval_needed",
        "partial_transfer_warning",
    ] {
        assert!(is_reposition_related(kind), "{kind} should be related");
    }

    assert!(!is_reposition_related("system_maintenance"));
    assert!(!is_reposition_related("order_created"));
}

#[test]
fn unread_skips_read_and_unrelated_rows() {
    let all = vec![
        notification(1, "new_reposition", false),
        notification(2, "new_reposition", true),
        notification(3, "system_maintenance", false),
    ];

    let result = unread(&all);
    assert_eq!(result.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn badge_counts_pending_transfers_plus_unread() {
    let notifications = vec![
        notification(1, "reposition_completed", false),
        notification(2, "reposition_completed", true),
    ];
    let transfers = vec![transfer(10, "pending"), transfer(11, "accepted")];

    assert_eq!(badge_count(&notifications, &transfers), 2);
}

// ---------------------------
// Panel state
// ---------------------------

#[test]
fn panel_state_toggles_and_dismisses_by_id() {
    let mut panel = PanelState::new();

    panel.toggle_expanded(7);
    assert!(panel.is_expanded(7));
    panel.toggle_expanded(7);
    assert!(!panel.is_expanded(7));

    panel.toggle_expanded(8);
    panel.begin_dismiss(8);
    assert!(panel.is_dismissing(8));
    assert_eq!(panel.dismissing_count(), 1);

    panel.finish_dismiss(8);
    assert!(!panel.is_dismissing(8));
    assert!(!panel.is_expanded(8));
}

// ---------------------------
// Countdown
// ---------------------------

#[test]
fn countdown_decomposes_remaining_time() {
    let now = Utc.with_ymd_and_hms(2025, 10, 10, 0, 0, 0).unwrap();
    let target = Utc.with_ymd_and_hms(2025, 10, 12, 3, 4, 5).unwrap();

    let c = Countdown::until(target, now);
    assert_eq!((c.days, c.hours, c.minutes, c.seconds), (2, 3, 4, 5));
    assert!(!c.is_elapsed());
    assert_eq!(c.to_string(), "2d 3h 4m 5s");
}

#[test]
fn countdown_floors_at_zero_once_elapsed() {
    let now = Utc.with_ymd_and_hms(2025, 10, 13, 0, 0, 0).unwrap();
    let target = Utc.with_ymd_and_hms(2025, 10, 12, 0, 0, 0).unwrap();

    let c = Countdown::until(target, now);
    assert!(c.is_elapsed());
    assert_eq!((c.days, c.hours, c.minutes, c.seconds), (0, 0, 0, 0));
}

// ---------------------------
// Greeting / initials
// ---------------------------

#[test]
fn greeting_follows_dashboard_cutoffs() {
    assert_eq!(greeting_for_hour(6), "Buenos días");
    assert_eq!(greeting_for_hour(11), "Buenos días");
    assert_eq!(greeting_for_hour(12), "Buenas tardes");
    assert_eq!(greeting_for_hour(18), "Buenas tardes");
    assert_eq!(greeting_for_hour(19), "Buenas noches");
    assert_eq!(greeting_for_hour(3), "Buenas noches");
}

#[test]
fn initials_take_first_and_last_word() {
    assert_eq!(user_initials("Ana"), "A");
    assert_eq!(user_initials("ana luisa gómez"), "AG");
    assert_eq!(user_initials(""), "U");
    assert_eq!(user_initials("   "), "U");
}

// ---------------------------
// Relative time buckets
// ---------------------------

#[test]
fn time_ago_buckets() {
    let now = Utc::now();

    assert_eq!(format_time_ago(now - Duration::seconds(30), now), "Hace unos segundos");
    assert_eq!(format_time_ago(now - Duration::minutes(3), now), "Hace 3 minutos");

    let m20 = format_time_ago(now - Duration::minutes(20), now);
    assert!(m20.starts_with("Hace 20 minutos - "));

    let h2 = format_time_ago(now - Duration::hours(2), now);
    assert!(h2.starts_with("Hace 2 horas - "));

    let d3 = format_time_ago(now - Duration::days(3), now);
    assert!(d3.starts_with("Hace 3 días - "));

    // beyond a week: full date-time, no "Hace"
    let d9 = format_time_ago(now - Duration::days(9), now);
    assert!(!d9.starts_with("Hace"));
    assert!(d9.contains('/'));
}

// ---------------------------
// CLI surface
// ---------------------------

#[test]
fn notifications_command_lists_unread_and_pending() {
    let db = setup_test_db("notifications_list");
    init_db_with_data("notifications_list", &db);

    // badge = 1 pending transfer + 1 unread reposition-related notification;
    // the read one (11) and the unrelated one (12) stay out
    jas()
        .args(["--db", &db, "--test", "notifications"])
        .assert()
        .success()
        .stdout(contains("Notificaciones (2)"))
        .stdout(contains("new_reposition"))
        .stdout(contains("Transferencia pendiente"));
}

#[test]
fn notifications_clear_all_empties_the_feed() {
    let db = setup_test_db("notifications_clear");
    init_db_with_data("notifications_clear", &db);

    jas()
        .args(["--db", &db, "--test", "notifications", "--clear-all"])
        .assert()
        .success();

    // only the pending transfer keeps the badge alive
    jas()
        .args(["--db", &db, "--test", "notifications"])
        .assert()
        .success()
        .stdout(contains("Notificaciones (1)"));
}

#[test]
fn notifications_mark_single_read() {
    let db = setup_test_db("notifications_read_one");
    init_db_with_data("notifications_read_one", &db);

    jas()
        .args(["--db", &db, "--test", "notifications", "--read", "10"])
        .assert()
        .success();

    jas()
        .args(["--db", &db, "--test", "notifications"])
        .assert()
        .success()
        .stdout(contains("Notificaciones (1)"));
}
