//! Library-level tests for the visibility / filter / sort engine, using a
//! pinned `now` so boundary cases are exact.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jasana::core::filter::{AccidentFilter, FilterCriteria, PeriodFilter, filter_repositions};
use jasana::core::history::HistoryView;
use jasana::core::sort::{SortKey, SortOrder, sort_repositions};
use jasana::core::visibility::is_visible_at;
use jasana::models::area::Area;
use jasana::models::reposition::Reposition;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
}

fn repo(id: i64, folio: &str) -> Reposition {
    Reposition {
        id,
        folio: folio.to_string(),
        status: "pendiente".to_string(),
        urgencia: None,
        tipo: None,
        current_area: None,
        solicitante_area: None,
        area_causante_dano: None,
        cliente: None,
        modelo: None,
        motivo: None,
        descripcion: None,
        piezas: 0,
        created_at: fixed_now() - Duration::days(1),
        finalizado_at: None,
        completed_at: None,
    }
}

fn finalized(id: i64, folio: &str, ago: Duration, solicitante: &str) -> Reposition {
    Reposition {
        status: "completado".to_string(),
        solicitante_area: Some(solicitante.to_string()),
        finalizado_at: Some(fixed_now() - ago),
        ..repo(id, folio)
    }
}

// ---------------------------
// Visibility boundaries
// ---------------------------

#[test]
fn visibility_inclusive_at_exactly_12_hours() {
    let r = finalized(1, "RP-B12", Duration::hours(12), "corte");
    assert!(is_visible_at(&r, Some(Area::Bordado), fixed_now()));
}

#[test]
fn visibility_expires_one_second_past_12_hours() {
    let r = finalized(
        1,
        "RP-B12",
        Duration::hours(12) + Duration::seconds(1),
        "corte",
    );
    assert!(!is_visible_at(&r, Some(Area::Bordado), fixed_now()));
}

#[test]
fn visibility_requester_window_is_24_hours_inclusive() {
    let r = finalized(1, "RP-B24", Duration::hours(24), "corte");
    assert!(is_visible_at(&r, Some(Area::Corte), fixed_now()));

    let r = finalized(
        1,
        "RP-B24",
        Duration::hours(24) + Duration::seconds(1),
        "corte",
    );
    assert!(!is_visible_at(&r, Some(Area::Corte), fixed_now()));
}

#[test]
fn visibility_scenario_a_and_b_thirteen_hours() {
    let r = finalized(1, "RP-13H", Duration::hours(13), "corte");

    // 13h > 12h: hidden from a non-requesting area
    assert!(!is_visible_at(&r, Some(Area::Bordado), fixed_now()));
    // 13h <= 24h: still visible to the requesting area
    assert!(is_visible_at(&r, Some(Area::Corte), fixed_now()));
}

#[test]
fn visibility_privileged_roles_always_see() {
    let r = finalized(1, "RP-OLD", Duration::days(400), "corte");

    assert!(is_visible_at(&r, Some(Area::Admin), fixed_now()));
    assert!(is_visible_at(&r, Some(Area::Envios), fixed_now()));
}

#[test]
fn visibility_active_records_shown_to_everyone() {
    let r = repo(1, "RP-ACT");
    for viewer in [None, Some(Area::Plancha), Some(Area::Diseno)] {
        assert!(is_visible_at(&r, viewer, fixed_now()));
    }
}

#[test]
fn visibility_unknown_viewer_gets_short_window() {
    let r = finalized(1, "RP-UNK", Duration::hours(13), "corte");
    assert!(!is_visible_at(&r, None, fixed_now()));
}

#[test]
fn visibility_completed_at_counts_as_finalization() {
    let mut r = repo(1, "RP-CMP");
    r.completed_at = Some(fixed_now() - Duration::hours(13));
    assert!(!is_visible_at(&r, Some(Area::Bordado), fixed_now()));
}

// ---------------------------
// Filter pipeline
// ---------------------------

#[test]
fn filter_is_idempotent() {
    let records = vec![
        finalized(1, "RP-001", Duration::hours(13), "corte"),
        repo(2, "RP-002"),
        finalized(3, "RP-003", Duration::hours(2), "ensamble"),
    ];

    let criteria = FilterCriteria {
        search: Some("rp".to_string()),
        ..Default::default()
    };

    let once = filter_repositions(&records, &criteria, Some(Area::Bordado), fixed_now());
    let twice = filter_repositions(&once, &criteria, Some(Area::Bordado), fixed_now());

    let ids = |v: &[Reposition]| v.iter().map(|r| r.id).collect::<Vec<_>>();
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn filter_scenario_d_today_is_calendar_based() {
    // now = 2025-06-15T10:00:00Z
    let mut same_day = repo(1, "RP-TODAY");
    same_day.created_at = Utc.with_ymd_and_hms(2025, 6, 15, 2, 0, 0).unwrap();

    let mut yesterday = repo(2, "RP-AYER");
    yesterday.created_at = Utc.with_ymd_and_hms(2025, 6, 14, 23, 59, 0).unwrap();

    let criteria = FilterCriteria {
        period: PeriodFilter::Today,
        ..Default::default()
    };

    let out = filter_repositions(
        &[same_day, yesterday],
        &criteria,
        Some(Area::Admin),
        fixed_now(),
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 1);
}

#[test]
fn filter_week_window_is_trailing_seven_days() {
    let mut inside = repo(1, "RP-IN");
    inside.created_at = fixed_now() - Duration::days(7);

    let mut outside = repo(2, "RP-OUT");
    outside.created_at = fixed_now() - Duration::days(7) - Duration::minutes(1);

    let criteria = FilterCriteria {
        period: PeriodFilter::Week,
        ..Default::default()
    };

    let out = filter_repositions(
        &[inside, outside],
        &criteria,
        Some(Area::Admin),
        fixed_now(),
    );

    assert_eq!(out.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn filter_accident_requires_present_value() {
    let mut with = repo(2, "RP-ACC");
    with.area_causante_dano = Some("plancha".to_string());

    let without = repo(3, "RP-CLEAN");

    let criteria = FilterCriteria {
        accident: AccidentFilter::WithAccident,
        ..Default::default()
    };

    let out = filter_repositions(
        &[with, without],
        &criteria,
        Some(Area::Admin),
        fixed_now(),
    );

    assert_eq!(out.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn filter_unknown_enum_values_never_match_but_never_crash() {
    let mut weird = repo(1, "RP-WEIRD");
    weird.status = "archivado".to_string(); // not in the vocabulary
    weird.urgencia = Some("critica".to_string());
    weird.current_area = Some("mantenimiento".to_string());

    // no filters: record passes through untouched
    let all = filter_repositions(
        std::slice::from_ref(&weird),
        &FilterCriteria::default(),
        Some(Area::Admin),
        fixed_now(),
    );
    assert_eq!(all.len(), 1);

    // a concrete status filter cannot match the unknown value
    let criteria = FilterCriteria {
        status: jasana::models::status::Status::from_code("pendiente"),
        ..Default::default()
    };
    let none = filter_repositions(&[weird], &criteria, Some(Area::Admin), fixed_now());
    assert!(none.is_empty());
}

#[test]
fn filter_urgency_accepts_locale_variants() {
    let mut legacy = repo(1, "RP-LEG");
    legacy.urgencia = Some("urgente".to_string()); // old wire spelling of alta

    let criteria = FilterCriteria {
        urgency: jasana::models::urgency::Urgency::from_code("alta"),
        ..Default::default()
    };

    let out = filter_repositions(&[legacy], &criteria, Some(Area::Admin), fixed_now());
    assert_eq!(out.len(), 1);
}

// ---------------------------
// Sort
// ---------------------------

fn sortable_fixture() -> Vec<Reposition> {
    let mut a = repo(1, "RP-C");
    a.cliente = Some("Zamora".to_string());
    a.piezas = 5;
    a.created_at = fixed_now() - Duration::days(3);
    a.finalizado_at = Some(fixed_now() - Duration::hours(1));

    let mut b = repo(2, "RP-A");
    b.piezas = 9;
    b.created_at = fixed_now() - Duration::days(1);

    let mut c = repo(3, "RP-B");
    c.cliente = Some("Alfaro".to_string());
    c.piezas = 2;
    c.created_at = fixed_now() - Duration::days(2);
    c.finalizado_at = Some(fixed_now() - Duration::hours(6));

    vec![a, b, c]
}

#[test]
fn sort_preserves_length_and_multiset_for_every_key() {
    for key in [
        SortKey::CreatedAt,
        SortKey::FinalizadoAt,
        SortKey::Folio,
        SortKey::Cliente,
        SortKey::Piezas,
    ] {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mut records = sortable_fixture();
            sort_repositions(&mut records, key, order);

            assert_eq!(records.len(), 3);
            let mut ids: Vec<i64> = records.iter().map(|r| r.id).collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }
}

#[test]
fn sort_missing_finalizado_sorts_first_ascending() {
    let mut records = sortable_fixture();
    sort_repositions(&mut records, SortKey::FinalizadoAt, SortOrder::Asc);

    // id 2 has no finalization date → earliest
    assert_eq!(records[0].id, 2);
    assert_eq!(records[1].id, 3);
    assert_eq!(records[2].id, 1);
}

#[test]
fn sort_missing_cliente_sorts_as_empty_string() {
    let mut records = sortable_fixture();
    sort_repositions(&mut records, SortKey::Cliente, SortOrder::Asc);

    // "" < "Alfaro" < "Zamora"
    assert_eq!(
        records.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![2, 3, 1]
    );
}

#[test]
fn sort_desc_flips_direction() {
    let mut records = sortable_fixture();
    sort_repositions(&mut records, SortKey::Piezas, SortOrder::Desc);

    assert_eq!(
        records.iter().map(|r| r.piezas).collect::<Vec<_>>(),
        vec![9, 5, 2]
    );
}

// ---------------------------
// History view stats
// ---------------------------

#[test]
fn history_view_counts_and_percent() {
    let records = vec![
        repo(1, "RP-1"),
        finalized(2, "RP-2", Duration::hours(1), "corte"),
        repo(3, "RP-3"),
    ];

    let criteria = FilterCriteria {
        search: Some("rp-1".to_string()),
        ..Default::default()
    };

    let view = HistoryView::build(
        &records,
        &criteria,
        SortKey::CreatedAt,
        SortOrder::Desc,
        Some(Area::Admin),
        fixed_now(),
    );

    assert_eq!(view.stats.total, 1);
    assert_eq!(view.stats.pendientes, 1);
    assert_eq!(view.snapshot_total, 3);
    assert_eq!(view.percent_of_total(), 33);
}

#[test]
fn history_view_percent_of_empty_snapshot_is_zero() {
    let view = HistoryView::build(
        &[],
        &FilterCriteria::default(),
        SortKey::CreatedAt,
        SortOrder::Desc,
        None,
        fixed_now(),
    );

    assert_eq!(view.percent_of_total(), 0);
    assert!(view.entries.is_empty());
}
