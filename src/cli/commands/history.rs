use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{AccidentFilter, FilterCriteria, PeriodFilter};
use crate::core::history::HistoryView;
use crate::core::sort::{SortKey, SortOrder};
use crate::db::pool::DbPool;
use crate::db::queries::load_repositions;
use crate::errors::{AppError, AppResult};
use crate::models::area::{Area, display_area};
use crate::models::status::{Status, display_status};
use crate::models::tipo::Tipo;
use crate::models::urgency::{Urgency, display_urgency};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, color_for_status, color_for_urgency, colorize_optional};
use crate::utils::date::format_datetime;
use crate::utils::formatting::{truncate_with_ellipsis, wrap_indented};
use crate::utils::table::Table;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        search,
        area,
        status,
        urgency,
        tipo,
        accident,
        period,
        sort_by,
        order,
        details,
    } = cmd
    {
        let criteria = build_criteria(search, area, status, urgency, tipo, accident, period)?;

        let key = match sort_by.as_deref() {
            None => SortKey::CreatedAt,
            Some(raw) => {
                SortKey::from_code(raw).ok_or_else(|| AppError::InvalidSortKey(raw.to_string()))?
            }
        };
        let order = match order.as_deref() {
            None => SortOrder::Desc,
            Some(raw) => SortOrder::from_code(raw).ok_or_else(|| AppError::InvalidFilter {
                field: "order",
                value: raw.to_string(),
            })?,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let records = load_repositions(&mut pool)?;

        let viewer = cfg.viewer();
        let view = HistoryView::build(&records, &criteria, key, order, viewer, Utc::now());

        print_view(&view, &criteria, viewer, cfg, *details);
    }
    Ok(())
}

/// Map the raw CLI flags onto engine criteria. "all" (and absent flags)
/// bypass; anything else must be a known value.
pub fn build_criteria(
    search: &Option<String>,
    area: &Option<String>,
    status: &Option<String>,
    urgency: &Option<String>,
    tipo: &Option<String>,
    accident: &Option<String>,
    period: &Option<String>,
) -> AppResult<FilterCriteria> {
    fn active(raw: &Option<String>) -> Option<&str> {
        match raw.as_deref() {
            None => None,
            Some(v) if v.eq_ignore_ascii_case("all") => None,
            Some(v) => Some(v),
        }
    }

    let area = active(area)
        .map(|raw| Area::from_code(raw).ok_or_else(|| AppError::InvalidArea(raw.to_string())))
        .transpose()?;

    let status = active(status)
        .map(|raw| {
            Status::from_code(raw).ok_or_else(|| AppError::InvalidFilter {
                field: "status",
                value: raw.to_string(),
            })
        })
        .transpose()?;

    let urgency = active(urgency)
        .map(|raw| {
            Urgency::from_code(raw).ok_or_else(|| AppError::InvalidFilter {
                field: "urgency",
                value: raw.to_string(),
            })
        })
        .transpose()?;

    let tipo = active(tipo)
        .map(|raw| {
            Tipo::from_code(raw).ok_or_else(|| AppError::InvalidFilter {
                field: "type",
                value: raw.to_string(),
            })
        })
        .transpose()?;

    let accident = match active(accident) {
        None => AccidentFilter::All,
        Some(raw) => AccidentFilter::from_code(raw).ok_or_else(|| AppError::InvalidFilter {
            field: "accident",
            value: raw.to_string(),
        })?,
    };

    let period = match active(period) {
        None => PeriodFilter::All,
        Some(raw) => PeriodFilter::from_code(raw).ok_or_else(|| AppError::InvalidFilter {
            field: "period",
            value: raw.to_string(),
        })?,
    };

    Ok(FilterCriteria {
        search: search.clone().filter(|s| !s.is_empty()),
        area,
        status,
        urgency,
        tipo,
        accident,
        period,
    })
}

fn print_view(
    view: &HistoryView,
    criteria: &FilterCriteria,
    viewer: Option<Area>,
    cfg: &Config,
    details: bool,
) {
    header("Historial de Reposiciones");

    if !viewer.map(|a| a.is_privileged()).unwrap_or(false) {
        println!(
            "{GREY}* Finalized repositions disappear after 12h (24h for the requesting area){RESET}"
        );
    }
    println!();

    // Stat cards
    println!(
        "Total: {}   Pendientes: {}   En Proceso: {}   Completadas: {}",
        view.stats.total, view.stats.pendientes, view.stats.en_proceso, view.stats.completadas
    );

    // Results summary
    if view.entries.len() != view.snapshot_total {
        println!(
            "Mostrando {} de {} reposiciones ({}% del total)",
            view.entries.len(),
            view.snapshot_total,
            view.percent_of_total()
        );
    } else {
        println!("Mostrando {} reposiciones", view.entries.len());
    }

    if let Some(term) = criteria.search.as_deref() {
        println!("Búsqueda: \"{}\"", truncate_with_ellipsis(term, 20));
    }
    println!();

    if view.entries.is_empty() {
        println!("No se encontraron reposiciones con los filtros aplicados");
        return;
    }

    let mut table = Table::new(vec![
        "ID", "FOLIO", "STATUS", "URGENCIA", "ÁREA", "SOLICITANTE", "CLIENTE", "PIEZAS", "CREADO",
        "FINALIZADO",
    ]);

    for r in &view.entries {
        let status = format!(
            "{}{}{}",
            color_for_status(&r.status),
            display_status(&r.status),
            RESET
        );
        let urgency = match r.urgencia.as_deref() {
            Some(u) => format!("{}{}{}", color_for_urgency(u), display_urgency(u), RESET),
            None => colorize_optional(""),
        };

        table.add_row(vec![
            r.id.to_string(),
            r.folio.clone(),
            status,
            urgency,
            r.current_area.as_deref().map(display_area).unwrap_or_default(),
            r.solicitante_area
                .as_deref()
                .map(display_area)
                .unwrap_or_default(),
            r.cliente.clone().unwrap_or_default(),
            r.piezas.to_string(),
            format_datetime(r.created_at),
            r.finalized_at().map(format_datetime).unwrap_or_default(),
        ]);
    }

    print!("{}", table.render(&cfg.separator_char));

    if details {
        println!();
        for r in &view.entries {
            println!("{}:", r.folio);
            if let Some(m) = r.motivo.as_deref() {
                println!("{}", wrap_indented(&format!("Motivo: {m}"), 76, "  "));
            }
            if let Some(d) = r.descripcion.as_deref() {
                println!("{}", wrap_indented(&format!("Descripción: {d}"), 76, "  "));
            }
            if let Some(a) = r.area_causante_dano.as_deref() {
                println!("  Área causante: {}", display_area(a));
            }
        }
    }
}
