//! High-level export flow: load the cached snapshot, run it through the
//! same visibility + filter pipeline the history view uses, then hand the
//! flattened rows to the requested writer.

use crate::config::Config;
use crate::core::filter::FilterCriteria;
use crate::core::history::HistoryView;
use crate::core::sort::{SortKey, SortOrder};
use crate::db::log::jlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_repositions;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::RepositionExport;
use crate::export::range::parse_range;
use crate::export::{ExportFormat, json_csv, pdf_export, xlsx};
use crate::ui::messages::warning;
use chrono::Utc;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered reposition history.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a creation-date expression
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start:end` intervals)
    /// - `criteria`: the same filters the `history` command takes
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        criteria: &FilterCriteria,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let records = load_repositions(pool)?;
        let now = Utc::now();

        let view = HistoryView::build(
            &records,
            criteria,
            SortKey::CreatedAt,
            SortOrder::Asc,
            cfg.viewer(),
            now,
        );

        let rows: Vec<RepositionExport> = view
            .entries
            .iter()
            .filter(|r| match date_bounds {
                None => true,
                Some((start, end)) => {
                    let d = r.created_at.date_naive();
                    d >= start && d <= end
                }
            })
            .map(RepositionExport::from)
            .collect();

        if rows.is_empty() {
            warning("No repositions found for the selected filters.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => json_csv::export_csv(&rows, path)?,
            ExportFormat::Json => json_csv::export_json(&rows, path)?,
            ExportFormat::Xlsx => xlsx::export_xlsx(&rows, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(range);
                pdf_export::export_pdf(&rows, path, &title)?;
            }
        }

        jlog(
            &pool.conn,
            "export",
            file,
            &format!("{} repositions exported as {}", rows.len(), format.as_str()),
        )?;

        Ok(())
    }
}

/// PDF title for the selected period.
fn build_pdf_title(range: &Option<String>) -> String {
    let base = "Historial de reposiciones";

    match range.as_deref() {
        None => base.to_string(),
        Some(r) if r.eq_ignore_ascii_case("all") => base.to_string(),
        Some(r) if r.contains(':') => {
            let parts: Vec<&str> = r.split(':').collect();
            if parts.len() == 2 {
                format!("{base} — {} a {}", parts[0].trim(), parts[1].trim())
            } else {
                base.to_string()
            }
        }
        Some(r) => format!("{base} — {r}"),
    }
}
