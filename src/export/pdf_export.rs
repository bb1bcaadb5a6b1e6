use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, repositions_to_table};
use crate::export::pdf::PdfManager;
use crate::export::{RepositionExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

pub(crate) fn export_pdf(rows: &[RepositionExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let table = repositions_to_table(rows);

    let mut manager = PdfManager::new();
    manager.write_table(title, &headers, &table);

    manager
        .save(path)
        .map_err(|e| AppError::Export(format!("PDF write error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
