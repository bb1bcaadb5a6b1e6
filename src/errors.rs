//! Unified application error type.
//! All modules (db, core, snapshot, cli, export) return AppError to keep
//! error handling consistent across the binary and the library API.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Cache database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Snapshot ingestion
    // ---------------------------
    #[error("Snapshot parse error: {0}")]
    Snapshot(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid area code: {0}")]
    InvalidArea(String),

    #[error("Invalid filter value for {field}: {value}")]
    InvalidFilter { field: &'static str, value: String },

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    // ---------------------------
    // Business rules
    // ---------------------------
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Reposition not found: {0}")]
    RepositionNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
