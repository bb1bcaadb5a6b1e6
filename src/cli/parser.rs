use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for the JASANA companion.
/// Terminal client over local snapshots of the reposition tracker.
#[derive(Parser)]
#[command(
    name = "jasana",
    version = env!("CARGO_PKG_VERSION"),
    about = "JASANA companion: browse, filter and export reposition history from local snapshots",
    long_about = None
)]
pub struct Cli {
    /// Override cache database path (useful for tests or custom caches)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this viewer area instead of the configured one
    #[arg(global = true, long = "viewer")]
    pub viewer: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the cache database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Fill missing configuration fields with defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the cache database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending cache migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check cache integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the cache using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show cache information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Load a snapshot document into the local cache
    Sync {
        /// Snapshot JSON file downloaded from the backend
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Override the snapshot timestamp (RFC 3339)
        #[arg(long = "fetched-at", value_name = "TIMESTAMP")]
        fetched_at: Option<String>,
    },

    /// Browse the reposition history with filters and sorting
    History {
        /// Free text over folio, cliente, modelo, motivo, descripción
        #[arg(long, short)]
        search: Option<String>,

        /// Area filter (matches current or requesting area), "all" bypasses
        #[arg(long)]
        area: Option<String>,

        /// Status filter: pendiente, en_proceso, completado, cancelado, pausado
        #[arg(long)]
        status: Option<String>,

        /// Urgency filter: alta, media, baja
        #[arg(long)]
        urgency: Option<String>,

        /// Type filter: reparacion, rehechura, ajuste, calidad
        #[arg(long = "type")]
        tipo: Option<String>,

        /// Accident-origin filter: all, with_accident, without_accident
        #[arg(long)]
        accident: Option<String>,

        /// Creation period: all, today, week, month, quarter, semester, year
        #[arg(long)]
        period: Option<String>,

        /// Sort key: createdAt, finalizadoAt, folio, cliente, piezas
        #[arg(long = "sort")]
        sort_by: Option<String>,

        /// Sort order: asc or desc
        #[arg(long)]
        order: Option<String>,

        /// Show motivo/descripción under each row
        #[arg(long = "details")]
        details: bool,
    },

    /// Show the most recent repositions
    Activity {
        #[arg(long, help = "How many entries to show")]
        limit: Option<usize>,
    },

    /// Show unread notifications and pending transfers
    Notifications {
        #[arg(long = "read", value_name = "ID", help = "Mark one notification as read")]
        read: Vec<i64>,

        #[arg(long = "clear-all", help = "Mark every notification as read")]
        clear_all: bool,

        #[arg(long = "full", help = "Show full messages instead of one line each")]
        full: bool,
    },

    /// Greeting, snapshot age, badge count and update countdown
    Status,

    /// Delete a reposition from the cache (Admin/Envíos only)
    Del {
        /// Reposition id
        id: i64,

        #[arg(long, short = 'f', help = "Skip the confirmation prompt")]
        force: bool,
    },

    /// Export the filtered reposition history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Creation-date bounds: YYYY, YYYY-MM, YYYY-MM-DD or start:end"
        )]
        range: Option<String>,

        #[arg(long, short)]
        search: Option<String>,

        #[arg(long)]
        area: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the cache database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup file")]
        force: bool,
    },
}
