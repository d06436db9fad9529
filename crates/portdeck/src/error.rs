//! CLI error types with miette diagnostics.
//!
//! Only conditions the console itself can hit become errors here; the core
//! never raises. Benign core outcomes (`Denied`, `UnknownTarget`) are
//! mapped at the command layer into the variants below so they exit with
//! documented codes.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use portdeck_config::ConfigError;

/// Exit codes for scripting.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const IO: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(portdeck::config))]
    Config(#[from] ConfigError),

    // ── Draft persistence ────────────────────────────────────────────
    #[error("Cannot read inventory draft at {path}")]
    #[diagnostic(
        code(portdeck::draft_read),
        help("A missing draft is created on the first `switch add`; a corrupt one must be fixed or removed by hand.")
    )]
    DraftRead {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Cannot write inventory draft at {path}")]
    #[diagnostic(code(portdeck::draft_write))]
    DraftWrite {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Switch '{reference}' not found")]
    #[diagnostic(
        code(portdeck::switch_not_found),
        help("Run: portdeck switch list")
    )]
    SwitchNotFound { reference: String },

    #[error("Port {port} not found on switch '{reference}'")]
    #[diagnostic(
        code(portdeck::port_not_found),
        help("Run: portdeck port list {reference}")
    )]
    PortNotFound { reference: String, port: u32 },

    // ── Policy ───────────────────────────────────────────────────────
    #[error("Session is read-only; '{action}' was not applied")]
    #[diagnostic(
        code(portdeck::read_only),
        help("Drop --read-only (and read_only in config) to edit the draft.")
    )]
    ReadOnly { action: String },

    // ── Output ───────────────────────────────────────────────────────
    #[error("Cannot write script to {path}")]
    #[diagnostic(code(portdeck::script_write))]
    ScriptWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(portdeck::usage))]
    Usage { message: String },

    #[error("Aborted")]
    #[diagnostic(code(portdeck::aborted))]
    Aborted,
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SwitchNotFound { .. } | Self::PortNotFound { .. } => exit_code::NOT_FOUND,
            Self::ReadOnly { .. } => exit_code::PERMISSION,
            Self::DraftRead { .. } | Self::DraftWrite { .. } | Self::ScriptWrite { .. } => {
                exit_code::IO
            }
            _ => exit_code::GENERAL,
        }
    }
}
