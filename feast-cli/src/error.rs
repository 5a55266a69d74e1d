//! Error types emitted by the `feast` CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use feast_core::{PlanError, TripRequestValidationError};
use thiserror::Error;

/// Errors emitted by the `feast` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Neither a listings nor a markets catalog was given.
    #[error(
        "missing catalog (set --listings or --markets, or FEAST_CMDS_PLAN_LISTINGS or FEAST_CMDS_PLAN_MARKETS)"
    )]
    MissingCatalog,
    /// Both a listings and a markets catalog were given.
    #[error("--listings and --markets cannot be combined")]
    ConflictingCatalogs,
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the trip request file failed.
    #[error("failed to open trip request at {path:?}: {source}")]
    OpenTripRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Trip request JSON could not be decoded.
    #[error("failed to parse trip request JSON at {path:?}: {source}")]
    ParseTripRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The trip request payload failed validation.
    #[error("trip request in {path:?} failed validation: {source}")]
    InvalidTripRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: TripRequestValidationError,
    },
    /// Opening a catalog file failed.
    #[error("failed to open {field} catalog at {path:?}: {source}")]
    OpenCatalog {
        /// Flag naming the catalog.
        field: &'static str,
        /// Catalog file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Catalog JSON could not be decoded.
    #[error("failed to parse {field} catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        /// Flag naming the catalog.
        field: &'static str,
        /// Catalog file path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The planner failed.
    #[error("planner failed: {source}")]
    Plan {
        /// Planner failure.
        source: PlanError,
    },
    /// Serializing the plan response failed.
    #[error("failed to serialize plan response: {0}")]
    SerializePlanResponse(#[source] serde_json::Error),
    /// Writing the plan output failed.
    #[error("failed to write plan output: {0}")]
    WritePlanOutput(#[source] std::io::Error),
}
