//! Error types emitted by the golf-router CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use golf_router_core::{OptimizeError, RepositoryError};
use golf_router_data::repository::CsvRepositoryError;
use golf_router_data::routing::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the golf-router CLI.
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
        /// Long option name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Two options that select the same thing were both supplied.
    #[error("--{first} and --{second} cannot be combined")]
    ConflictingArguments {
        /// First option name.
        first: &'static str,
        /// Second option name.
        second: &'static str,
    },
    /// A pass-through provider option is not of the form `key=value`.
    #[error("invalid --option {value:?}: expected key=value")]
    InvalidOption {
        /// Raw option text.
        value: String,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Loading a location dataset failed.
    #[error(transparent)]
    LoadDataset(#[from] CsvRepositoryError),
    /// Looking up or sampling locations failed.
    #[error(transparent)]
    Lookup(#[from] RepositoryError),
    /// Constructing the directions provider failed.
    #[error("failed to build directions provider: {0}")]
    BuildDirectionsProvider(#[source] ProviderBuildError),
    /// The optimizer rejected the request or the provider failed.
    #[error("route optimization failed: {0}")]
    Optimize(#[from] OptimizeError),
    /// Serializing the command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
