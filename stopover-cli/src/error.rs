//! Error types emitted by the Stopover CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use stopover_core::RouteError;
use thiserror::Error;

/// Errors emitted by the Stopover CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Name of the argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The graph file does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument that named the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// The graph path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument that named the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// The graph path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument that named the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the graph file failed.
    #[error("failed to open graph at {path:?}: {source}")]
    OpenGraph {
        /// Path of the graph file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Graph JSON could not be decoded.
    #[error("failed to parse graph JSON at {path:?}: {source}")]
    ParseGraph {
        /// Path of the graph file.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The routing query failed.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// Serialising the result failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// A logger was already installed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[source] log::SetLoggerError),
}
