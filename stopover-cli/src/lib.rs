//! Command-line harness for Stopover route queries.
//!
//! Loads a graph from a JSON file and prints the resulting route or tour
//! plan as JSON on stdout.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod graph_file;
mod logging;
mod options;
mod path;
mod tour;

pub use error::CliError;

use logging::init_logging;
use options::LogLevel;
use path::PathArgs;
use tour::TourArgs;

pub(crate) const ARG_GRAPH: &str = "graph";
pub(crate) const ARG_FROM: &str = "from";
pub(crate) const ARG_TO: &str = "to";
pub(crate) const ARG_START: &str = "start";
pub(crate) const ARG_STRATEGY: &str = "strategy";
pub(crate) const ARG_MAX_POINTS: &str = "max-points";
pub(crate) const ARG_MAX_DESTINATIONS: &str = "max-destinations";
pub(crate) const ARG_PLANNER: &str = "planner";
pub(crate) const ARG_EXHAUSTIVE_CAP: &str = "exhaustive-cap";
pub(crate) const ARG_UNREACHABLE: &str = "unreachable";
pub(crate) const ENV_PATH_GRAPH: &str = "STOPOVER_CMDS_PATH_GRAPH";
pub(crate) const ENV_PATH_FROM: &str = "STOPOVER_CMDS_PATH_FROM";
pub(crate) const ENV_PATH_TO: &str = "STOPOVER_CMDS_PATH_TO";
pub(crate) const ENV_TOUR_GRAPH: &str = "STOPOVER_CMDS_TOUR_GRAPH";
pub(crate) const ENV_TOUR_START: &str = "STOPOVER_CMDS_TOUR_START";

/// Run the Stopover CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// graph cannot be loaded, the query fails, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.log_level)?;
    match cli.command {
        Command::Path(args) => path::run_path(args),
        Command::Tour(args) => tour::run_tour(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "stopover",
    about = "Shortest paths and multi-stop tours over a point network",
    version
)]
struct Cli {
    /// Verbosity of diagnostics written to stderr.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the shortest path between two points.
    Path(PathArgs),
    /// Visit a set of destinations in one open route.
    Tour(TourArgs),
}

#[cfg(test)]
mod tests;
