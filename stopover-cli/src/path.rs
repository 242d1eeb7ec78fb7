//! `path` command: shortest path between two points.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use stopover_core::{QueryLimits, SearchConfig, ShortestPathEngine};

use crate::graph_file::{load_graph, require_existing, write_json};
use crate::options::StrategyChoice;
use crate::{
    ARG_FROM, ARG_GRAPH, ARG_MAX_POINTS, ARG_STRATEGY, ARG_TO, CliError, ENV_PATH_FROM,
    ENV_PATH_GRAPH, ENV_PATH_TO,
};

/// CLI arguments for the `path` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find the cheapest route by distance between two points of \
                 a graph loaded from JSON. Travel time is reported but never \
                 used to choose between routes.",
    about = "Find the shortest path between two points"
)]
#[ortho_config(prefix = "STOPOVER")]
pub(crate) struct PathArgs {
    /// Identifier of the start point.
    #[arg(value_name = "from")]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Identifier of the end point.
    #[arg(value_name = "to")]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Path to the graph JSON file.
    #[arg(long = ARG_GRAPH, value_name = "path")]
    #[serde(default)]
    pub(crate) graph: Option<Utf8PathBuf>,
    /// Candidate selection strategy.
    #[arg(long = ARG_STRATEGY, value_enum)]
    #[serde(default)]
    pub(crate) strategy: Option<StrategyChoice>,
    /// Refuse graphs with more points than this.
    #[arg(long = ARG_MAX_POINTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_points: Option<usize>,
}

impl PathArgs {
    fn into_config(self) -> Result<PathConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PathConfig::try_from(merged)
    }
}

/// Resolved `path` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathConfig {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) graph: Utf8PathBuf,
    pub(crate) search: SearchConfig,
    pub(crate) limits: QueryLimits,
}

impl TryFrom<PathArgs> for PathConfig {
    type Error = CliError;

    fn try_from(args: PathArgs) -> Result<Self, Self::Error> {
        let graph = args.graph.ok_or(CliError::MissingArgument {
            field: ARG_GRAPH,
            env: ENV_PATH_GRAPH,
        })?;
        let from = args.from.ok_or(CliError::MissingArgument {
            field: ARG_FROM,
            env: ENV_PATH_FROM,
        })?;
        let to = args.to.ok_or(CliError::MissingArgument {
            field: ARG_TO,
            env: ENV_PATH_TO,
        })?;
        Ok(Self {
            from,
            to,
            graph,
            search: SearchConfig {
                strategy: args.strategy.unwrap_or_default().into(),
            },
            limits: QueryLimits {
                max_points: args.max_points,
                ..QueryLimits::default()
            },
        })
    }
}

pub(super) fn run_path(args: PathArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_path_with(args, &mut stdout)
}

pub(super) fn run_path_with(args: PathArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_path(&config, writer)
}

pub(super) fn execute_path(config: &PathConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_existing(&config.graph, ARG_GRAPH)?;
    let graph = load_graph(&config.graph)?;
    config.limits.check_points(graph.point_count())?;
    let engine = ShortestPathEngine::with_config(&graph, config.search)?;
    let route = engine.shortest_path(&config.from, &config.to)?;
    write_json(writer, &route)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PathConfig, CliError> {
    let merged = PathArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PathConfig::try_from(merged)
}
