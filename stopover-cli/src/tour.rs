//! `tour` command: one open route through a destination set.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use stopover_core::{
    ExhaustivePlanner, MultiStopRouter, NearestNeighbour, QueryLimits, RouterConfig, SearchConfig,
    TourPlan,
};

use crate::graph_file::{load_graph, require_existing, write_json};
use crate::options::{PlannerChoice, StrategyChoice, UnreachableChoice};
use crate::{
    ARG_EXHAUSTIVE_CAP, ARG_GRAPH, ARG_MAX_DESTINATIONS, ARG_MAX_POINTS, ARG_PLANNER, ARG_START,
    ARG_STRATEGY, ARG_UNREACHABLE, CliError, ENV_TOUR_GRAPH, ENV_TOUR_START,
};

/// CLI arguments for the `tour` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Sequence a set of destinations into one open route from a \
                 start point. Duplicate destinations are visited once; \
                 destinations that cannot be reached are dropped unless \
                 --unreachable fail is given.",
    about = "Visit a set of destinations in one open route"
)]
#[ortho_config(prefix = "STOPOVER")]
pub(crate) struct TourArgs {
    /// Identifier of the start point.
    #[arg(value_name = "start")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// Identifiers of the points to visit, in any order.
    #[arg(value_name = "destination")]
    #[serde(default)]
    #[ortho_config(merge_strategy = "replace")]
    pub(crate) destinations: Vec<String>,
    /// Path to the graph JSON file.
    #[arg(long = ARG_GRAPH, value_name = "path")]
    #[serde(default)]
    pub(crate) graph: Option<Utf8PathBuf>,
    /// Sequencing algorithm.
    #[arg(long = ARG_PLANNER, value_enum)]
    #[serde(default)]
    pub(crate) planner: Option<PlannerChoice>,
    /// Largest destination set the exhaustive planner accepts.
    #[arg(long = ARG_EXHAUSTIVE_CAP, value_name = "count")]
    #[serde(default)]
    pub(crate) exhaustive_cap: Option<usize>,
    /// Candidate selection strategy for each shortest-path search.
    #[arg(long = ARG_STRATEGY, value_enum)]
    #[serde(default)]
    pub(crate) strategy: Option<StrategyChoice>,
    /// What to do with destinations that cannot be reached.
    #[arg(long = ARG_UNREACHABLE, value_enum)]
    #[serde(default)]
    pub(crate) unreachable: Option<UnreachableChoice>,
    /// Refuse graphs with more points than this.
    #[arg(long = ARG_MAX_POINTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_points: Option<usize>,
    /// Refuse queries with more distinct destinations than this.
    #[arg(long = ARG_MAX_DESTINATIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_destinations: Option<usize>,
}

impl TourArgs {
    fn into_config(self) -> Result<TourConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TourConfig::try_from(merged)
    }
}

/// Resolved `tour` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TourConfig {
    pub(crate) start: String,
    pub(crate) destinations: Vec<String>,
    pub(crate) graph: Utf8PathBuf,
    pub(crate) planner: PlannerChoice,
    pub(crate) exhaustive_cap: usize,
    pub(crate) router: RouterConfig,
}

impl TryFrom<TourArgs> for TourConfig {
    type Error = CliError;

    fn try_from(args: TourArgs) -> Result<Self, Self::Error> {
        let graph = args.graph.ok_or(CliError::MissingArgument {
            field: ARG_GRAPH,
            env: ENV_TOUR_GRAPH,
        })?;
        let start = args.start.ok_or(CliError::MissingArgument {
            field: ARG_START,
            env: ENV_TOUR_START,
        })?;
        let exhaustive_cap = args
            .exhaustive_cap
            .unwrap_or_else(|| ExhaustivePlanner::default().max_destinations());
        Ok(Self {
            start,
            destinations: args.destinations,
            graph,
            planner: args.planner.unwrap_or_default(),
            exhaustive_cap,
            router: RouterConfig {
                search: SearchConfig {
                    strategy: args.strategy.unwrap_or_default().into(),
                },
                limits: QueryLimits {
                    max_points: args.max_points,
                    max_destinations: args.max_destinations,
                },
                unreachable: args.unreachable.unwrap_or_default().into(),
            },
        })
    }
}

pub(super) fn run_tour(args: TourArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_tour_with(args, &mut stdout)
}

pub(super) fn run_tour_with(args: TourArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_tour(&config, writer)
}

pub(super) fn execute_tour(config: &TourConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_existing(&config.graph, ARG_GRAPH)?;
    let graph = load_graph(&config.graph)?;
    let plan: TourPlan = match config.planner {
        PlannerChoice::Greedy => MultiStopRouter::with_planner(NearestNeighbour, config.router)
            .plan(&graph, &config.start, &config.destinations)?,
        PlannerChoice::Exhaustive => MultiStopRouter::with_planner(
            ExhaustivePlanner::new(config.exhaustive_cap),
            config.router,
        )
        .plan(&graph, &config.start, &config.destinations)?,
    };
    write_json(writer, &plan)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<TourConfig, CliError> {
    let merged = TourArgs::merge_from_layers(layers).map_err(CliError::from)?;
    TourConfig::try_from(merged)
}
