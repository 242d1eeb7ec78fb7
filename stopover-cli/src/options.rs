//! Value enums shared by the subcommands.
//!
//! Each mirrors a core setting so it can be named on the command line and
//! in configuration files.

use clap::ValueEnum;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use stopover_core::{SearchStrategy, UnreachablePolicy};

/// Shortest-path selection strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum StrategyChoice {
    /// Scan all points for the next one to settle.
    #[default]
    Linear,
    /// Use a binary heap.
    Heap,
}

impl From<StrategyChoice> for SearchStrategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::Linear => Self::LinearScan,
            StrategyChoice::Heap => Self::BinaryHeap,
        }
    }
}

/// Tour sequencing algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum PlannerChoice {
    /// Always go to the nearest remaining destination.
    #[default]
    Greedy,
    /// Try every order; only for a handful of destinations.
    Exhaustive,
}

/// Handling of destinations outside the start's component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum UnreachableChoice {
    /// Drop them and report them in the plan.
    #[default]
    Skip,
    /// Fail the query.
    Fail,
}

impl From<UnreachableChoice> for UnreachablePolicy {
    fn from(choice: UnreachableChoice) -> Self {
        match choice {
            UnreachableChoice::Skip => Self::Skip,
            UnreachableChoice::Fail => Self::Fail,
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub(crate) const fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}
