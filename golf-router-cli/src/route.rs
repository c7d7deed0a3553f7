//! Route command implementation for the golf-router CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use golf_router_core::{
    DEFAULT_MAX_VIAS, DirectionsOptimizer, DirectionsOptions, ExhaustiveOptimizer, Location,
    LocationRepository, OptimizedRoute, RouteOptimizer, TravelMode,
};
use golf_router_data::repository::{CsvLocationRepository, CsvSchema};
use golf_router_data::routing::GoogleDirectionsProvider;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_API_KEY, ARG_COST_MODEL, ARG_GOAL, ARG_GOLF_COURSES, ARG_MAX_VIAS, ARG_MODE, ARG_OPTION,
    ARG_RANDOM_VIAS, ARG_SEED, ARG_START, ARG_STATIONS, ARG_VIA, CliError,
    DEFAULT_GOLF_COURSES_CSV, DEFAULT_STATIONS_CSV, ENV_API_KEY, ENV_GOAL, ENV_START,
};

/// Via stations sampled when neither `--via` nor `--random-vias` is given.
pub(crate) const DEFAULT_RANDOM_VIAS: usize = 4;

/// How route cost is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum CostModel {
    /// Exhaustive search over great-circle distance.
    #[default]
    Distance,
    /// Delegate ordering to the Google Directions API and report travel
    /// time.
    TravelTime,
}

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Optimize the order in which a trip visits a set of via \
                 stations between a start station and a goal golf course. \
                 Locations are looked up by identifier in the station and \
                 golf course CSV datasets. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Optimize a trip through via stations to a golf course"
)]
#[ortho_config(prefix = "GOLF_ROUTER")]
pub(crate) struct RouteArgs {
    /// Path to the station CSV dataset.
    #[arg(long = ARG_STATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) stations: Option<Utf8PathBuf>,
    /// Path to the golf course CSV dataset.
    #[arg(long = ARG_GOLF_COURSES, value_name = "path")]
    #[serde(default)]
    pub(crate) golf_courses: Option<Utf8PathBuf>,
    /// Station code of the trip start.
    #[arg(long = ARG_START, value_name = "station-code")]
    #[serde(default)]
    pub(crate) start: Option<u64>,
    /// Station codes to visit, comma separated or repeated.
    #[arg(long = ARG_VIA, value_name = "station-code", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) via: Option<Vec<u64>>,
    /// Sample this many via stations at random instead of naming them.
    #[arg(long = ARG_RANDOM_VIAS, value_name = "count")]
    #[serde(default)]
    pub(crate) random_vias: Option<usize>,
    /// Seed for random via sampling.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Identifier of the goal golf course.
    #[arg(long = ARG_GOAL, value_name = "course-id")]
    #[serde(default)]
    pub(crate) goal: Option<u64>,
    /// Cost model used to order the vias.
    #[arg(long = ARG_COST_MODEL, value_enum)]
    #[serde(default)]
    pub(crate) cost_model: Option<CostModel>,
    /// Largest via count accepted by the distance model.
    #[arg(long = ARG_MAX_VIAS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_vias: Option<usize>,
    /// Travel mode for the travel-time model.
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<TravelMode>,
    /// Google Maps API key for the travel-time model.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Extra Directions API parameter as key=value (repeatable).
    #[arg(long = ARG_OPTION, value_name = "key=value")]
    #[serde(default)]
    pub(crate) option: Option<Vec<String>>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// How via stations are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViaSelection {
    /// Look up each station code.
    Explicit(Vec<u64>),
    /// Sample `count` distinct stations, reproducibly when seeded.
    Random {
        /// Sample size.
        count: usize,
        /// Optional RNG seed.
        seed: Option<u64>,
    },
}

/// Resolved `route` command configuration.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    /// Station dataset path.
    pub(crate) stations: Utf8PathBuf,
    /// Golf course dataset path.
    pub(crate) golf_courses: Utf8PathBuf,
    /// Start station code.
    pub(crate) start: u64,
    /// Via station selection.
    pub(crate) vias: ViaSelection,
    /// Goal golf course identifier.
    pub(crate) goal: u64,
    /// Selected cost model.
    pub(crate) cost_model: CostModel,
    /// Via limit for the distance model.
    pub(crate) max_vias: usize,
    /// Mode and pass-through options for the travel-time model.
    pub(crate) options: DirectionsOptions,
    /// API key for the travel-time model.
    pub(crate) api_key: Option<String>,
}

impl std::fmt::Debug for RouteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteConfig")
            .field("stations", &self.stations)
            .field("golf_courses", &self.golf_courses)
            .field("start", &self.start)
            .field("vias", &self.vias)
            .field("goal", &self.goal)
            .field("cost_model", &self.cost_model)
            .field("max_vias", &self.max_vias)
            .field("options", &self.options)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.stations, ARG_STATIONS)?;
        Self::require_existing(&self.golf_courses, ARG_GOLF_COURSES)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match golf_router_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let start = args.start.ok_or(CliError::MissingArgument {
            field: ARG_START,
            env: ENV_START,
        })?;
        let goal = args.goal.ok_or(CliError::MissingArgument {
            field: ARG_GOAL,
            env: ENV_GOAL,
        })?;

        let vias = match (args.via, args.random_vias) {
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_VIA,
                    second: ARG_RANDOM_VIAS,
                });
            }
            (Some(ids), None) => ViaSelection::Explicit(ids),
            (None, count) => ViaSelection::Random {
                count: count.unwrap_or(DEFAULT_RANDOM_VIAS),
                seed: args.seed,
            },
        };

        let cost_model = args.cost_model.unwrap_or_default();
        if cost_model == CostModel::TravelTime && args.api_key.is_none() {
            return Err(CliError::MissingArgument {
                field: ARG_API_KEY,
                env: ENV_API_KEY,
            });
        }

        let options = parse_options(args.option.unwrap_or_default())?
            .into_iter()
            .fold(
                DirectionsOptions::default().with_mode(args.mode.unwrap_or_default()),
                |options, (key, value)| options.with_option(key, value),
            );

        Ok(Self {
            stations: args
                .stations
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STATIONS_CSV)),
            golf_courses: args
                .golf_courses
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_GOLF_COURSES_CSV)),
            start,
            vias,
            goal,
            cost_model,
            max_vias: args.max_vias.unwrap_or(DEFAULT_MAX_VIAS),
            options,
            api_key: args.api_key,
        })
    }
}

/// Split `key=value` pairs. Values may contain `=`; keys may not be empty.
fn parse_options(raw: Vec<String>) -> Result<Vec<(String, String)>, CliError> {
    raw.into_iter()
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_owned(), value.to_owned()))
            }
            _ => Err(CliError::InvalidOption { value: entry }),
        })
        .collect()
}

/// Builds the optimizer for the current route invocation.
pub(crate) trait OptimizerBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RouteOptimizer>, CliError>;
}

pub(crate) struct DefaultOptimizerBuilder;

impl OptimizerBuilder for DefaultOptimizerBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RouteOptimizer>, CliError> {
        match config.cost_model {
            CostModel::Distance => Ok(Box::new(ExhaustiveOptimizer::new(config.max_vias))),
            CostModel::TravelTime => {
                let api_key = config.api_key.clone().ok_or(CliError::MissingArgument {
                    field: ARG_API_KEY,
                    env: ENV_API_KEY,
                })?;
                let provider = GoogleDirectionsProvider::new(api_key)
                    .map_err(CliError::BuildDirectionsProvider)?;
                Ok(Box::new(DirectionsOptimizer::new(
                    provider,
                    config.options.clone(),
                )))
            }
        }
    }
}

pub(crate) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultOptimizerBuilder;
    run_route_with(args, &builder, &mut stdout)
}

pub(crate) fn run_route_with(
    args: RouteArgs,
    builder: &dyn OptimizerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let optimized = execute_route(args, builder)?;
    crate::write_json(writer, &optimized)
}

fn execute_route(
    args: RouteArgs,
    builder: &dyn OptimizerBuilder,
) -> Result<OptimizedRoute, CliError> {
    let config = resolve_route_config(args)?;
    let stations = CsvLocationRepository::open(&config.stations, CsvSchema::STATIONS)?;
    let courses = CsvLocationRepository::open(&config.golf_courses, CsvSchema::GOLF_COURSES)?;

    let start = stations.read_by_id(config.start)?;
    let vias = select_vias(&stations, &config.vias)?;
    let goal = courses.read_by_id(config.goal)?;
    log::info!(
        "routing from {start} through {} vias to {goal} by {:?}",
        vias.len(),
        config.cost_model
    );

    let optimizer = builder.build(&config)?;
    Ok(optimizer.optimize(&start, &vias, &goal)?)
}

fn resolve_route_config(args: RouteArgs) -> Result<RouteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn select_vias(
    stations: &dyn LocationRepository,
    selection: &ViaSelection,
) -> Result<Vec<Location>, CliError> {
    match selection {
        ViaSelection::Explicit(ids) => ids
            .iter()
            .map(|&id| stations.read_by_id(id).map_err(CliError::from))
            .collect(),
        ViaSelection::Random { count, seed } => {
            let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
            Ok(stations.read_random_sample(*count, &mut rng)?)
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
