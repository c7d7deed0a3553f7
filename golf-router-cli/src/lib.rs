//! Command-line interface for planning a golf trip by rail.
//!
//! `golf-router route` picks a start station, a set of via stations and a
//! goal golf course from CSV datasets and prints the optimized visiting order
//! as JSON. `golf-router list` prints a dataset.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{ArgAction, Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use serde::Serialize;

mod error;
mod list;
mod route;

pub use error::CliError;

use list::ListArgs;
use route::RouteArgs;

pub(crate) const ARG_STATIONS: &str = "stations";
pub(crate) const ARG_GOLF_COURSES: &str = "golf-courses";
pub(crate) const ARG_START: &str = "start";
pub(crate) const ARG_VIA: &str = "via";
pub(crate) const ARG_RANDOM_VIAS: &str = "random-vias";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_GOAL: &str = "goal";
pub(crate) const ARG_COST_MODEL: &str = "cost-model";
pub(crate) const ARG_MAX_VIAS: &str = "max-vias";
pub(crate) const ARG_MODE: &str = "mode";
pub(crate) const ARG_API_KEY: &str = "api-key";
pub(crate) const ARG_OPTION: &str = "option";
pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_PATH: &str = "path";

pub(crate) const ENV_START: &str = "GOLF_ROUTER_CMDS_ROUTE_START";
pub(crate) const ENV_GOAL: &str = "GOLF_ROUTER_CMDS_ROUTE_GOAL";
pub(crate) const ENV_API_KEY: &str = "GOLF_ROUTER_CMDS_ROUTE_API_KEY";

/// Default station dataset, relative to the working directory.
pub(crate) const DEFAULT_STATIONS_CSV: &str = "stations.csv";
/// Default golf course dataset, relative to the working directory.
pub(crate) const DEFAULT_GOLF_COURSES_CSV: &str = "golf_courses.csv";

/// Run the golf-router CLI with the current process arguments and
/// environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration layering,
/// dataset loading, optimization or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logger(cli.verbose);
    match cli.command {
        Command::Route(args) => route::run_route(args),
        Command::List(args) => list::run_list(args),
    }
}

/// Install `env_logger` on stderr.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the level from
/// `warn`.
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr);
    if let Err(err) = builder.try_init() {
        log::debug!("logger already initialised: {err}");
    }
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "golf-router",
    about = "Plan the visiting order of a rail trip ending at a golf course",
    version
)]
struct Cli {
    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Optimize a trip from a start station through via stations to a golf
    /// course.
    Route(RouteArgs),
    /// Print every record of a location dataset.
    List(ListArgs),
}

#[cfg(test)]
mod tests;
