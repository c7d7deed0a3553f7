//! List command implementation for the golf-router CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use golf_router_core::LocationRepository;
use golf_router_data::repository::{CsvLocationRepository, CsvSchema};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATASET, ARG_PATH, CliError, DEFAULT_GOLF_COURSES_CSV, DEFAULT_STATIONS_CSV};

const ENV_DATASET: &str = "GOLF_ROUTER_CMDS_LIST_DATASET";

/// Location datasets known to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Dataset {
    /// Railway stations.
    Stations,
    /// Golf courses.
    GolfCourses,
}

impl Dataset {
    const fn schema(self) -> CsvSchema {
        match self {
            Self::Stations => CsvSchema::STATIONS,
            Self::GolfCourses => CsvSchema::GOLF_COURSES,
        }
    }

    const fn default_path(self) -> &'static str {
        match self {
            Self::Stations => DEFAULT_STATIONS_CSV,
            Self::GolfCourses => DEFAULT_GOLF_COURSES_CSV,
        }
    }
}

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Print every record of a location dataset as JSON")]
#[ortho_config(prefix = "GOLF_ROUTER")]
pub(crate) struct ListArgs {
    /// Dataset to print.
    #[arg(value_enum, value_name = ARG_DATASET)]
    #[serde(default)]
    pub(crate) dataset: Option<Dataset>,
    /// Override the dataset path.
    #[arg(long = ARG_PATH, value_name = "path")]
    #[serde(default)]
    pub(crate) path: Option<Utf8PathBuf>,
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let mut stdout = std::io::stdout().lock();
    list_with(merged, &mut stdout)
}

pub(crate) fn list_with(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let dataset = args.dataset.ok_or(CliError::MissingArgument {
        field: ARG_DATASET,
        env: ENV_DATASET,
    })?;
    let path = args
        .path
        .unwrap_or_else(|| Utf8PathBuf::from(dataset.default_path()));
    let repository = CsvLocationRepository::open(&path, dataset.schema())?;
    crate::write_json(writer, &repository.read_all())
}
