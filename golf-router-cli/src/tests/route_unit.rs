//! Focused unit tests covering route CLI configuration and via selection.

use super::helpers::Datasets;
use super::*;
use crate::route::{
    CostModel, DEFAULT_RANDOM_VIAS, DefaultOptimizerBuilder, OptimizerBuilder, RouteArgs,
    RouteConfig, ViaSelection, config_from_layers_for_test, select_vias,
};
use camino::Utf8PathBuf;
use golf_router_core::{
    DEFAULT_MAX_VIAS, DirectionsOptions, Location, LocationKind, OptimizeError, RepositoryError,
    TravelMode,
};
use golf_router_data::repository::{CsvLocationRepository, CsvSchema};
use rstest::rstest;

fn minimal_args() -> RouteArgs {
    RouteArgs {
        start: Some(1_130_101),
        goal: Some(42),
        ..RouteArgs::default()
    }
}

fn config_for(datasets: &Datasets) -> RouteConfig {
    RouteConfig {
        stations: datasets.stations(),
        golf_courses: datasets.golf_courses(),
        start: 1_130_101,
        vias: ViaSelection::Explicit(vec![1_141_101]),
        goal: 42,
        cost_model: CostModel::Distance,
        max_vias: DEFAULT_MAX_VIAS,
        options: DirectionsOptions::default(),
        api_key: None,
    }
}

#[rstest]
#[case::missing_start(RouteArgs { goal: Some(42), ..RouteArgs::default() }, ARG_START, ENV_START)]
#[case::missing_goal(RouteArgs { start: Some(1), ..RouteArgs::default() }, ARG_GOAL, ENV_GOAL)]
#[case::travel_time_without_key(
    RouteArgs { cost_model: Some(CostModel::TravelTime), ..minimal_args() },
    ARG_API_KEY,
    ENV_API_KEY
)]
fn converting_without_required_fields_errors(
    #[case] args: RouteArgs,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let err = RouteConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn defaults_fill_unset_options() {
    let config = RouteConfig::try_from(minimal_args()).expect("config should build");

    assert_eq!(config.stations, Utf8PathBuf::from(DEFAULT_STATIONS_CSV));
    assert_eq!(config.golf_courses, Utf8PathBuf::from(DEFAULT_GOLF_COURSES_CSV));
    assert_eq!(
        config.vias,
        ViaSelection::Random {
            count: DEFAULT_RANDOM_VIAS,
            seed: None
        }
    );
    assert_eq!(config.cost_model, CostModel::Distance);
    assert_eq!(config.max_vias, DEFAULT_MAX_VIAS);
    assert_eq!(config.options, DirectionsOptions::default());
}

#[rstest]
fn explicit_vias_are_kept_in_order() {
    let args = RouteArgs {
        via: Some(vec![1_160_214, 1_141_101]),
        ..minimal_args()
    };
    let config = RouteConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.vias,
        ViaSelection::Explicit(vec![1_160_214, 1_141_101])
    );
}

#[rstest]
fn explicit_and_random_vias_conflict() {
    let args = RouteArgs {
        via: Some(vec![1_141_101]),
        random_vias: Some(2),
        ..minimal_args()
    };
    let err = RouteConfig::try_from(args).expect_err("conflict should error");
    match err {
        CliError::ConflictingArguments { first, second } => {
            assert_eq!(first, ARG_VIA);
            assert_eq!(second, ARG_RANDOM_VIAS);
        }
        other => panic!("expected ConflictingArguments, found {other:?}"),
    }
}

#[rstest]
fn travel_time_options_are_collected() {
    let args = RouteArgs {
        cost_model: Some(CostModel::TravelTime),
        api_key: Some("test-key".to_owned()),
        mode: Some(TravelMode::Transit),
        option: Some(vec![
            "avoid=tolls".to_owned(),
            "departure_time=now".to_owned(),
            "transit_routing_preference=fewer_transfers".to_owned(),
        ]),
        ..minimal_args()
    };

    let config = RouteConfig::try_from(args).expect("config should build");

    let expected = DirectionsOptions::default()
        .with_mode(TravelMode::Transit)
        .with_option("avoid", "tolls")
        .with_option("departure_time", "now")
        .with_option("transit_routing_preference", "fewer_transfers");
    assert_eq!(config.options, expected);
    assert_eq!(config.api_key.as_deref(), Some("test-key"));
}

#[rstest]
#[case("avoid")]
#[case("=tolls")]
#[case(" =tolls")]
fn malformed_options_are_rejected(#[case] raw: &str) {
    let args = RouteArgs {
        option: Some(vec![raw.to_owned()]),
        ..minimal_args()
    };
    let err = RouteConfig::try_from(args).expect_err("malformed option should error");
    match err {
        CliError::InvalidOption { value } => assert_eq!(value, raw),
        other => panic!("expected InvalidOption, found {other:?}"),
    }
}

#[rstest]
fn option_values_may_contain_equals_signs() {
    let args = RouteArgs {
        option: Some(vec!["region=jp=x".to_owned()]),
        ..minimal_args()
    };
    let config = RouteConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.options.extra.get("region").map(String::as_str),
        Some("jp=x")
    );
}

#[rstest]
fn debug_output_redacts_the_api_key() {
    let args = RouteArgs {
        cost_model: Some(CostModel::TravelTime),
        api_key: Some("very-secret".to_owned()),
        ..minimal_args()
    };
    let config = RouteConfig::try_from(args).expect("config should build");
    assert!(!format!("{config:?}").contains("very-secret"));
}

#[rstest]
fn validate_sources_reports_missing_datasets() {
    let datasets = Datasets::new();
    let config = RouteConfig {
        golf_courses: datasets.root().join("absent.csv"),
        ..config_for(&datasets)
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_GOLF_COURSES),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let datasets = Datasets::new();
    let config = RouteConfig {
        stations: datasets.root().to_path_buf(),
        ..config_for(&datasets)
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_STATIONS);
            assert_eq!(path, datasets.root().to_path_buf());
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn explicit_selection_looks_up_each_station() {
    let datasets = Datasets::new();
    let stations =
        CsvLocationRepository::open(&datasets.stations(), CsvSchema::STATIONS).expect("stations");

    let vias = select_vias(
        &stations,
        &ViaSelection::Explicit(vec![1_160_214, 1_141_101]),
    )
    .expect("vias");

    let names: Vec<_> = vias.iter().map(Location::name).collect();
    assert_eq!(names, vec!["Shin-Osaka", "Nagoya"]);
}

#[rstest]
fn explicit_selection_reports_unknown_station() {
    let datasets = Datasets::new();
    let stations =
        CsvLocationRepository::open(&datasets.stations(), CsvSchema::STATIONS).expect("stations");

    let err = select_vias(&stations, &ViaSelection::Explicit(vec![7])).expect_err("unknown");
    match err {
        CliError::Lookup(RepositoryError::NotFound { kind, id }) => {
            assert_eq!(kind, LocationKind::Station);
            assert_eq!(id, 7);
        }
        other => panic!("expected Lookup, found {other:?}"),
    }
}

#[rstest]
fn seeded_random_selection_is_reproducible() {
    let datasets = Datasets::new();
    let stations =
        CsvLocationRepository::open(&datasets.stations(), CsvSchema::STATIONS).expect("stations");
    let selection = ViaSelection::Random {
        count: 2,
        seed: Some(7),
    };

    let first = select_vias(&stations, &selection).expect("sample");
    let second = select_vias(&stations, &selection).expect("sample");

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[rstest]
fn oversized_random_selection_is_rejected() {
    let datasets = Datasets::new();
    let stations =
        CsvLocationRepository::open(&datasets.stations(), CsvSchema::STATIONS).expect("stations");
    let selection = ViaSelection::Random {
        count: 5,
        seed: Some(1),
    };

    let err = select_vias(&stations, &selection).expect_err("too many");
    assert!(matches!(
        err,
        CliError::Lookup(RepositoryError::SampleTooLarge {
            requested: 5,
            available: 4,
            ..
        })
    ));
}

#[rstest]
fn default_builder_honours_max_vias() {
    let datasets = Datasets::new();
    let config = RouteConfig {
        max_vias: 1,
        ..config_for(&datasets)
    };
    let optimizer = DefaultOptimizerBuilder.build(&config).expect("optimizer");
    let stations =
        CsvLocationRepository::open(&datasets.stations(), CsvSchema::STATIONS).expect("stations");
    let vias = select_vias(
        &stations,
        &ViaSelection::Explicit(vec![1_141_101, 1_160_214]),
    )
    .expect("vias");
    let start = vias[0].clone();
    let goal = vias[1].clone();

    let err = optimizer
        .optimize(&start, &vias, &goal)
        .expect_err("too many vias");
    assert_eq!(err, OptimizeError::TooManyVias { count: 2, max: 1 });
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "start": "not-a-number" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "start": 1,
            "goal": 1,
            "cost_model": "travel-time",
            "api_key": "from-file",
        }),
        None,
    );
    composer.push_environment(json!({
        "goal": 42,
        "api_key": "from-env",
    }));
    composer.push_cli(json!({
        "start": 1_130_101,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.start, 1_130_101);
    assert_eq!(config.goal, 42);
    assert_eq!(config.cost_model, CostModel::TravelTime);
    assert_eq!(config.api_key.as_deref(), Some("from-env"));
}
