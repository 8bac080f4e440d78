//! Tests for argument handling and the summary table.

use clap::Parser;

use fs_core::{FsError, RoutingPolicy, StationConfig, Tick};
use fs_sim::run_multiple_simulations;

use crate::cli::Cli;
use crate::summary_table;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("fuelsim").chain(args.iter().copied())).unwrap()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn no_flags_is_the_reference_station() {
        let cli = parse(&[]);
        assert_eq!(cli.runs, 100);
        assert_eq!(cli.station_config().unwrap(), StationConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let cli = parse(&["--scenario", "single-pump", "--seed", "9", "--duration", "30", "--mistake-chance", "0.25"]);
        let config = cli.station_config().unwrap();
        assert_eq!(config.dispensers.len(), 1);
        assert_eq!(config.seed, 9);
        assert_eq!(config.last_tick(), Tick(30));
        assert_eq!(config.routing, RoutingPolicy::MistakeAware { probability: 0.25 });
    }

    #[test]
    fn strict_flag() {
        let config = parse(&["--strict"]).station_config().unwrap();
        assert_eq!(config.routing, RoutingPolicy::Strict);
    }

    #[test]
    fn strict_conflicts_with_mistake_chance() {
        let args = ["fuelsim", "--strict", "--mistake-chance", "0.5"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn unknown_scenario_is_rejected() {
        let err = parse(&["--scenario", "hyperloop"]).station_config().unwrap_err();
        assert!(matches!(err.downcast_ref::<FsError>(), Some(FsError::UnknownScenario(name)) if name == "hyperloop"));
    }

    #[test]
    fn out_of_range_mistake_chance_is_rejected() {
        let err = parse(&["--mistake-chance", "2"]).station_config().unwrap_err();
        assert!(matches!(err.downcast_ref::<FsError>(), Some(FsError::MistakeProbability(_))));
    }

    #[test]
    fn config_file_is_the_base() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("station.json");
        std::fs::write(&path, r#"{"simulation_duration": 12, "seed": 5}"#).unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--seed", "6"]);
        let config = cli.station_config().unwrap();
        assert_eq!(config.simulation_duration, 12);
        assert_eq!(config.seed, 6);
    }
}

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn one_line_per_run_plus_mean() {
        let (_, stats) = run_multiple_simulations(3, &StationConfig::default()).unwrap();
        let table = summary_table(&stats);
        let lines: Vec<&str> = table.lines().collect();
        // header, rule, 3 runs, rule, mean
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Run"));
        assert!(lines[6].starts_with("mean"));
    }

    #[test]
    fn single_run_has_no_mean_row() {
        let (_, stats) = run_multiple_simulations(1, &StationConfig::default()).unwrap();
        assert_eq!(summary_table(&stats).lines().count(), 3);
    }
}
