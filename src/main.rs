//! Mission report
//!
//! CLI entry point: loads one scenario and prints its report tables.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mission_report::cli::{run_report, RunOutcome};
use mission_report::config::ReportConfig;

/// Scenario metrics report
///
/// Reads `metricas_mision_<N>.json` and `metricas_total_<N>.json` for a
/// scenario and prints the cumulative and per-cycle tables.
#[derive(Parser, Debug)]
#[command(name = "mission-report", version, about)]
struct Cli {
    /// Scenario number to analyze (overrides the config file)
    #[arg(long)]
    scenario: Option<u32>,

    /// Path to a report.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing the scenario files (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(mut config: ReportConfig, cli: &Cli) -> ReportConfig {
    if let Some(scenario) = cli.scenario {
        config.scenario = scenario;
    }
    if let Some(ref dir) = cli.data_dir {
        config.data_dir.clone_from(dir);
    }
    if cli.no_color {
        config.color = false;
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ReportConfig::load(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load config from '{}'",
            cli.config
                .as_deref()
                .map_or_else(|| "report.toml".into(), |p| p.display().to_string())
        )
    })?;
    let config = apply_overrides(config, &cli);

    if !config.color {
        colored::control::set_override(false);
    }

    let mut out = io::stdout().lock();
    let outcome = run_report(&mut out, &config.files()).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    if outcome == RunOutcome::Aborted {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mission-report").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let config = apply_overrides(ReportConfig::default(), &parse(&[]));
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_scenario_flag_overrides_config() {
        let cli = parse(&["--scenario", "7"]);
        let config = apply_overrides(ReportConfig::default(), &cli);

        assert_eq!(config.scenario, 7);
        assert_eq!(
            config.files().mission,
            PathBuf::from("metricas_mision_7.json")
        );
    }

    #[test]
    fn test_data_dir_and_color_flags() {
        let cli = parse(&["--data-dir", "runs", "--no-color"]);
        let config = apply_overrides(ReportConfig::default(), &cli);

        assert_eq!(config.data_dir, PathBuf::from("runs"));
        assert!(!config.color);
        assert_eq!(
            config.files().totals,
            PathBuf::from("runs/metricas_total_3.json")
        );
    }

    #[test]
    fn test_invalid_scenario_flag_rejected() {
        let result = Cli::try_parse_from(["mission-report", "--scenario", "abc"]);
        assert!(result.is_err());
    }
}
