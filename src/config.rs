//! Report configuration
//!
//! Optional `report.toml` selecting the scenario and where its files live.
//! Every field has a default, so an empty file (or no file) is valid.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::scenario::loader::{
    ScenarioFiles, MISSION_TEMPLATE, SCENARIO_PLACEHOLDER, TOTALS_TEMPLATE,
};
use crate::scenario::model::ScenarioId;

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "report.toml";

const fn default_scenario() -> u32 {
    3
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_mission_template() -> String {
    MISSION_TEMPLATE.to_string()
}

fn default_totals_template() -> String {
    TOTALS_TEMPLATE.to_string()
}

const fn default_color() -> bool {
    true
}

/// Settings for one report run
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Scenario to report on (default: 3)
    #[serde(default = "default_scenario")]
    pub scenario: u32,
    /// Directory holding the scenario files (default: `.`)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// File name template of the mission file
    #[serde(default = "default_mission_template")]
    pub mission_template: String,
    /// File name template of the totals file
    #[serde(default = "default_totals_template")]
    pub totals_template: String,
    /// Colored console output (default: true)
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            scenario: default_scenario(),
            data_dir: default_data_dir(),
            mission_template: default_mission_template(),
            totals_template: default_totals_template(),
            color: default_color(),
        }
    }
}

impl ReportConfig {
    /// Parse a configuration file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load `path` if given, otherwise `report.toml` when it exists, otherwise defaults.
    ///
    /// An explicitly requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_path(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse configuration content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse report config")?;
        config.validate()?;
        Ok(config)
    }

    /// Scenario selected by this configuration.
    #[must_use]
    pub const fn scenario_id(&self) -> ScenarioId {
        ScenarioId(self.scenario)
    }

    /// Resolve the two input files of the configured scenario.
    #[must_use]
    pub fn files(&self) -> ScenarioFiles {
        ScenarioFiles::from_templates(
            &self.data_dir,
            self.scenario_id(),
            &self.mission_template,
            &self.totals_template,
        )
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        for (name, template) in [
            ("mission_template", &self.mission_template),
            ("totals_template", &self.totals_template),
        ] {
            if template.trim().is_empty() {
                bail!("'{name}' cannot be empty");
            }
            if !template.contains(SCENARIO_PLACEHOLDER) {
                bail!(
                    "'{name}' must contain the {SCENARIO_PLACEHOLDER} placeholder: '{template}'"
                );
            }
        }

        if self.mission_template == self.totals_template {
            bail!("'mission_template' and 'totals_template' must differ");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.scenario, 3);
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.mission_template, "metricas_mision_{scenario}.json");
        assert_eq!(config.totals_template, "metricas_total_{scenario}.json");
        assert!(config.color);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = ReportConfig::parse("").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = ReportConfig::parse(
            r#"
scenario = 5
data_dir = "runs/latest"
"#,
        )
        .unwrap();

        assert_eq!(config.scenario, 5);
        assert_eq!(config.data_dir, PathBuf::from("runs/latest"));
        assert_eq!(config.mission_template, MISSION_TEMPLATE);
    }

    #[test]
    fn test_files_follow_templates() {
        let config = ReportConfig::parse(
            r#"
scenario = 2
data_dir = "out"
mission_template = "mission-{scenario}.json"
totals_template = "totals-{scenario}.json"
"#,
        )
        .unwrap();

        let files = config.files();
        assert_eq!(files.scenario, ScenarioId(2));
        assert_eq!(files.mission, PathBuf::from("out/mission-2.json"));
        assert_eq!(files.totals, PathBuf::from("out/totals-2.json"));
    }

    #[test]
    fn test_template_without_placeholder_rejected() {
        let result = ReportConfig::parse(r#"mission_template = "mission.json""#);
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("mission_template"), "got: {err}");
    }

    #[test]
    fn test_empty_template_rejected() {
        let result = ReportConfig::parse(r#"totals_template = "  ""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_identical_templates_rejected() {
        let result = ReportConfig::parse(
            r#"
mission_template = "m_{scenario}.json"
totals_template = "m_{scenario}.json"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = ReportConfig::parse("scenaro = 4");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_scenario_rejected() {
        let result = ReportConfig::parse("scenario = -1");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.toml");
        std::fs::write(&path, "scenario = 8\ncolor = false\n").unwrap();

        let config = ReportConfig::from_path(&path).unwrap();
        assert_eq!(config.scenario, 8);
        assert!(!config.color);
    }

    #[test]
    fn test_load_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(ReportConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_from_path_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.toml");
        std::fs::write(&path, "this is not valid toml {{{{").unwrap();

        assert!(ReportConfig::from_path(&path).is_err());
    }
}
