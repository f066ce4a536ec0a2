//! Scenario file loader
//!
//! Resolves the mission and totals files of a scenario, reads them and parses
//! them into the typed model. Loading is all-or-nothing: the mission file is
//! handled first, and a read or parse problem aborts the load before the
//! totals file is touched.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde_json::Value;
use thiserror::Error;

use crate::scenario::model::{CumulativeMetrics, CycleRecord, ScenarioId};

/// Default file name template of the per-cycle mission metrics.
pub const MISSION_TEMPLATE: &str = "metricas_mision_{scenario}.json";

/// Default file name template of the cumulative totals.
pub const TOTALS_TEMPLATE: &str = "metricas_total_{scenario}.json";

/// Placeholder replaced by the scenario number in file name templates.
pub const SCENARIO_PLACEHOLDER: &str = "{scenario}";

/// Which of the two scenario files an event or error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Per-cycle mission metrics
    Mission,
    /// Cumulative totals
    Totals,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mission => f.write_str("mission"),
            Self::Totals => f.write_str("totals"),
        }
    }
}

/// Replace every `{scenario}` in `template` with the scenario number.
#[must_use]
pub fn interpolate(template: &str, scenario: ScenarioId) -> String {
    template.replace(SCENARIO_PLACEHOLDER, &scenario.to_string())
}

/// Paths of the two input files of a scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioFiles {
    /// Scenario the files belong to
    pub scenario: ScenarioId,
    /// Per-cycle mission metrics
    pub mission: PathBuf,
    /// Cumulative totals
    pub totals: PathBuf,
}

impl ScenarioFiles {
    /// Resolve the files of `scenario` inside `dir` using the default templates.
    #[must_use]
    pub fn new(dir: &Path, scenario: ScenarioId) -> Self {
        Self::from_templates(dir, scenario, MISSION_TEMPLATE, TOTALS_TEMPLATE)
    }

    /// Resolve the files of `scenario` inside `dir` using custom templates.
    ///
    /// When `dir` is the current directory the bare file names are kept, so
    /// notices show `metricas_mision_3.json` rather than `./metricas_mision_3.json`.
    #[must_use]
    pub fn from_templates(
        dir: &Path,
        scenario: ScenarioId,
        mission_template: &str,
        totals_template: &str,
    ) -> Self {
        let resolve = |template: &str| {
            let name = interpolate(template, scenario);
            if dir.as_os_str().is_empty() || dir == Path::new(".") {
                PathBuf::from(name)
            } else {
                dir.join(name)
            }
        };

        Self {
            scenario,
            mission: resolve(mission_template),
            totals: resolve(totals_template),
        }
    }
}

/// Why a scenario could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist
    #[error("{kind} file '{}' not found", path.display())]
    FileNotFound {
        /// Which input
        kind: InputKind,
        /// Expected location
        path: PathBuf,
    },
    /// The file exists but could not be read
    #[error("failed to read {kind} file '{}': {source}", path.display())]
    Read {
        /// Which input
        kind: InputKind,
        /// File location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// The file is not valid JSON (including invalid UTF-8)
    #[error("{kind} file '{}' is not valid JSON: {source}", path.display())]
    InvalidFormat {
        /// Which input
        kind: InputKind,
        /// File location
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },
    /// The file is valid JSON but not shaped as expected
    #[error(
        "{kind} file '{}' does not have the expected structure: {source}",
        path.display()
    )]
    Schema {
        /// Which input
        kind: InputKind,
        /// File location
        path: PathBuf,
        /// What did not match
        #[source]
        source: serde_json::Error,
    },
    /// The mission file holds no cycles
    #[error("mission file '{}' contains no cycles", path.display())]
    NoCycles {
        /// File location
        path: PathBuf,
    },
}

impl LoadError {
    /// Path of the offending file.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::FileNotFound { path, .. }
            | Self::Read { path, .. }
            | Self::InvalidFormat { path, .. }
            | Self::Schema { path, .. }
            | Self::NoCycles { path } => path,
        }
    }
}

/// Everything needed to render a scenario report
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedScenario {
    /// Scenario the data belongs to
    pub scenario: ScenarioId,
    /// Per-cycle records, in file order
    pub cycles: Vec<CycleRecord>,
    /// Cumulative totals
    pub totals: CumulativeMetrics,
}

/// Load both files of a scenario.
///
/// `on_loaded` is called after each file has been read and parsed, before the
/// next one is opened, so callers can report progress file by file. A mission
/// file without cycles is only rejected once both files have been loaded.
pub fn load_scenario<F>(
    files: &ScenarioFiles,
    mut on_loaded: F,
) -> Result<LoadedScenario, LoadError>
where
    F: FnMut(InputKind, &Path),
{
    let cycles = load_mission(&files.mission)?;
    on_loaded(InputKind::Mission, &files.mission);

    let totals = load_totals(&files.totals)?;
    on_loaded(InputKind::Totals, &files.totals);

    if cycles.is_empty() {
        return Err(LoadError::NoCycles {
            path: files.mission.clone(),
        });
    }

    Ok(LoadedScenario {
        scenario: files.scenario,
        cycles,
        totals,
    })
}

/// Read and parse the per-cycle mission file.
///
/// An empty array is accepted here; [`load_scenario`] decides what to do with it.
pub fn load_mission(path: &Path) -> Result<Vec<CycleRecord>, LoadError> {
    let value = read_json(InputKind::Mission, path)?;
    serde_json::from_value(value).map_err(|source| LoadError::Schema {
        kind: InputKind::Mission,
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the cumulative totals file.
pub fn load_totals(path: &Path) -> Result<CumulativeMetrics, LoadError> {
    let value = read_json(InputKind::Totals, path)?;
    let schema_error = |source| LoadError::Schema {
        kind: InputKind::Totals,
        path: path.to_path_buf(),
        source,
    };

    // A derived struct would also accept a positional array
    if !value.is_object() {
        return Err(schema_error(serde_json::Error::custom(
            "expected a JSON object with the cumulative metrics",
        )));
    }

    serde_json::from_value(value).map_err(schema_error)
}

fn read_json(kind: InputKind, path: &Path) -> Result<Value, LoadError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::FileNotFound {
                kind,
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                kind,
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|source| LoadError::InvalidFormat {
        kind,
        path: path.to_path_buf(),
        source,
    })
}
