//! Mission report - scenario metrics tables
//!
//! Reads the per-cycle and cumulative metrics files of a simulated mission
//! scenario and renders them as console tables. The pipeline is linear:
//! load → build rows → format → print.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use cli::{run_report, RunOutcome};
pub use config::ReportConfig;
pub use report::{build_cycle_rows, render_report, DisplayRow};
pub use scenario::{
    load_scenario, CumulativeMetrics, CycleRecord, InputKind, LoadError, LoadedScenario,
    ScenarioFiles, ScenarioId,
};
