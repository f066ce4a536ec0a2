//! Scenario input
//!
//! Data model of the mission and totals files, and the loader that finds,
//! reads and validates them.

pub mod loader;
pub mod model;

pub use loader::{load_scenario, InputKind, LoadError, LoadedScenario, ScenarioFiles};
pub use model::{
    CumulativeField, CumulativeMetrics, CycleProcesses, CycleRecord, MetricValue, ProcessKey,
    ProcessMetrics, ScenarioId,
};
