//! CLI output
//!
//! Human-readable, colored status lines for the load phase and the run that
//! ties loading and rendering together.

pub mod display;
pub mod run;

pub use run::{run_report, RunOutcome};
