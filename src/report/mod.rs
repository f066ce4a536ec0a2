//! Report generation
//!
//! Row building, value formatting and table rendering for a loaded scenario.

pub mod format;
pub mod render;
pub mod rows;

pub use render::{render_report, CumulativeRow, DetailRow};
pub use rows::{build_cycle_rows, DisplayRow};
