//! Cycle table builder
//!
//! Flattens the nested cycle/process records into one row per
//! (cycle, process) pair.

use crate::report::format::context_switches;
use crate::scenario::model::{CycleRecord, ProcessKey};

/// One (cycle, process) row of the detailed table, before column formatting
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Cycle index
    pub cycle: u32,
    /// Which process this row describes
    pub process: ProcessKey,
    /// Cycle wall time, repeated on each process row of the cycle
    pub wall_time_secs: f64,
    /// Cycle kernel dead time, repeated on each process row of the cycle
    pub kernel_dead_time_secs: f64,
    /// Effective CPU time of the process
    pub effective_cpu_secs: f64,
    /// Paused time of the process
    pub paused_secs: f64,
    /// Number of pauses of the process
    pub pause_count: u64,
    /// `voluntary/involuntary` context switches
    pub context_switches: String,
    /// Peak memory of the process in KB
    pub peak_memory_kb: u64,
}

/// Build the detailed rows: cycles in input order, then P1, P2, P3 within each.
#[must_use]
pub fn build_cycle_rows(cycles: &[CycleRecord]) -> Vec<DisplayRow> {
    let mut rows = Vec::with_capacity(cycles.len() * ProcessKey::ALL.len());

    for record in cycles {
        for (process, metrics) in record.processes.iter() {
            rows.push(DisplayRow {
                cycle: record.cycle,
                process,
                wall_time_secs: record.wall_time_secs,
                kernel_dead_time_secs: record.kernel_dead_time_secs,
                effective_cpu_secs: metrics.effective_cpu_secs,
                paused_secs: metrics.paused_secs,
                pause_count: metrics.pause_count,
                context_switches: context_switches(
                    metrics.voluntary_switches,
                    metrics.involuntary_switches,
                ),
                peak_memory_kb: metrics.peak_memory_kb,
            });
        }
    }

    rows
}
