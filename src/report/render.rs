//! Report rendering
//!
//! Turns the cumulative metrics and detailed rows into grid tables with
//! title banners.

use std::io::{self, Write};

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::report::format::{
    cumulative_format, format_metric, kernel_dead_time, process_seconds, thousands, wall_time,
};
use crate::report::rows::DisplayRow;
use crate::scenario::model::CumulativeMetrics;

/// Width of the `=` rules and of the centered titles.
pub const RULE_WIDTH: usize = 80;

/// Title of the cumulative table.
pub const CUMULATIVE_TITLE: &str = "🤖 REPORTE ACUMULADO GLOBAL 🤖";

/// Title of the detailed table.
pub const DETAIL_TITLE: &str = "✨ RENDIMIENTO DETALLADO POR CICLO (P1, P2, P3) ✨";

/// A formatted row of the cumulative table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct CumulativeRow {
    /// Metric label
    #[tabled(rename = "Métrica")]
    pub metric: String,
    /// Formatted value
    #[tabled(rename = "Valor")]
    pub value: String,
}

/// A formatted row of the detailed table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct DetailRow {
    /// Cycle index
    #[tabled(rename = "Ciclo")]
    pub cycle: u32,
    /// Process label
    #[tabled(rename = "Proceso")]
    pub process: String,
    /// Cycle wall time
    #[tabled(rename = "T. Total (Wall)")]
    pub wall_time: String,
    /// Cycle kernel dead time
    #[tabled(rename = "T. Muerto Kernel")]
    pub kernel_dead_time: String,
    /// Effective CPU time
    #[tabled(rename = "CPU Efectiva (s)")]
    pub effective_cpu: String,
    /// Paused time
    #[tabled(rename = "T. Pausado (s)")]
    pub paused: String,
    /// Pause count
    #[tabled(rename = "Pausas Totales")]
    pub pauses: u64,
    /// Context switches, `vol/inv`
    #[tabled(rename = "C. Contexto Vol/Inv")]
    pub context_switches: String,
    /// Peak memory
    #[tabled(rename = "Memoria Pico (KB)")]
    pub peak_memory: String,
}

impl From<&DisplayRow> for DetailRow {
    fn from(row: &DisplayRow) -> Self {
        Self {
            cycle: row.cycle,
            process: row.process.label().to_string(),
            wall_time: wall_time(row.wall_time_secs),
            kernel_dead_time: kernel_dead_time(row.kernel_dead_time_secs),
            effective_cpu: process_seconds(row.effective_cpu_secs),
            paused: process_seconds(row.paused_secs),
            pauses: row.pause_count,
            context_switches: row.context_switches.clone(),
            peak_memory: thousands(row.peak_memory_kb),
        }
    }
}

/// Label/value rows of the cumulative table, in display order.
#[must_use]
pub fn build_cumulative_rows(totals: &CumulativeMetrics) -> Vec<CumulativeRow> {
    totals
        .entries()
        .map(|(field, value)| CumulativeRow {
            metric: field.label().to_string(),
            value: format_metric(value, cumulative_format(field)),
        })
        .collect()
}

/// The cumulative table as grid text.
#[must_use]
pub fn cumulative_table(totals: &CumulativeMetrics) -> String {
    Table::new(build_cumulative_rows(totals))
        .with(Style::modern())
        .to_string()
}

/// The detailed table as grid text.
#[must_use]
pub fn detail_table(rows: &[DisplayRow]) -> String {
    Table::new(rows.iter().map(DetailRow::from))
        .with(Style::modern())
        .to_string()
}

/// `title` centered within the rule width.
#[must_use]
pub fn banner(title: &str) -> String {
    format!("{title:^RULE_WIDTH$}")
}

/// Write both tables with their banners.
pub fn render_report<W: Write>(
    out: &mut W,
    totals: &CumulativeMetrics,
    rows: &[DisplayRow],
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", banner(CUMULATIVE_TITLE).bold().cyan())?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", cumulative_table(totals))?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    writeln!(out, "{}", banner(DETAIL_TITLE).bold().cyan())?;
    writeln!(out, "{}", detail_table(rows))?;

    Ok(())
}
