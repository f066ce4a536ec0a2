//! Value formatting for report tables
//!
//! Every rule here is a pure function of its input.

use crate::scenario::model::{CumulativeField, MetricValue};

/// How a cumulative metric is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Value as-is
    Plain,
    /// Six decimals followed by ` s`
    Seconds,
    /// Thousands-separated value followed by ` KB`
    Kilobytes,
}

/// Display format of each cumulative field.
///
/// Time fields are shown in seconds, the scenario and cycle counts as-is,
/// and every other field, including the user and system CPU totals, falls
/// into the kilobyte rule.
#[must_use]
pub const fn cumulative_format(field: CumulativeField) -> ValueFormat {
    match field {
        CumulativeField::Scenario | CumulativeField::TotalCycles => ValueFormat::Plain,
        CumulativeField::WallTime | CumulativeField::CpuTime => ValueFormat::Seconds,
        CumulativeField::UserCpu | CumulativeField::SystemCpu | CumulativeField::PeakMemory => {
            ValueFormat::Kilobytes
        }
    }
}

/// Format a cumulative metric value with the given rule.
#[must_use]
pub fn format_metric(value: MetricValue, format: ValueFormat) -> String {
    match format {
        ValueFormat::Plain => plain(value),
        ValueFormat::Seconds => format!("{} s", fixed(value.as_f64(), 6)),
        ValueFormat::Kilobytes => format!("{} KB", grouped(value)),
    }
}

/// Fixed-point notation with `places` decimals.
#[must_use]
pub fn fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

/// Integer with `,` between groups of three digits.
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Cycle wall time: two decimals with an `s` suffix.
#[must_use]
pub fn wall_time(secs: f64) -> String {
    format!("{}s", fixed(secs, 2))
}

/// Kernel dead time: four decimals with an `s` suffix.
#[must_use]
pub fn kernel_dead_time(secs: f64) -> String {
    format!("{}s", fixed(secs, 4))
}

/// Per-process CPU and paused times: four decimals, no suffix.
#[must_use]
pub fn process_seconds(secs: f64) -> String {
    fixed(secs, 4)
}

/// Voluntary and involuntary context switches as `vol/inv`.
#[must_use]
pub fn context_switches(voluntary: u64, involuntary: u64) -> String {
    format!("{voluntary}/{involuntary}")
}

/// Integers as digits; floats in shortest round-trip form, always with a
/// fractional part (`3.0`, `9.6`).
fn plain(value: MetricValue) -> String {
    match value {
        MetricValue::Integer(v) => v.to_string(),
        MetricValue::Decimal(v) => format!("{v:?}"),
    }
}

/// Like [`plain`], with the integer digits grouped by thousands.
fn grouped(value: MetricValue) -> String {
    match value {
        MetricValue::Integer(v) => thousands(v),
        MetricValue::Decimal(v) => {
            let text = format!("{v:?}");
            let (sign, body) = match text.strip_prefix('-') {
                Some(body) => ("-", body),
                None => ("", text.as_str()),
            };
            // Exponent notation has no integer part to group
            let Some((int, frac)) = body.split_once('.') else {
                return text.clone();
            };
            match int.parse::<u64>() {
                Ok(n) if !frac.contains('e') => format!("{sign}{}.{frac}", thousands(n)),
                _ => text.clone(),
            }
        }
    }
}
