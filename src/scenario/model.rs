//! Scenario data model
//!
//! Typed views of the two per-scenario input files: the mission file (one
//! record per simulation cycle, each with metrics for the three fixed
//! processes) and the totals file (seven cumulative metrics).

use std::fmt;

use serde::Deserialize;

/// Numeric identifier of a scenario run; selects its pair of input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScenarioId(pub u32);

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three mission processes, in display order.
///
/// Variants carry the process names used throughout the mission data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessKey {
    /// `proceso1`
    Receptor,
    /// `proceso2`
    Escudo,
    /// `proceso3`
    Analizador,
}

impl ProcessKey {
    /// All processes in the order rows are produced.
    pub const ALL: [Self; 3] = [Self::Receptor, Self::Escudo, Self::Analizador];

    /// Human-readable label shown in the detailed table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Receptor => "P1 (Receptor)",
            Self::Escudo => "P2 (Escudo)",
            Self::Analizador => "P3 (Analizador)",
        }
    }
}

/// Metrics of a single process during one cycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessMetrics {
    /// Effective CPU execution time in seconds
    #[serde(rename = "ejecucion_efectiva")]
    pub effective_cpu_secs: f64,
    /// Time spent paused by the kernel, in seconds (absent means zero)
    #[serde(rename = "tiempo_pausado_total", default)]
    pub paused_secs: f64,
    /// Number of pauses (absent means zero)
    #[serde(rename = "num_pausas", default)]
    pub pause_count: u64,
    /// Voluntary context switches
    #[serde(rename = "cambios_contexto_vol")]
    pub voluntary_switches: u64,
    /// Involuntary context switches
    #[serde(rename = "cambios_contexto_inv")]
    pub involuntary_switches: u64,
    /// Peak resident memory in KB
    #[serde(rename = "memoria_pico_kb")]
    pub peak_memory_kb: u64,
}

/// The fixed set of processes recorded for every cycle.
///
/// Exactly the three expected keys must be present; any other key is
/// rejected when the mission file is parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CycleProcesses {
    /// P1
    #[serde(rename = "proceso1")]
    pub receptor: ProcessMetrics,
    /// P2
    #[serde(rename = "proceso2")]
    pub escudo: ProcessMetrics,
    /// P3
    #[serde(rename = "proceso3")]
    pub analizador: ProcessMetrics,
}

impl CycleProcesses {
    /// Metrics for a given process.
    #[must_use]
    pub const fn get(&self, key: ProcessKey) -> &ProcessMetrics {
        match key {
            ProcessKey::Receptor => &self.receptor,
            ProcessKey::Escudo => &self.escudo,
            ProcessKey::Analizador => &self.analizador,
        }
    }

    /// Iterate processes in display order (P1, P2, P3).
    pub fn iter(&self) -> impl Iterator<Item = (ProcessKey, &ProcessMetrics)> {
        ProcessKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// One simulation cycle from the mission file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CycleRecord {
    /// Cycle index
    #[serde(rename = "ciclo")]
    pub cycle: u32,
    /// Wall-clock duration of the whole cycle, in seconds
    #[serde(rename = "tiempo_total_ciclo")]
    pub wall_time_secs: f64,
    /// Time the kernel spent outside any process, in seconds
    #[serde(rename = "tiempo_muerto_kernel")]
    pub kernel_dead_time_secs: f64,
    /// Per-process metrics
    #[serde(rename = "procesos")]
    pub processes: CycleProcesses,
}

/// A numeric value from the totals file, kept exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Non-negative JSON integer
    Integer(u64),
    /// Any other JSON number
    Decimal(f64),
}

impl MetricValue {
    /// Integer zero, the stand-in for a missing count.
    pub const ZERO: Self = Self::Integer(0);

    /// Float zero, the stand-in for a missing time or CPU figure.
    pub const ZERO_DECIMAL: Self = Self::Decimal(0.0);

    /// The value as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Decimal(v) => v,
        }
    }
}

const fn zero() -> MetricValue {
    MetricValue::ZERO
}

const fn zero_decimal() -> MetricValue {
    MetricValue::ZERO_DECIMAL
}

/// The seven cumulative metrics of a scenario, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CumulativeField {
    /// Scenario number
    Scenario,
    /// Total cycles accumulated
    TotalCycles,
    /// Total wall time
    WallTime,
    /// Total CPU time (user + system)
    CpuTime,
    /// Accumulated user CPU
    UserCpu,
    /// Accumulated system CPU
    SystemCpu,
    /// Sum of per-process memory peaks
    PeakMemory,
}

impl CumulativeField {
    /// All fields in display order.
    pub const ALL: [Self; 7] = [
        Self::Scenario,
        Self::TotalCycles,
        Self::WallTime,
        Self::CpuTime,
        Self::UserCpu,
        Self::SystemCpu,
        Self::PeakMemory,
    ];

    /// Label shown in the cumulative table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scenario => "Escenario Analizado",
            Self::TotalCycles => "Total de Ciclos Acumulados",
            Self::WallTime => "Tiempo Real Total (Wall Time)",
            Self::CpuTime => "Tiempo Total de CPU (Usuario + Sistema)",
            Self::UserCpu => "CPU Usuario Acumulado",
            Self::SystemCpu => "CPU Sistema Acumulado",
            Self::PeakMemory => "Memoria Total (Suma de Picos)",
        }
    }
}

/// Contents of the totals file.
///
/// Missing keys read as zero: integer zero for counts and memory, float zero
/// for times and CPU figures.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CumulativeMetrics {
    /// `escenario`
    #[serde(rename = "escenario", default = "zero")]
    pub scenario: MetricValue,
    /// `total_ciclos_acumulados`
    #[serde(rename = "total_ciclos_acumulados", default = "zero")]
    pub total_cycles: MetricValue,
    /// `tiempo_real_total`
    #[serde(rename = "tiempo_real_total", default = "zero_decimal")]
    pub wall_time_secs: MetricValue,
    /// `tiempo_total_cpu`
    #[serde(rename = "tiempo_total_cpu", default = "zero_decimal")]
    pub cpu_time_secs: MetricValue,
    /// `cpu_usuario_acumulado`
    #[serde(rename = "cpu_usuario_acumulado", default = "zero_decimal")]
    pub user_cpu_secs: MetricValue,
    /// `cpu_sistema_acumulado`
    #[serde(rename = "cpu_sistema_acumulado", default = "zero_decimal")]
    pub system_cpu_secs: MetricValue,
    /// `memoria_pico_total_kb`
    #[serde(rename = "memoria_pico_total_kb", default = "zero")]
    pub peak_memory_kb: MetricValue,
}

impl Default for CumulativeMetrics {
    fn default() -> Self {
        Self {
            scenario: zero(),
            total_cycles: zero(),
            wall_time_secs: zero_decimal(),
            cpu_time_secs: zero_decimal(),
            user_cpu_secs: zero_decimal(),
            system_cpu_secs: zero_decimal(),
            peak_memory_kb: zero(),
        }
    }
}

impl CumulativeMetrics {
    /// Value of a single field.
    #[must_use]
    pub const fn get(&self, field: CumulativeField) -> MetricValue {
        match field {
            CumulativeField::Scenario => self.scenario,
            CumulativeField::TotalCycles => self.total_cycles,
            CumulativeField::WallTime => self.wall_time_secs,
            CumulativeField::CpuTime => self.cpu_time_secs,
            CumulativeField::UserCpu => self.user_cpu_secs,
            CumulativeField::SystemCpu => self.system_cpu_secs,
            CumulativeField::PeakMemory => self.peak_memory_kb,
        }
    }

    /// All fields with their values, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (CumulativeField, MetricValue)> + '_ {
        CumulativeField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}
