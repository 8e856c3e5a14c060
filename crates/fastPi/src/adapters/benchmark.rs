//! Benchmark adapter sweeping step counts and worker counts.
//!
//! ## Purpose
//!
//! This module runs the estimation pipeline over a matrix of configurations
//! and records the timing and result of each run. Records go to a
//! `RecordSink` (CSV file in the binary, a `Vec` in tests) and a progress
//! line per run goes to a separate writer.
//!
//! ## Design notes
//!
//! * **Declarative**: A `BenchmarkPlan` expands into a flat list of
//!   `RunConfiguration`s; the sweep is a single loop over that list.
//! * **Single entry**: Every run goes through `run_and_record`.
//! * **Fail-fast**: The plan is validated and the sink is opened before the
//!   first run; any write error aborts the sweep.
//!
//! ## Key concepts
//!
//! * **Plan**: Cross-product of step counts and worker counts `1..=max_workers`.
//! * **Record**: One CSV row `(steps, workers, seconds, estimate)`.
//!
//! ## Invariants
//!
//! * A completed sweep emits exactly `step_counts.len() · max_workers` records,
//!   ordered by step count, then worker count.
//! * Elapsed times are non-negative.
//!
//! ## Non-goals
//!
//! * This adapter does not repeat runs or compute statistics over repetitions.

// External dependencies
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

// Internal dependencies
use crate::api::{PiBuilder, PiEstimate, RemainderPolicy, RunConfiguration};
use crate::primitives::errors::PiError;
use crate::primitives::float::PiFloat;

/// Step counts swept by default.
pub const DEFAULT_STEP_COUNTS: [u64; 3] = [100_000_000, 1_000_000_000, 3_000_000_000];

/// Highest worker count swept by default.
pub const DEFAULT_MAX_WORKERS: usize = 50;

/// Default CSV output path.
pub const DEFAULT_OUTPUT: &str = "wyniki.csv";

/// CSV header row.
pub const CSV_HEADER: [&str; 4] = [
    "Liczba krokow",
    "Liczba watków",
    "Czas (s)",
    "Przyblizona liczba PI",
];

// ============================================================================
// Plan
// ============================================================================

/// Matrix of configurations to sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkPlan {
    /// Total step counts, swept in order.
    pub step_counts: Vec<u64>,
    /// Worker counts `1..=max_workers` are swept for every step count.
    pub max_workers: usize,
}

impl Default for BenchmarkPlan {
    fn default() -> Self {
        Self {
            step_counts: DEFAULT_STEP_COUNTS.to_vec(),
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl BenchmarkPlan {
    /// Create a plan.
    pub fn new(step_counts: Vec<u64>, max_workers: usize) -> Self {
        Self {
            step_counts,
            max_workers,
        }
    }

    /// Number of runs in the sweep.
    pub fn len(&self) -> usize {
        self.step_counts.len() * self.max_workers
    }

    /// Whether the sweep contains no runs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand into the ordered list of validated configurations.
    pub fn configurations(&self) -> Result<Vec<RunConfiguration>, PiError> {
        if self.step_counts.is_empty() {
            return Err(PiError::invalid_configuration(
                "step_counts",
                "at least one step count is required",
            ));
        }
        if self.max_workers == 0 {
            return Err(PiError::invalid_configuration(
                "max_workers",
                "at least one worker is required",
            ));
        }

        let mut configs = Vec::with_capacity(self.len());
        for &total_steps in &self.step_counts {
            for workers in 1..=self.max_workers {
                configs.push(RunConfiguration::new(total_steps, workers)?);
            }
        }
        Ok(configs)
    }
}

// ============================================================================
// Records
// ============================================================================

/// One benchmark row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunRecord {
    #[serde(rename = "Liczba krokow")]
    pub total_steps: u64,
    #[serde(rename = "Liczba watków")]
    pub workers: usize,
    #[serde(rename = "Czas (s)")]
    pub elapsed_seconds: f64,
    #[serde(rename = "Przyblizona liczba PI")]
    pub pi_estimate: f64,
}

impl<T: PiFloat> From<&PiEstimate<T>> for RunRecord {
    fn from(estimate: &PiEstimate<T>) -> Self {
        Self {
            total_steps: estimate.total_steps,
            workers: estimate.workers,
            elapsed_seconds: estimate.elapsed_seconds(),
            pi_estimate: estimate.pi.as_f64(),
        }
    }
}

/// Destination for benchmark records.
pub trait RecordSink {
    /// Append one record.
    fn write_record(&mut self, record: &RunRecord) -> Result<(), PiError>;

    /// Flush buffered records.
    fn finish(&mut self) -> Result<(), PiError> {
        Ok(())
    }
}

impl RecordSink for Vec<RunRecord> {
    fn write_record(&mut self, record: &RunRecord) -> Result<(), PiError> {
        self.push(*record);
        Ok(())
    }
}

/// CSV-backed record sink.
///
/// The header is flushed on construction and every record is flushed as soon
/// as it is written, so rows already reported survive an interrupted sweep.
pub struct CsvRecordSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvRecordSink<File> {
    /// Create (or truncate) the CSV file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, PiError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| PiError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvRecordSink<W> {
    /// Wrap an arbitrary writer.
    pub fn from_writer(inner: W) -> Result<Self, PiError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(inner);
        writer.write_record(CSV_HEADER)?;
        writer.flush().map_err(PiError::Output)?;
        Ok(Self { writer })
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, PiError> {
        self.writer
            .into_inner()
            .map_err(|e| PiError::Output(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvRecordSink<W> {
    fn write_record(&mut self, record: &RunRecord) -> Result<(), PiError> {
        self.writer.serialize(record)?;
        self.writer.flush().map_err(PiError::Output)
    }

    fn finish(&mut self) -> Result<(), PiError> {
        self.writer.flush().map_err(PiError::Output)
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Run one configuration and turn the outcome into a record.
pub fn run_and_record<T: PiFloat>(
    config: RunConfiguration,
    template: &PiBuilder<T>,
) -> Result<RunRecord, PiError> {
    let estimate = template.clone().configuration(config).build()?.estimate()?;
    Ok(RunRecord::from(&estimate))
}

/// Sweeps a `BenchmarkPlan` and reports every run.
#[derive(Debug, Clone)]
pub struct BenchmarkDriver {
    plan: BenchmarkPlan,
    template: PiBuilder<f64>,
}

impl BenchmarkDriver {
    /// Create a driver running `plan` in parallel mode.
    pub fn new(plan: BenchmarkPlan) -> Self {
        Self {
            plan,
            template: PiBuilder::new(),
        }
    }

    /// Set parallel execution mode for every run.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.template = self.template.parallel(parallel);
        self
    }

    /// Set the remainder policy for every run.
    pub fn remainder_policy(mut self, policy: RemainderPolicy) -> Self {
        self.template = self.template.remainder_policy(policy);
        self
    }

    /// The plan being swept.
    pub fn plan(&self) -> &BenchmarkPlan {
        &self.plan
    }

    /// Sweep the plan into `sink`, writing one progress line per run.
    ///
    /// A run's progress line is written only after its record was accepted by
    /// the sink; the first failing write aborts the sweep.
    pub fn run<S, P>(&self, sink: &mut S, progress: &mut P) -> Result<Vec<RunRecord>, PiError>
    where
        S: RecordSink + ?Sized,
        P: Write + ?Sized,
    {
        let configs = self.plan.configurations()?;
        let mut records = Vec::with_capacity(configs.len());

        tracing::info!(
            runs = configs.len(),
            step_counts = ?self.plan.step_counts,
            max_workers = self.plan.max_workers,
            "starting benchmark sweep"
        );

        for config in configs {
            let record = run_and_record(config, &self.template)?;
            sink.write_record(&record)?;

            writeln!(
                progress,
                "steps={} workers={} time={:.6}s pi={:.15}",
                record.total_steps, record.workers, record.elapsed_seconds, record.pi_estimate
            )
            .map_err(PiError::Output)?;

            tracing::info!(
                total_steps = record.total_steps,
                workers = record.workers,
                elapsed_s = record.elapsed_seconds,
                pi = record.pi_estimate,
                "benchmark run finished"
            );

            records.push(record);
        }

        sink.finish()?;
        Ok(records)
    }

    /// Open the CSV at `path`, then sweep into it.
    ///
    /// The file is opened before the first run, so an unwritable path fails
    /// without doing any computation.
    pub fn run_to_csv<P>(
        &self,
        path: impl AsRef<Path>,
        progress: &mut P,
    ) -> Result<Vec<RunRecord>, PiError>
    where
        P: Write + ?Sized,
    {
        let mut sink = CsvRecordSink::create(path)?;
        self.run(&mut sink, progress)
    }
}
