//! Command-line parsing for the `fastpi` binary.
//!
//! ## Purpose
//!
//! This module turns the process arguments into a [`Command`]. It lives in
//! the library so the parsing rules are testable without spawning a process.
//!
//! ## Grammar
//!
//! ```text
//! fastpi [--sequential] [--truncate-remainder]
//! fastpi bench [OUTPUT] [--max-workers N] [--steps A,B,C] [--sequential] [--truncate-remainder]
//! fastpi --help
//! ```

// External dependencies
use std::path::PathBuf;

// Internal dependencies
use crate::adapters::benchmark::{BenchmarkPlan, DEFAULT_OUTPUT};
use crate::api::{PiBuilder, RemainderPolicy};
use crate::input::parse_integer;
use crate::primitives::errors::PiError;

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "\
Usage:
  fastpi [--sequential] [--truncate-remainder]
      Read the worker count and the step count from standard input and
      print the pi estimate and the elapsed seconds.

  fastpi bench [OUTPUT] [--max-workers N] [--steps A,B,C] [--sequential] [--truncate-remainder]
      Sweep step counts and worker counts 1..=N, writing CSV to OUTPUT
      (default: wyniki.csv).

Logging is controlled by the FASTPI_LOG environment variable.";

/// Settings shared by both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub parallel: bool,
    pub remainder_policy: RemainderPolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            remainder_policy: RemainderPolicy::AssignToLast,
        }
    }
}

impl RunOptions {
    /// Builder template carrying these options.
    pub fn template(&self) -> PiBuilder<f64> {
        PiBuilder::new()
            .parallel(self.parallel)
            .remainder_policy(self.remainder_policy)
    }
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One run with parameters from standard input.
    Interactive(RunOptions),
    /// Benchmark sweep to a CSV file.
    Benchmark {
        output: PathBuf,
        plan: BenchmarkPlan,
        options: RunOptions,
    },
    /// Print usage.
    Help,
}

/// Parse the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, PiError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut options = RunOptions::default();

    let benchmark = matches!(
        args.peek().map(String::as_str),
        Some("bench") | Some("benchmark")
    );
    if benchmark {
        args.next();
    }

    let mut plan = BenchmarkPlan::default();
    let mut output: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--sequential" => options.parallel = false,
            "--truncate-remainder" => options.remainder_policy = RemainderPolicy::Truncate,
            "--max-workers" if benchmark => {
                let value = parse_integer(args.next().as_deref(), "--max-workers value")?;
                plan.max_workers = usize::try_from(value)
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| {
                        PiError::invalid_configuration(
                            "max_workers",
                            format!("{value} is not a positive count"),
                        )
                    })?;
            }
            "--steps" if benchmark => {
                let value = args
                    .next()
                    .ok_or_else(|| PiError::InvalidInput("missing --steps value".to_string()))?;
                plan.step_counts = parse_step_list(&value)?;
            }
            other if benchmark && !other.starts_with('-') && output.is_none() => {
                output = Some(PathBuf::from(other));
            }
            other => {
                return Err(PiError::InvalidInput(format!("unexpected argument `{other}`")));
            }
        }
    }

    if benchmark {
        Ok(Command::Benchmark {
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            plan,
            options,
        })
    } else {
        Ok(Command::Interactive(options))
    }
}

/// Parse a comma-separated list of positive step counts.
pub fn parse_step_list(value: &str) -> Result<Vec<u64>, PiError> {
    let steps = value
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .map(|token| {
            let parsed = parse_integer(Some(token), "step count")?;
            u64::try_from(parsed)
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    PiError::invalid_configuration(
                        "step_counts",
                        format!("{parsed} is not a positive count"),
                    )
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if steps.is_empty() {
        return Err(PiError::InvalidInput("--steps needs at least one value".to_string()));
    }
    Ok(steps)
}
