//! Interactive adapter: one run driven by user input.
//!
//! ## Purpose
//!
//! This module reads a worker count and a step count, runs a single
//! estimation and prints the estimate and the elapsed seconds, one per line.
//!
//! ## Invariants
//!
//! * Exactly two lines are written on success: estimate, then seconds.
//! * Nothing is written when the input is rejected.

// External dependencies
use std::io::Write;

// Internal dependencies
use crate::api::{PiBuilder, PiEstimate};
use crate::input::RunInput;
use crate::primitives::errors::PiError;

/// Read parameters from `input`, run once, and report to `output`.
///
/// `template` supplies every setting except steps and workers.
pub fn run_interactive<I, W>(
    input: &mut I,
    output: &mut W,
    template: &PiBuilder<f64>,
) -> Result<PiEstimate<f64>, PiError>
where
    I: RunInput + ?Sized,
    W: Write + ?Sized,
{
    let config = input.read_configuration()?;

    let estimate = template
        .clone()
        .configuration(config)
        .build()?
        .estimate()?;

    writeln!(output, "{}", estimate.pi).map_err(PiError::Output)?;
    writeln!(output, "{}", estimate.elapsed_seconds()).map_err(PiError::Output)?;
    output.flush().map_err(PiError::Output)?;

    Ok(estimate)
}
