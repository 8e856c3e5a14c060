//! Input abstractions for run parameters.
//!
//! ## Purpose
//!
//! This module turns textual input (standard input in interactive mode,
//! command-line values in benchmark mode) into validated run parameters
//! through a single trait, so adapters do not care where the text came from.
//!
//! ## Design notes
//!
//! * **Layout-agnostic**: Tokens may be split across lines or share one line.
//! * **Fail-fast validation**: Non-integers are rejected as `InvalidInput`,
//!   non-positive integers as `InvalidConfiguration`.
//!
//! ## Invariants
//!
//! * Worker count is read first, step count second.
//!
//! ## Non-goals
//!
//! * This module does not prompt the user.

// External dependencies
use std::io::BufRead;

// Internal dependencies
use crate::api::RunConfiguration;
use crate::primitives::errors::PiError;

/// Sources that can produce a run configuration.
pub trait RunInput {
    /// Read `workers` then `total_steps` and validate them.
    fn read_configuration(&mut self) -> Result<RunConfiguration, PiError>;
}

/// Wrapper reading a configuration from any buffered reader.
pub struct ReaderInput<R>(pub R);

impl<R: BufRead> RunInput for ReaderInput<R> {
    fn read_configuration(&mut self) -> Result<RunConfiguration, PiError> {
        let mut text = String::new();
        let mut line = String::new();

        // Read until two tokens are available or the input ends.
        while text.split_whitespace().count() < 2 {
            line.clear();
            let read = self
                .0
                .read_line(&mut line)
                .map_err(|source| PiError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            text.push_str(&line);
        }

        parse_configuration(&text)
    }
}

/// Parse `"<workers> <total_steps>"`.
pub fn parse_configuration(text: &str) -> Result<RunConfiguration, PiError> {
    let mut tokens = text.split_whitespace();
    let workers = parse_integer(tokens.next(), "worker count")?;
    let total_steps = parse_integer(tokens.next(), "step count")?;
    RunConfiguration::from_signed(total_steps, workers)
}

/// Parse one integer token.
pub fn parse_integer(token: Option<&str>, what: &str) -> Result<i64, PiError> {
    let token = token.ok_or_else(|| PiError::InvalidInput(format!("missing {what}")))?;
    token
        .trim()
        .replace('_', "")
        .parse::<i64>()
        .map_err(|_| PiError::InvalidInput(format!("{what} `{token}` is not an integer")))
}
