//! `fastpi` command-line entry point.

#![allow(non_snake_case)]

use std::io::{self, Write};
use std::process::ExitCode;

use fastPi::cli::{parse_args, Command, USAGE};
use fastPi::prelude::*;
use fastPi::telemetry::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fastpi failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), PiError> {
    match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Interactive(options) => {
            let stdin = io::stdin();
            let mut input = ReaderInput(stdin.lock());
            let mut stdout = io::stdout().lock();
            run_interactive(&mut input, &mut stdout, &options.template())?;
            Ok(())
        }
        Command::Benchmark {
            output,
            plan,
            options,
        } => {
            let driver = BenchmarkDriver::new(plan)
                .parallel(options.parallel)
                .remainder_policy(options.remainder_policy);

            let mut stdout = io::stdout().lock();
            let records = driver.run_to_csv(&output, &mut stdout)?;
            writeln!(
                stdout,
                "wrote {} records to {}",
                records.len(),
                output.display()
            )
            .map_err(PiError::Output)?;
            Ok(())
        }
    }
}
