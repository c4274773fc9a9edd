mod args;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use args::Args;
use sinorm_quantity::{normalize_quantity_with, Error};

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::init_logging(&args.logging()) {
        eprintln!("warning: logging unavailable: {e}");
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Normalizes every input; returns whether all of them succeeded.
fn run(args: &Args) -> Result<bool> {
    let inputs = if args.expressions.is_empty() {
        read_stdin()?
    } else {
        args.expressions.iter().map(|e| Ok(e.clone())).collect()
    };
    tracing::debug!(count = inputs.len(), strict = args.strict, "normalizing inputs");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut all_ok = true;

    for input in inputs {
        let result = input.and_then(|text| {
            normalize_quantity_with(&text, args.options()).map(|q| (text, q))
        });
        match result {
            Ok((text, quantity)) => {
                let line = output::success_line(args.format, &text, quantity.as_ref());
                writeln!(out, "{line}").context("failed to write output")?;
            }
            Err(e) => {
                all_ok = false;
                let input = error_input(&e);
                match output::failure_line(args.format, &input, &e) {
                    Some(line) => writeln!(out, "{line}").context("failed to write output")?,
                    None => eprintln!("error: {e}"),
                }
            }
        }
    }

    Ok(all_ok)
}

/// Reads stdin line by line, skipping blank lines. Lines that are not UTF-8
/// are kept as errors so the remaining lines are still processed.
fn read_stdin() -> Result<Vec<std::result::Result<String, Error>>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for raw in stdin.lock().split(b'\n') {
        let raw = raw.context("failed to read stdin")?;
        let text = std::str::from_utf8(&raw).map_err(Error::from);
        match text {
            Ok(t) if t.trim().is_empty() => continue,
            Ok(t) => lines.push(Ok(t.trim_end_matches('\r').to_string())),
            Err(e) => lines.push(Err(e)),
        }
    }
    Ok(lines)
}

fn error_input(error: &Error) -> String {
    match error {
        Error::Syntax { input, .. } | Error::TrailingInput { input, .. } => input.clone(),
        Error::NotText { .. } => String::new(),
    }
}
