// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::env;
use std::io::stdout;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
#[cfg(test)]
use clap::CommandFactory;
use tracing::debug;

use hello::{greet, io, logging, VersionError};

/// Greets the mistral model by a version number between 1 and 10.
#[derive(Debug, Parser)]
#[command(name = env!("CARGO_CRATE_NAME"), version, about, long_about = None)]
pub struct App {
    /// a version number between 1 and 10
    #[arg(value_name = "VERSION", required = false, allow_negative_numbers = true)]
    number: Option<String>,

    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<String>,

    /// log diagnostics to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Reports `arg` as an unusable version.
fn reject(arg: Option<String>) -> Result<ExitCode> {
    let outcome = Err(VersionError::InvalidFormat(arg.unwrap_or_default()));
    let status = io::report(&mut stdout().lock(), &outcome)?;
    Ok(ExitCode::from(status))
}

fn main() -> Result<ExitCode> {
    let first = env::args_os()
        .nth(1)
        .map(|a| a.to_string_lossy().into_owned());

    // `--` is the first argument, not a separator
    if first.as_deref() == Some("--") {
        return reject(first);
    }

    let args = match App::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        // anything clap can't make sense of is an unusable version
        Err(_) => return reject(first),
    };

    logging::init(args.verbose)?;
    if !args.extra.is_empty() {
        debug!(extra = ?args.extra, "ignoring extra arguments");
    }

    let outcome = greet(args.number.as_deref());
    let status = io::report(&mut stdout().lock(), &outcome)?;
    Ok(ExitCode::from(status))
}
