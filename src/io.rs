// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::Greeting;

/// Status reported when the greeting is written.
pub const SUCCESS: u8 = 0;

/// Writes the greeting, or the error message, as a single line to `out`
/// and returns the process exit status for it. Both land on the same
/// stream.
pub fn report<W: Write>(out: &mut W, outcome: &crate::Result<Greeting>) -> Result<u8> {
    let status = match outcome {
        Ok(greeting) => {
            writeln!(out, "{greeting}")?;
            SUCCESS
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            e.exit_code()
        }
    };
    out.flush()?;
    info!(status, "reported");
    Ok(status)
}
