// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use thiserror::Error;

use crate::Version;

/// Reasons a version argument is rejected.
///
/// [InvalidFormat](VersionError::InvalidFormat) and
/// [OutOfRange](VersionError::OutOfRange) render the same message; the
/// variants only differ for callers and logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Please provide an argument.")]
    MissingArgument,

    #[error(
        "Invalid argument. Please provide a valid version number between {min} and {max}.",
        min = Version::MIN,
        max = Version::MAX
    )]
    InvalidFormat(String),

    #[error(
        "Invalid argument. Please provide a valid version number between {min} and {max}.",
        min = Version::MIN,
        max = Version::MAX
    )]
    OutOfRange(i64),
}

impl VersionError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
