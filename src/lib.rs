// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Model Greeter
//!
//! This crate validates a version number and produces a greeting for a fixed
//! model.
//!
//! # Quick Start
//!
//! ```
//! use hello::greet;
//!
//! let greeting = greet(Some("7")).expect("valid version");
//! assert_eq!(greeting.to_string(), "Hello mistral, version 7.");
//! ```
//!
//! Rejected input produces a [VersionError]:
//!
//! ```
//! use hello::{greet, VersionError};
//!
//! assert_eq!(greet(None).unwrap_err(), VersionError::MissingArgument);
//! assert!(matches!(greet(Some("11")), Err(VersionError::OutOfRange(11))));
//! ```
//!
//! # Accepted Versions
//!
//! | Input     | Result                                   |
//! |-----------|------------------------------------------|
//! | missing   | [MissingArgument](VersionError::MissingArgument) |
//! | `abc`, `1.5`, `""` | [InvalidFormat](VersionError::InvalidFormat) |
//! | `0`, `11`, `-5`  | [OutOfRange](VersionError::OutOfRange)       |
//! | `1` ..= `10`     | [Greeting]                                   |

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

pub mod error;
pub mod io;
pub mod logging;

pub use error::{Result, VersionError};

/// The model named in every greeting.
pub const MODEL: &str = "mistral";

/// A validated version number in `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Lowest accepted version.
    pub const MIN: u8 = 1;
    /// Highest accepted version.
    pub const MAX: u8 = 10;

    /// Creates a [Version], rejecting values outside `MIN..=MAX`.
    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(VersionError::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Version {
    type Error = VersionError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

/// Parses a base-10 integer. A sign is allowed, whitespace is not.
impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.parse::<i64>().map_err(|e| {
            trace!(input = s, error = %e, "not a base-10 integer");
            VersionError::InvalidFormat(s.to_owned())
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A greeting for a model at a given [Version].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting<'a> {
    model: &'a str,
    version: Version,
}

impl<'a> Greeting<'a> {
    pub fn new(model: &'a str, version: Version) -> Self {
        Self { model, version }
    }

    pub fn model(&self) -> &str {
        self.model
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

impl fmt::Display for Greeting<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hello {}, version {}.", self.model, self.version)
    }
}

/// Validates the first user argument and greets [MODEL] with it.
pub fn greet(arg: Option<&str>) -> Result<Greeting<'static>> {
    let Some(arg) = arg else {
        debug!("no version argument");
        return Err(VersionError::MissingArgument);
    };

    let version = arg.parse::<Version>().inspect_err(|e| {
        debug!(input = arg, error = ?e, "rejected version argument");
    })?;
    debug!(%version, "accepted version argument");

    Ok(Greeting::new(MODEL, version))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_version_bounds() {
        assert_eq!(Version::new(1).map(Version::get), Ok(1));
        assert_eq!(Version::new(10).map(Version::get), Ok(10));
        assert_eq!(Version::new(0), Err(VersionError::OutOfRange(0)));
        assert_eq!(Version::new(11), Err(VersionError::OutOfRange(11)));
        assert_eq!(Version::new(-5), Err(VersionError::OutOfRange(-5)));
        assert_eq!(
            Version::new(i64::MAX),
            Err(VersionError::OutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_version_parse() {
        assert_eq!("5".parse::<Version>().map(Version::get), Ok(5));
        assert_eq!("+5".parse::<Version>().map(Version::get), Ok(5));
        assert_eq!("05".parse::<Version>().map(Version::get), Ok(5));

        for bad in ["abc", "", "1.5", " 5", "5 ", "0x5", "99999999999999999999"] {
            assert_eq!(
                bad.parse::<Version>(),
                Err(VersionError::InvalidFormat(bad.to_owned())),
                "input {bad:?}"
            );
        }

        assert_eq!("100".parse::<Version>(), Err(VersionError::OutOfRange(100)));
        assert_eq!("-5".parse::<Version>(), Err(VersionError::OutOfRange(-5)));
    }

    #[test]
    fn test_greeting_display() {
        let v = Version::try_from(3).expect("version");
        let g = Greeting::new("other", v);
        assert_eq!(g.model(), "other");
        assert_eq!(g.version(), v);
        assert_eq!(g.to_string(), "Hello other, version 3.");
    }

    #[test]
    fn test_greet() {
        assert_eq!(greet(None), Err(VersionError::MissingArgument));
        assert_eq!(
            greet(Some("10")).map(|g| g.to_string()),
            Ok("Hello mistral, version 10.".to_owned())
        );
        assert_eq!(greet(Some("0")), Err(VersionError::OutOfRange(0)));
    }
}
