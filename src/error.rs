/*!
Error types for the demo crate

Abbreviation lookups fail with a recoverable `DayError`; everything that
writes to an output sink surfaces `DemoError`.
*/

use std::io;
use thiserror::Error;

/// Errors raised by the `Day` enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DayError {
    /// The input matched neither a canonical abbreviation nor one without its trailing period
    #[error("'{input}' does not correspond to any known abbreviation.")]
    UnknownAbbreviation { input: String },
}

impl DayError {
    /// The offending input, verbatim
    pub fn input(&self) -> &str {
        match self {
            DayError::UnknownAbbreviation { input } => input,
        }
    }
}

/// Errors surfaced by the demo routine and the command-line front end
#[derive(Debug, Error)]
pub enum DemoError {
    /// The output sink refused a line
    #[error("Output failure: {0}")]
    Output(#[from] io::Error),

    /// A day lookup failed
    #[error(transparent)]
    Day(#[from] DayError),
}

/// Result type for day lookups
pub type DayResult<T> = Result<T, DayError>;

/// Result type for anything that writes to a sink
pub type DemoResult<T> = Result<T, DemoError>;
