//! Error type shared by the calendar adapter, the engine and the CLI.

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The timestamp could not be resolved to a lunisolar date.
    #[error("invalid date {date}: {reason}")]
    InvalidDate { date: String, reason: String },

    /// A caller-supplied number did not parse to an integer.
    #[error("invalid number {input:?}: {source}")]
    InvalidNumericInput {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
