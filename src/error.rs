use std::io;
use std::result;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid codon '{input}': {reason}")]
    InvalidCodon { input: String, reason: String },

    #[error("invalid amino acid '{0}': expected one of the 20 standard one-letter codes or X/* for stop")]
    InvalidAminoAcid(String),

    #[error("invalid position '{0}': expected 1, 2, or 3")]
    InvalidPosition(String),

    #[error("line {line}: missing field '{field}'")]
    MissingField { line: u64, field: String },

    #[error("line {line}: {source}")]
    Query { line: u64, source: Box<Error> },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid_codon<S: Into<String>>(input: &str, reason: S) -> Error {
        Error::InvalidCodon { input: input.to_owned(), reason: reason.into() }
    }

    /// Attach the record line of a batch query to a validation error.
    pub(crate) fn at_line(self, line: u64) -> Error {
        Error::Query { line, source: Box::new(self) }
    }
}

pub type Result<T> = result::Result<T, Error>;
