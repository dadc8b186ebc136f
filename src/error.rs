//! Errors for loading level and settings files
//!
//! The simulation itself never fails; only the file/JSON edges do.

use std::{fmt, io, result};

#[derive(Debug)]
pub enum Error {
    /// File could not be read or written
    Io(io::Error),
    /// File contents are not valid JSON for the expected type
    Json(serde_json::Error),
    /// A level config parsed but breaks a generator invariant
    InvalidConfig(String),
}

pub type Result<T> = result::Result<T, Error>;

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::InvalidConfig(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {}", err),
            Error::Json(err) => write!(f, "malformed json: {}", err),
            Error::InvalidConfig(reason) => write!(f, "invalid level config: {}", reason),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
