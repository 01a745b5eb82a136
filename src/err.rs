use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EepromError>;

#[derive(Debug, Error)]
pub enum EepromError {
    #[error("EEPROM image must be exactly {expected} bytes, found {found}")]
    Size { expected: usize, found: usize },

    #[error("read of {len} bytes at offset {offset:#04x} is out of bounds (size={size})")]
    Range {
        offset: usize,
        len: usize,
        size: usize,
    },

    #[error("Substitution spec \"{spec}\" {reason}")]
    SubstitutionSpec {
        spec: String,
        reason: SubstitutionSpecReason,
    },

    #[error("{collection} record {index} has grade {value}, expected 0..=19")]
    InvalidGrade {
        collection: &'static str,
        index: usize,
        value: u8,
    },

    #[error("Failed to open file {}: {source}", .path.display())]
    FailedToOpenFile { path: PathBuf, source: io::Error },

    #[error("An I/O error has occurred: {0}")]
    Io(#[from] io::Error),

    #[error("`serde_json` failed with error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Formatting the report failed")]
    Fmt(#[from] fmt::Error),
}

/// Why a `NAME:REPLACEMENT` argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionSpecReason {
    MissingName,
    MissingReplacement,
}

impl fmt::Display for SubstitutionSpecReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstitutionSpecReason::MissingName => {
                f.write_str("contains no record name to substitute before the colon.")
            }
            SubstitutionSpecReason::MissingReplacement => {
                f.write_str("contains no name to use as a substitute after the colon.")
            }
        }
    }
}
