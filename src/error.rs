use std::path::PathBuf;
use thiserror::Error;

/// Broad category of an [InflammationError], for callers that only care about the class of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    InvariantViolation,
    DuplicateKey,
    PreconditionFailure,
}

#[derive(Debug, Error)]
pub enum InflammationError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed inflammation data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected {expected} values, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: {token:?} is not a number")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("inflammation data has an invalid shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("Inflammation values should not be negative")]
    NegativeValue { patient: usize, day: usize },
    #[error("Patient {0} already exists")]
    DuplicatePatient(String),
    #[error("expected {expected} patient names, got {found}")]
    NameCountMismatch { expected: usize, found: usize },
    #[error("patient row {row} is out of range for a matrix with {npatients} patients")]
    PatientOutOfRange { row: usize, npatients: usize },
    #[error("patient {patient} has an observation on the last representable day, no later day exists")]
    DayOverflow { patient: String },
}

impl InflammationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InflammationError::Io { .. } => ErrorKind::Io,
            InflammationError::Csv(err) if err.is_io_error() => ErrorKind::Io,
            InflammationError::Csv(_)
            | InflammationError::RaggedRow { .. }
            | InflammationError::InvalidToken { .. }
            | InflammationError::Shape(_) => ErrorKind::Parse,
            InflammationError::NegativeValue { .. } => ErrorKind::InvariantViolation,
            InflammationError::DuplicatePatient(_) => ErrorKind::DuplicateKey,
            InflammationError::NameCountMismatch { .. }
            | InflammationError::PatientOutOfRange { .. }
            | InflammationError::DayOverflow { .. } => ErrorKind::PreconditionFailure,
        }
    }
}
