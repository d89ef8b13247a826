use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("data file is empty")]
    EmptyFile,
    #[error("line {line}: expected at most {expected} fields, found {found}")]
    RowTooLong {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Csv,
    EmptyFile,
    RowTooLong,
    InvalidDataPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Csv(_) => StoreErrorKind::Csv,
            StoreError::EmptyFile => StoreErrorKind::EmptyFile,
            StoreError::RowTooLong { .. } => StoreErrorKind::RowTooLong,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
        }
    }
}
