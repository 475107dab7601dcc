use std::fmt;

#[derive(Debug)]
pub enum ImportError {
    /// No header row carrying the worker-name marker column was found.
    MissingHeader,
    EmptyInput,
    Csv(csv::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::MissingHeader => write!(f, "no worker header row found"),
            ImportError::EmptyInput => write!(f, "input contained no rows"),
            ImportError::Csv(err) => write!(f, "csv error: {err}"),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<csv::Error> for ImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type ImportResult<T> = Result<T, ImportError>;

pub mod remote;
pub mod sheet;

pub use remote::parse_remote_workers;
pub use sheet::{CellValue, parse_worker_sheet};
