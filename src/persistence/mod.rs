use crate::project::ProjectData;
use crate::roster::EmployeeRoster;
use crate::validation::{ProjectValidationError, validate_project};
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    Csv(csv::Error),
    InvalidData(String),
    NotFound,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            PersistenceError::NotFound => write!(f, "no project stored"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<ProjectValidationError> for PersistenceError {
    fn from(value: ProjectValidationError) -> Self {
        Self::InvalidData(value.to_string())
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Validation gate applied on every save path. Loading is permissive
/// (documents migrate and default), saving is strict.
pub fn validate_for_save(project: &ProjectData) -> PersistenceResult<()> {
    validate_project(project)?;
    Ok(())
}

pub trait ProjectStore {
    fn save_project(&self, project: &ProjectData) -> PersistenceResult<()>;
    fn load_project(&self) -> PersistenceResult<Option<ProjectData>>;
}

pub trait RosterStore {
    fn save_roster(&self, roster: &EmployeeRoster) -> PersistenceResult<()>;
    fn load_roster(&self) -> PersistenceResult<Option<EmployeeRoster>>;
}

pub mod file;
pub mod migrate;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::{
    load_project_from_json, load_roster_from_json, save_project_to_json, save_roster_to_json,
};
