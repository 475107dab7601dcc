use super::{PersistenceResult, migrate};
use crate::project::ProjectData;
use crate::roster::EmployeeRoster;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn save_project_to_json<P: AsRef<Path>>(
    project: &ProjectData,
    path: P,
) -> PersistenceResult<()> {
    super::validate_for_save(project)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, project)?;
    Ok(())
}

/// Loads a project document of any shape this tool has ever written,
/// migrating legacy documents to the current model.
pub fn load_project_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<ProjectData> {
    let file = File::open(path)?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    Ok(migrate::migrate_value(&value)?)
}

pub fn save_roster_to_json<P: AsRef<Path>>(
    roster: &EmployeeRoster,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, roster)?;
    Ok(())
}

pub fn load_roster_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<EmployeeRoster> {
    let file = File::open(path)?;
    let roster = serde_json::from_reader(BufReader::new(file))?;
    Ok(roster)
}
