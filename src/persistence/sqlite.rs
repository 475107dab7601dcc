use super::{PersistenceResult, ProjectStore, RosterStore, migrate};
use crate::project::ProjectData;
use crate::roster::EmployeeRoster;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

/// Single-document store: one project record and one roster record per
/// database file, each persisted as a JSON column.
pub struct SqliteStore {
    connection: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            PRAGMA foreign_keys = ON;
            CREATE TABLE IF NOT EXISTS project (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                project_json TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS employee_roster (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                roster_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl ProjectStore for SqliteStore {
    fn save_project(&self, project: &ProjectData) -> PersistenceResult<()> {
        super::validate_for_save(project)?;
        let json = serde_json::to_string(project)?;
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM project", [])?;
        tx.execute(
            "INSERT INTO project (id, project_json) VALUES (1, ?1)",
            params![json],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn load_project(&self) -> PersistenceResult<Option<ProjectData>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare("SELECT project_json FROM project WHERE id = 1")?;
        let json_opt: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
        let Some(json) = json_opt else {
            return Ok(None);
        };
        // Rows written by older releases migrate on read.
        let value: serde_json::Value = serde_json::from_str(&json)?;
        Ok(Some(migrate::migrate_value(&value)?))
    }
}

impl RosterStore for SqliteStore {
    fn save_roster(&self, roster: &EmployeeRoster) -> PersistenceResult<()> {
        let json = serde_json::to_string(roster)?;
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM employee_roster", [])?;
        tx.execute(
            "INSERT INTO employee_roster (id, roster_json) VALUES (1, ?1)",
            params![json],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn load_roster(&self) -> PersistenceResult<Option<EmployeeRoster>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare("SELECT roster_json FROM employee_roster WHERE id = 1")?;
        let json_opt: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
        let Some(json) = json_opt else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&json)?))
    }
}
