#![cfg(feature = "sqlite")]

use cost_tool::{
    EmployeeMaster, EmployeeRoster, ProjectData, ProjectStore, RosterStore, SqliteStore,
};
use rusqlite::{Connection, params};
use tempfile::NamedTempFile;

#[test]
fn sqlite_store_round_trip_project() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteStore::new(file.path()).unwrap();

    assert!(store.load_project().unwrap().is_none());

    let mut project = ProjectData::new();
    project.project_info.project_name = "SQLite project".into();
    project.project_info.contract_amount = 10_000_000.0;
    project.labor.add_external().daily_rate = 250_000.0;

    store.save_project(&project).unwrap();
    let loaded = store.load_project().unwrap().unwrap();
    assert_eq!(loaded, project);

    // Saving again replaces the single row.
    project.project_info.client_name = "ACME".into();
    store.save_project(&project).unwrap();
    let loaded = store.load_project().unwrap().unwrap();
    assert_eq!(loaded.project_info.client_name, "ACME");
}

#[test]
fn sqlite_store_rejects_invalid_project() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteStore::new(file.path()).unwrap();

    let mut project = ProjectData::new();
    project.add_consumable().amount = -1.0;
    assert!(store.save_project(&project).is_err());
    assert!(store.load_project().unwrap().is_none());
}

#[test]
fn sqlite_store_round_trip_roster() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteStore::new(file.path()).unwrap();

    assert!(store.load_roster().unwrap().is_none());

    let roster = EmployeeRoster::default().add(EmployeeMaster {
        person_name: "Kim".into(),
        monthly_salary: 3_300_000.0,
        ..EmployeeMaster::default()
    });
    store.save_roster(&roster).unwrap();
    let loaded = store.load_roster().unwrap().unwrap();
    assert_eq!(loaded, roster);
}

#[test]
fn sqlite_store_migrates_legacy_rows_on_read() {
    let file = NamedTempFile::new().unwrap();
    {
        let conn = Connection::open(file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS project (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                project_json TEXT NOT NULL
            );",
        )
        .unwrap();
        let legacy = r#"{
            "projectInfo": { "projectName": "Old row" },
            "budgetAllocation": { "wiringCost": 1000, "manHourCost": 2000 }
        }"#;
        conn.execute(
            "INSERT INTO project (id, project_json) VALUES (1, ?1)",
            params![legacy],
        )
        .unwrap();
    }

    let store = SqliteStore::new(file.path()).unwrap();
    let project = store.load_project().unwrap().unwrap();
    assert_eq!(project.project_info.project_name, "Old row");
    assert_eq!(project.budget_allocation.wiring_labor, 3000.0);
}
