pub mod budget;
pub mod calculations;
pub mod category;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod import;
pub mod persistence;
pub mod project;
pub mod report;
pub mod roster;
pub mod validation;
pub mod worker;

pub use budget::BudgetAllocation;
pub use calculations::labor::LaborByCategory;
pub use calculations::reconciliation::{BudgetStatus, CostComparison};
pub use calculations::summary::ProfitSummary;
pub use category::CostCategory;
pub use import::{CellValue, ImportError, parse_remote_workers, parse_worker_sheet};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteStore;
pub use persistence::{
    PersistenceError, ProjectStore, RosterStore, load_project_from_json, load_roster_from_json,
    save_project_to_json, save_roster_to_json,
};
pub use project::{
    ConsumableCost, DeliveryCost, ElectricalMaterial, OutsourcingCost, OverheadAndMargin,
    ProjectData, ProjectInfo, TravelExpense,
};
pub use report::{ReportRow, build_report, write_report_csv};
pub use roster::{EmployeeMaster, EmployeeRoster};
pub use validation::{ProjectValidationError, validate_project};
pub use worker::{ExternalWorker, InternalWorker, LaborCost};
