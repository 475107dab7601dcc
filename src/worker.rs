use crate::category::CostCategory;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORKING_DAYS_PER_MONTH: f64 = 22.0;
pub const DEFAULT_WORKER_OVERHEAD_RATE: f64 = 15.0;
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

/// Salaried contributor whose daily rate is derived from a monthly salary
/// plus an overhead markup, unless a manual rate overrides it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternalWorker {
    pub id: String,
    pub person_name: String,
    pub rank: String,
    pub monthly_salary: f64,
    pub working_days_per_month: f64,
    pub overhead_rate: f64,
    pub hours_per_day: f64,
    /// Hours allocated to this project; converted to man-days for cost math.
    pub project_hours: f64,
    pub cost_category: CostCategory,
    /// Back-reference to the employee master record this worker was hired from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Overrides the salary-derived rate when present and positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_daily_rate: Option<f64>,
}

impl Default for InternalWorker {
    fn default() -> Self {
        Self {
            id: String::new(),
            person_name: String::new(),
            rank: String::new(),
            monthly_salary: 0.0,
            working_days_per_month: DEFAULT_WORKING_DAYS_PER_MONTH,
            overhead_rate: DEFAULT_WORKER_OVERHEAD_RATE,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            project_hours: 0.0,
            cost_category: CostCategory::default(),
            employee_id: None,
            manual_daily_rate: None,
        }
    }
}

/// Subcontracted contributor with a directly quoted daily rate.
///
/// `total_man_days` records the whole contracted engagement; `project_man_days`
/// holds the days attributable to this project. Cost uses the project figure
/// when present, so a worker's contract can exceed this project's share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalWorker {
    pub id: String,
    pub person_name: String,
    pub company: String,
    pub rank: String,
    pub daily_rate: f64,
    pub total_man_days: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_man_days: Option<f64>,
    /// Month buckets, index 0 = January.
    pub monthly_man_days: Vec<f64>,
    /// Optional per-day breakdown, 12 months of up to 31 entries each.
    pub daily_man_days_per_month: Vec<Vec<f64>>,
    pub cost_category: CostCategory,
}

impl Default for ExternalWorker {
    fn default() -> Self {
        Self {
            id: String::new(),
            person_name: String::new(),
            company: String::new(),
            rank: String::new(),
            daily_rate: 0.0,
            total_man_days: 0.0,
            project_man_days: None,
            monthly_man_days: Vec::new(),
            daily_man_days_per_month: Vec::new(),
            cost_category: CostCategory::default(),
        }
    }
}

/// Labor sub-record of a project: both worker kinds plus import provenance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborCost {
    pub internal_workers: Vec<InternalWorker>,
    pub external_workers: Vec<ExternalWorker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_at: Option<String>,
}

impl LaborCost {
    pub fn add_internal(&mut self) -> &mut InternalWorker {
        self.internal_workers.push(InternalWorker {
            id: crate::project::fresh_id("int"),
            ..InternalWorker::default()
        });
        self.internal_workers.last_mut().expect("just pushed")
    }

    pub fn remove_internal(&mut self, id: &str) -> bool {
        let before = self.internal_workers.len();
        self.internal_workers.retain(|worker| worker.id != id);
        self.internal_workers.len() != before
    }

    pub fn add_external(&mut self) -> &mut ExternalWorker {
        self.external_workers.push(ExternalWorker {
            id: crate::project::fresh_id("ext"),
            ..ExternalWorker::default()
        });
        self.external_workers.last_mut().expect("just pushed")
    }

    pub fn remove_external(&mut self, id: &str) -> bool {
        let before = self.external_workers.len();
        self.external_workers.retain(|worker| worker.id != id);
        self.external_workers.len() != before
    }

    /// Replace the imported worker set wholesale, keeping manual entries out.
    pub fn replace_external(&mut self, workers: Vec<ExternalWorker>, source_file: Option<String>) {
        self.external_workers = workers;
        self.source_file = source_file;
        self.imported_at = Some(chrono::Utc::now().to_rfc3339());
    }
}
