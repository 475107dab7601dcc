use crate::project::fresh_id;
use crate::worker::{
    DEFAULT_HOURS_PER_DAY, DEFAULT_WORKER_OVERHEAD_RATE, DEFAULT_WORKING_DAYS_PER_MONTH,
    InternalWorker,
};
use serde::{Deserialize, Serialize};

/// Reusable roster entry, independent of any single project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeMaster {
    pub id: String,
    pub person_name: String,
    pub rank: String,
    pub monthly_salary: f64,
    pub working_days_per_month: f64,
    pub overhead_rate: f64,
    pub hours_per_day: f64,
}

impl Default for EmployeeMaster {
    fn default() -> Self {
        Self {
            id: String::new(),
            person_name: String::new(),
            rank: String::new(),
            monthly_salary: 0.0,
            working_days_per_month: DEFAULT_WORKING_DAYS_PER_MONTH,
            overhead_rate: DEFAULT_WORKER_OVERHEAD_RATE,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }
}

/// Value-semantics snapshot of the employee roster. Mutating operations
/// return a new snapshot; the backing store decides when to persist one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRoster {
    pub employees: Vec<EmployeeMaster>,
}

impl EmployeeRoster {
    pub fn new(employees: Vec<EmployeeMaster>) -> Self {
        Self { employees }
    }

    pub fn find(&self, id: &str) -> Option<&EmployeeMaster> {
        self.employees.iter().find(|emp| emp.id == id)
    }

    pub fn add(&self, mut employee: EmployeeMaster) -> Self {
        if employee.id.is_empty() {
            employee.id = fresh_id("emp");
        }
        let mut employees = self.employees.clone();
        employees.push(employee);
        Self { employees }
    }

    pub fn update(&self, id: &str, updated: EmployeeMaster) -> Self {
        let employees = self
            .employees
            .iter()
            .map(|emp| {
                if emp.id == id {
                    EmployeeMaster {
                        id: emp.id.clone(),
                        ..updated.clone()
                    }
                } else {
                    emp.clone()
                }
            })
            .collect();
        Self { employees }
    }

    pub fn remove(&self, id: &str) -> Self {
        let employees = self
            .employees
            .iter()
            .filter(|emp| emp.id != id)
            .cloned()
            .collect();
        Self { employees }
    }
}

impl InternalWorker {
    /// Instantiate a project worker from a roster entry, keeping the
    /// back-reference so later roster edits can be traced.
    pub fn from_employee(employee: &EmployeeMaster) -> Self {
        Self {
            id: fresh_id("int"),
            person_name: employee.person_name.clone(),
            rank: employee.rank.clone(),
            monthly_salary: employee.monthly_salary,
            working_days_per_month: employee.working_days_per_month,
            overhead_rate: employee.overhead_rate,
            hours_per_day: employee.hours_per_day,
            employee_id: Some(employee.id.clone()),
            ..InternalWorker::default()
        }
    }
}
