use crate::project::ProjectData;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ProjectValidationError {
    message: String,
}

impl ProjectValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ProjectValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ProjectValidationError {}

fn check_non_negative(value: f64, what: &str, id: &str) -> Result<(), ProjectValidationError> {
    if value < 0.0 || !value.is_finite() {
        return Err(ProjectValidationError::new(format!(
            "{what} for '{id}' must be a non-negative finite number (got {value})"
        )));
    }
    Ok(())
}

fn check_unique<'a>(
    seen: &mut HashSet<&'a str>,
    id: &'a str,
    what: &str,
) -> Result<(), ProjectValidationError> {
    if id.is_empty() {
        return Err(ProjectValidationError::new(format!(
            "{what} record has an empty id"
        )));
    }
    if !seen.insert(id) {
        return Err(ProjectValidationError::new(format!(
            "duplicate {what} id {id}"
        )));
    }
    Ok(())
}

/// Input-boundary validation: negative or non-finite monetary inputs and
/// duplicate identifiers are rejected before a record is persisted. The
/// aggregation layer itself does not validate (garbage-in passes through).
pub fn validate_project(project: &ProjectData) -> Result<(), ProjectValidationError> {
    let info = &project.project_info;
    check_non_negative(info.original_estimate, "original estimate", "project")?;
    check_non_negative(info.contract_amount, "contract amount", "project")?;
    check_non_negative(info.total_personnel, "total personnel", "project")?;
    check_non_negative(info.estimated_man_hours, "estimated man-hours", "project")?;

    let mut item_ids = HashSet::new();
    for item in &project.electrical_materials {
        check_unique(&mut item_ids, &item.id, "material")?;
        check_non_negative(item.quantity, "quantity", &item.id)?;
        check_non_negative(item.unit_price, "unit price", &item.id)?;
    }
    for item in &project.outsourcing_costs {
        check_unique(&mut item_ids, &item.id, "outsourcing")?;
        check_non_negative(item.amount, "amount", &item.id)?;
    }
    for item in &project.consumable_costs {
        check_unique(&mut item_ids, &item.id, "consumable")?;
        check_non_negative(item.amount, "amount", &item.id)?;
    }

    let travel = &project.travel_expense;
    check_non_negative(travel.accommodation_cost, "accommodation cost", "travel")?;
    check_non_negative(travel.meal_cost, "meal cost", "travel")?;
    check_non_negative(travel.transport_cost, "transport cost", "travel")?;
    let delivery = &project.delivery_cost;
    check_non_negative(delivery.shipping_cost, "shipping cost", "delivery")?;
    check_non_negative(delivery.packaging_cost, "packaging cost", "delivery")?;

    let mut worker_ids = HashSet::new();
    for worker in &project.labor.internal_workers {
        check_unique(&mut worker_ids, &worker.id, "internal worker")?;
        check_non_negative(worker.monthly_salary, "monthly salary", &worker.id)?;
        check_non_negative(worker.project_hours, "project hours", &worker.id)?;
        if let Some(rate) = worker.manual_daily_rate {
            check_non_negative(rate, "manual daily rate", &worker.id)?;
        }
    }
    for worker in &project.labor.external_workers {
        check_unique(&mut worker_ids, &worker.id, "external worker")?;
        check_non_negative(worker.daily_rate, "daily rate", &worker.id)?;
        check_non_negative(worker.total_man_days, "total man-days", &worker.id)?;
        if let Some(days) = worker.project_man_days {
            check_non_negative(days, "project man-days", &worker.id)?;
        }
    }

    Ok(())
}
