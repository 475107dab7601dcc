use crate::category::CostCategory;
use crate::worker::{ExternalWorker, InternalWorker, LaborCost};

/// Per-category labor cost roll-up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaborByCategory {
    pub design: f64,
    pub panel: f64,
    pub wiring: f64,
    pub setup: f64,
    pub other: f64,
}

impl LaborByCategory {
    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Design => self.design,
            CostCategory::Panel => self.panel,
            CostCategory::Wiring => self.wiring,
            CostCategory::Setup => self.setup,
            CostCategory::Other => self.other,
        }
    }

    fn get_mut(&mut self, category: CostCategory) -> &mut f64 {
        match category {
            CostCategory::Design => &mut self.design,
            CostCategory::Panel => &mut self.panel,
            CostCategory::Wiring => &mut self.wiring,
            CostCategory::Setup => &mut self.setup,
            CostCategory::Other => &mut self.other,
        }
    }

    pub fn total(&self) -> f64 {
        self.design + self.panel + self.wiring + self.setup + self.other
    }
}

/// Daily rate for a salaried worker: manual override when positive,
/// otherwise salary divided into working days with the overhead markup.
/// A zero working-day divisor yields 0 rather than an error.
pub fn internal_daily_rate(worker: &InternalWorker) -> f64 {
    if let Some(rate) = worker.manual_daily_rate {
        if rate > 0.0 {
            return rate;
        }
    }
    if worker.working_days_per_month <= 0.0 {
        return 0.0;
    }
    let base = worker.monthly_salary / worker.working_days_per_month;
    (base * (1.0 + worker.overhead_rate / 100.0)).round()
}

/// Hours on this project converted to man-days. Fractional days retained.
pub fn internal_man_days(worker: &InternalWorker) -> f64 {
    if worker.hours_per_day <= 0.0 {
        return 0.0;
    }
    worker.project_hours / worker.hours_per_day
}

pub fn internal_worker_cost(worker: &InternalWorker) -> f64 {
    (internal_daily_rate(worker) * internal_man_days(worker)).round()
}

/// Man-days attributable to this project; falls back to the contracted total.
pub fn external_man_days(worker: &ExternalWorker) -> f64 {
    worker.project_man_days.unwrap_or(worker.total_man_days)
}

pub fn external_worker_cost(worker: &ExternalWorker) -> f64 {
    worker.daily_rate * external_man_days(worker)
}

pub fn labor_cost_by_category(labor: &LaborCost) -> LaborByCategory {
    let mut result = LaborByCategory::default();
    for worker in &labor.internal_workers {
        *result.get_mut(worker.cost_category) += internal_worker_cost(worker);
    }
    for worker in &labor.external_workers {
        *result.get_mut(worker.cost_category) += external_worker_cost(worker);
    }
    result
}

pub fn labor_cost_total(labor: &LaborCost) -> f64 {
    labor_cost_by_category(labor).total()
}

pub fn internal_total(labor: &LaborCost) -> f64 {
    labor.internal_workers.iter().map(internal_worker_cost).sum()
}

pub fn external_total(labor: &LaborCost) -> f64 {
    labor.external_workers.iter().map(external_worker_cost).sum()
}

pub fn internal_man_days_total(labor: &LaborCost) -> f64 {
    labor.internal_workers.iter().map(internal_man_days).sum()
}

pub fn internal_hours_total(labor: &LaborCost) -> f64 {
    labor.internal_workers.iter().map(|w| w.project_hours).sum()
}

pub fn external_man_days_total(labor: &LaborCost) -> f64 {
    labor.external_workers.iter().map(external_man_days).sum()
}

/// Labor cost booked in one calendar month, external workers only (internal
/// workers carry no month breakdown). `month` is 1-based; out of range ⇒ 0.
pub fn monthly_labor_cost(labor: &LaborCost, month: u32) -> f64 {
    if !(1..=12).contains(&month) {
        return 0.0;
    }
    labor
        .external_workers
        .iter()
        .map(|worker| {
            let days = worker
                .monthly_man_days
                .get(month as usize - 1)
                .copied()
                .unwrap_or(0.0);
            days * worker.daily_rate
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_rate_must_be_positive_to_override() {
        let worker = InternalWorker {
            monthly_salary: 2_200_000.0,
            manual_daily_rate: Some(0.0),
            ..InternalWorker::default()
        };
        // Zero manual rate falls through to the salary-derived rate.
        assert_eq!(internal_daily_rate(&worker), (100_000.0f64 * 1.15).round());
    }

    #[test]
    fn monthly_labor_cost_handles_missing_buckets() {
        let mut labor = LaborCost::default();
        labor.external_workers.push(ExternalWorker {
            daily_rate: 100_000.0,
            monthly_man_days: vec![2.0, 3.0],
            ..ExternalWorker::default()
        });
        assert_eq!(monthly_labor_cost(&labor, 1), 200_000.0);
        assert_eq!(monthly_labor_cost(&labor, 2), 300_000.0);
        assert_eq!(monthly_labor_cost(&labor, 3), 0.0);
        assert_eq!(monthly_labor_cost(&labor, 13), 0.0);
    }
}
