use crate::budget::BudgetAllocation;
use crate::calculations::labor::LaborByCategory;
use crate::calculations::totals::CostTotals;
use crate::category::CostCategory;
use serde::{Deserialize, Serialize};

/// Budget-vs-actual state of one reporting bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Actual came in below budget (favorable).
    Under,
    /// Actual exceeded budget.
    Over,
    Match,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Under => "under",
            BudgetStatus::Over => "over",
            BudgetStatus::Match => "match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComparison {
    pub label: String,
    pub budget: f64,
    pub actual: f64,
    /// Budget minus actual; positive means savings.
    pub difference: f64,
    pub status: BudgetStatus,
}

impl CostComparison {
    pub fn new(label: impl Into<String>, budget: f64, actual: f64) -> Self {
        let difference = budget - actual;
        let status = if difference > 0.0 {
            BudgetStatus::Under
        } else if difference < 0.0 {
            BudgetStatus::Over
        } else {
            BudgetStatus::Match
        };
        Self {
            label: label.into(),
            budget,
            actual,
            difference,
            status,
        }
    }
}

/// The eleven reporting buckets: five labor categories, five non-labor
/// buckets, and the indirect cost as a single bucket.
pub fn compare_budget(
    budget: &BudgetAllocation,
    labor: &LaborByCategory,
    totals: &CostTotals,
    indirect_cost_subtotal: f64,
) -> Vec<CostComparison> {
    let mut comparisons = Vec::with_capacity(11);
    for category in CostCategory::ALL {
        let budgeted = match category {
            CostCategory::Design => budget.design_labor,
            CostCategory::Panel => budget.panel_labor,
            CostCategory::Wiring => budget.wiring_labor,
            CostCategory::Setup => budget.setup_labor,
            CostCategory::Other => budget.other_labor,
        };
        comparisons.push(CostComparison::new(
            category.label(),
            budgeted,
            labor.get(category),
        ));
    }
    comparisons.push(CostComparison::new(
        "Electrical materials",
        budget.electrical_material,
        totals.electrical_material,
    ));
    comparisons.push(CostComparison::new(
        "Travel expenses",
        budget.travel_expense,
        totals.travel_expense,
    ));
    comparisons.push(CostComparison::new(
        "Outsourcing",
        budget.outsourcing_cost,
        totals.outsourcing,
    ));
    comparisons.push(CostComparison::new(
        "Delivery & packaging",
        budget.delivery_cost,
        totals.delivery,
    ));
    comparisons.push(CostComparison::new(
        "Consumables",
        budget.consumable_cost,
        totals.consumable,
    ));
    comparisons.push(CostComparison::new(
        "Indirect costs",
        budget.overhead,
        indirect_cost_subtotal,
    ));
    comparisons
}
