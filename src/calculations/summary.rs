use crate::calculations::labor::{LaborByCategory, labor_cost_by_category};
use crate::calculations::reconciliation::{CostComparison, compare_budget};
use crate::calculations::totals::CostTotals;
use crate::project::ProjectData;
use serde::{Deserialize, Serialize};

/// The full computed report: cost totals, profit figures, budget
/// reconciliation, and productivity ratios. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub total_revenue: f64,
    // Direct costs
    pub design_labor_total: f64,
    pub panel_labor_total: f64,
    pub wiring_labor_total: f64,
    pub setup_labor_total: f64,
    pub other_labor_total: f64,
    pub labor_cost_total: f64,
    pub electrical_material_total: f64,
    pub travel_expense_total: f64,
    pub outsourcing_cost_total: f64,
    pub delivery_cost_total: f64,
    pub consumable_cost_total: f64,
    pub direct_cost_subtotal: f64,
    // Indirect costs
    pub overhead_cost: f64,
    pub warranty_reserve_cost: f64,
    pub indirect_cost_subtotal: f64,
    // Totals and profit
    pub total_cost: f64,
    pub profit: f64,
    pub profit_rate: f64,
    pub target_margin: f64,
    pub margin_difference: f64,
    // Budget reconciliation
    pub budget_total: f64,
    pub unallocated: f64,
    pub cost_comparisons: Vec<CostComparison>,
    // Productivity
    pub total_personnel: f64,
    pub estimated_man_hours: f64,
    pub revenue_per_person: f64,
    pub value_added_per_person: f64,
    pub efficiency_per_man_hour: f64,
}

impl ProfitSummary {
    /// Recompute the whole report from the current record set. Later terms
    /// depend on earlier subtotals, so the order below is load-bearing.
    pub fn compute(project: &ProjectData) -> Self {
        let total_revenue = project.project_info.contract_amount;

        let labor: LaborByCategory = labor_cost_by_category(&project.labor);
        let labor_cost_total = labor.total();
        let totals = CostTotals::from_project(project);

        let direct_cost_subtotal = labor_cost_total + totals.sum();

        let rates = &project.overhead_and_margin;
        let overhead_cost = direct_cost_subtotal * rates.overhead_rate / 100.0;
        // Warranty risk scales with contract size, not cost structure.
        let warranty_reserve_cost = total_revenue * rates.warranty_reserve_rate / 100.0;
        let indirect_cost_subtotal = overhead_cost + warranty_reserve_cost;

        let total_cost = direct_cost_subtotal + indirect_cost_subtotal;
        let profit = total_revenue - total_cost;
        let profit_rate = if total_revenue > 0.0 {
            profit / total_revenue * 100.0
        } else {
            0.0
        };
        let target_margin = rates.margin_rate;
        let margin_difference = profit_rate - target_margin;

        let budget_total = project.budget_allocation.total();
        let unallocated = total_revenue - budget_total;
        let cost_comparisons = compare_budget(
            &project.budget_allocation,
            &labor,
            &totals,
            indirect_cost_subtotal,
        );

        let total_personnel = project.project_info.total_personnel;
        let estimated_man_hours = project.project_info.estimated_man_hours;
        let revenue_per_person = if total_personnel > 0.0 {
            total_revenue / total_personnel
        } else {
            0.0
        };
        let value_added_per_person = if total_personnel > 0.0 {
            (total_revenue - direct_cost_subtotal) / total_personnel
        } else {
            0.0
        };
        let efficiency_per_man_hour = if estimated_man_hours > 0.0 {
            total_revenue / estimated_man_hours
        } else {
            0.0
        };

        Self {
            total_revenue,
            design_labor_total: labor.design,
            panel_labor_total: labor.panel,
            wiring_labor_total: labor.wiring,
            setup_labor_total: labor.setup,
            other_labor_total: labor.other,
            labor_cost_total,
            electrical_material_total: totals.electrical_material,
            travel_expense_total: totals.travel_expense,
            outsourcing_cost_total: totals.outsourcing,
            delivery_cost_total: totals.delivery,
            consumable_cost_total: totals.consumable,
            direct_cost_subtotal,
            overhead_cost,
            warranty_reserve_cost,
            indirect_cost_subtotal,
            total_cost,
            profit,
            profit_rate,
            target_margin,
            margin_difference,
            budget_total,
            unallocated,
            cost_comparisons,
            total_personnel,
            estimated_man_hours,
            revenue_per_person,
            value_added_per_person,
            efficiency_per_man_hour,
        }
    }

    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("revenue={}", self.total_revenue));
        parts.push(format!("direct={}", self.direct_cost_subtotal));
        parts.push(format!("indirect={}", self.indirect_cost_subtotal));
        parts.push(format!("cost={}", self.total_cost));
        parts.push(format!("profit={}", self.profit));
        parts.push(format!("rate={:.1}%", self.profit_rate));
        if self.unallocated != 0.0 {
            parts.push(format!("unallocated={}", self.unallocated));
        }
        let over_budget = self
            .cost_comparisons
            .iter()
            .filter(|c| c.status == crate::calculations::reconciliation::BudgetStatus::Over)
            .count();
        if over_budget > 0 {
            parts.push(format!("over_budget_buckets={over_budget}"));
        }
        parts.join(", ")
    }
}
