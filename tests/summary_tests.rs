use cost_tool::{ProfitSummary, ProjectData};

/// Contract of 100M with 60M of direct cost at the default rates.
fn project_with_direct_costs() -> ProjectData {
    let mut project = ProjectData::new();
    project.project_info.contract_amount = 100_000_000.0;
    project.add_outsourcing().amount = 60_000_000.0;
    project
}

#[test]
fn profit_chain_from_direct_costs() {
    let summary = ProfitSummary::compute(&project_with_direct_costs());
    assert_eq!(summary.direct_cost_subtotal, 60_000_000.0);
    // Overhead 10% of direct, warranty 3% of contract.
    assert_eq!(summary.overhead_cost, 6_000_000.0);
    assert_eq!(summary.warranty_reserve_cost, 3_000_000.0);
    assert_eq!(summary.indirect_cost_subtotal, 9_000_000.0);
    assert_eq!(summary.total_cost, 69_000_000.0);
    assert_eq!(summary.profit, 31_000_000.0);
    assert_eq!(summary.profit_rate, 31.0);
    assert_eq!(summary.target_margin, 15.0);
    assert_eq!(summary.margin_difference, 16.0);
}

#[test]
fn warranty_reserve_scales_with_contract_not_cost() {
    let mut project = ProjectData::new();
    project.project_info.contract_amount = 50_000_000.0;
    // No direct costs at all.
    let summary = ProfitSummary::compute(&project);
    assert_eq!(summary.overhead_cost, 0.0);
    assert_eq!(summary.warranty_reserve_cost, 1_500_000.0);
}

#[test]
fn zero_revenue_guards_profit_rate() {
    let mut project = ProjectData::new();
    project.add_outsourcing().amount = 1_000_000.0;
    let summary = ProfitSummary::compute(&project);
    assert!(summary.profit < 0.0);
    assert_eq!(summary.profit_rate, 0.0);
    assert_eq!(summary.margin_difference, -15.0);
}

#[test]
fn productivity_ratios() {
    let mut project = project_with_direct_costs();
    project.project_info.total_personnel = 4.0;
    project.project_info.estimated_man_hours = 2_000.0;
    let summary = ProfitSummary::compute(&project);
    assert_eq!(summary.revenue_per_person, 25_000_000.0);
    assert_eq!(summary.value_added_per_person, 10_000_000.0);
    assert_eq!(summary.efficiency_per_man_hour, 50_000.0);
}

#[test]
fn productivity_guards_on_zero_inputs() {
    let summary = ProfitSummary::compute(&project_with_direct_costs());
    assert_eq!(summary.revenue_per_person, 0.0);
    assert_eq!(summary.value_added_per_person, 0.0);
    assert_eq!(summary.efficiency_per_man_hour, 0.0);
}

#[test]
fn unallocated_budget_is_revenue_minus_budget_total() {
    let mut project = project_with_direct_costs();
    project.budget_allocation.outsourcing_cost = 55_000_000.0;
    project.budget_allocation.overhead = 9_000_000.0;
    let summary = ProfitSummary::compute(&project);
    assert_eq!(summary.budget_total, 64_000_000.0);
    assert_eq!(summary.unallocated, 36_000_000.0);
}

#[test]
fn summary_serializes_with_comparisons() {
    let summary = ProfitSummary::compute(&project_with_direct_costs());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_cost"], 69_000_000.0);
    assert_eq!(json["cost_comparisons"].as_array().unwrap().len(), 11);
}
