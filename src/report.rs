//! Flat report rows built from a computed summary, plus a CSV writer.
//! Styled spreadsheet rendering is a front-end concern and stays out of
//! this crate; consumers get ordered rows of cells.

use crate::calculations::summary::ProfitSummary;
use crate::persistence::PersistenceResult;
use crate::project::ProjectData;
use std::fs::File;
use std::path::Path;

/// One report line: a label column followed by value columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub cells: Vec<String>,
}

impl ReportRow {
    fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    fn blank() -> Self {
        Self { cells: Vec::new() }
    }
}

fn money(value: f64) -> String {
    format!("{value:.0}")
}

fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

fn line(label: &str, value: f64) -> ReportRow {
    ReportRow::new([label.to_string(), money(value)])
}

/// Build the full report in presentation order: project info, direct costs,
/// indirect costs, profit, budget-vs-actual table, productivity.
pub fn build_report(project: &ProjectData, summary: &ProfitSummary) -> Vec<ReportRow> {
    let info = &project.project_info;
    let mut rows = vec![
        ReportRow::new(["Project cost report"]),
        ReportRow::blank(),
        ReportRow::new(["Project", info.project_name.as_str()]),
        ReportRow::new(["Client", info.client_name.as_str()]),
        line("Original estimate", info.original_estimate),
        line("Contract amount", info.contract_amount),
        ReportRow::blank(),
        ReportRow::new(["Direct costs"]),
        line("Design labor", summary.design_labor_total),
        line("Panel labor", summary.panel_labor_total),
        line("Wiring labor", summary.wiring_labor_total),
        line("Setup labor", summary.setup_labor_total),
        line("Other labor", summary.other_labor_total),
        line("Labor subtotal", summary.labor_cost_total),
        line("Electrical materials", summary.electrical_material_total),
        line("Travel expenses", summary.travel_expense_total),
        line("Outsourcing", summary.outsourcing_cost_total),
        line("Delivery & packaging", summary.delivery_cost_total),
        line("Consumables", summary.consumable_cost_total),
        line("Direct cost subtotal", summary.direct_cost_subtotal),
        ReportRow::blank(),
        ReportRow::new(["Indirect costs"]),
        line("Overhead", summary.overhead_cost),
        line("Warranty reserve", summary.warranty_reserve_cost),
        line("Indirect cost subtotal", summary.indirect_cost_subtotal),
        ReportRow::blank(),
        ReportRow::new(["Profit"]),
        line("Total cost", summary.total_cost),
        line("Profit", summary.profit),
        ReportRow::new(["Profit rate".to_string(), percent(summary.profit_rate)]),
        ReportRow::new(["Target margin".to_string(), percent(summary.target_margin)]),
        ReportRow::new([
            "Margin difference".to_string(),
            percent(summary.margin_difference),
        ]),
        ReportRow::blank(),
        ReportRow::new(["Budget vs actual"]),
        ReportRow::new(["Item", "Budget", "Actual", "Difference", "Status"]),
    ];

    for comparison in &summary.cost_comparisons {
        rows.push(ReportRow::new([
            comparison.label.clone(),
            money(comparison.budget),
            money(comparison.actual),
            money(comparison.difference),
            comparison.status.as_str().to_string(),
        ]));
    }
    rows.push(line("Budget total", summary.budget_total));
    rows.push(line("Unallocated", summary.unallocated));

    rows.push(ReportRow::blank());
    rows.push(ReportRow::new(["Productivity"]));
    rows.push(line("Personnel", summary.total_personnel));
    rows.push(line("Estimated man-hours", summary.estimated_man_hours));
    rows.push(line("Revenue per person", summary.revenue_per_person));
    rows.push(line("Value added per person", summary.value_added_per_person));
    rows.push(line("Revenue per man-hour", summary.efficiency_per_man_hour));

    rows
}

pub fn write_report_csv<P: AsRef<Path>>(rows: &[ReportRow], path: P) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(file);
    for row in rows {
        if row.cells.is_empty() {
            writer.write_record([""])?;
        } else {
            writer.write_record(&row.cells)?;
        }
    }
    writer.flush()?;
    Ok(())
}
