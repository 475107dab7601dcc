use cost_tool::persistence::migrate::migrate_value;
use cost_tool::{CostCategory, ProjectData, load_project_from_json, save_project_to_json};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn legacy_document() -> serde_json::Value {
    json!({
        "projectInfo": {
            "projectName": "Legacy line",
            "clientName": "ACME",
            "contractAmount": 80_000_000.0,
            "totalPersonnel": 3,
            "estimatedManHours": 1200
        },
        "electricalMaterials": [
            { "id": "m1", "category": "PLC", "itemName": "CPU", "quantity": 2, "unitPrice": 1_500_000.0 }
        ],
        "travelExpense": { "accommodationCost": 500_000.0, "mealCost": 200_000.0, "transportCost": 100_000.0 },
        "outsourcingCosts": [
            { "id": "o1", "vendor": "SubCo", "description": "panel build", "amount": 4_000_000.0 }
        ],
        "deliveryCost": { "shippingCost": 300_000.0, "packagingCost": 50_000.0 },
        "consumableCosts": [
            { "id": "c1", "itemName": "cable ties", "amount": 30_000.0 }
        ],
        "overheadAndMargin": { "overheadRate": 12, "warrantyReserveRate": 2, "marginRate": 20 },
        "budgetAllocation": {
            "designCost": 1_000_000.0,
            "wiringCost": 2_000_000.0,
            "manHourCost": 5_000_000.0,
            "electricalMaterial": 3_000_000.0,
            "overhead": 1_000_000.0
        },
        "manHourCost": {
            "workers": [
                { "id": "w1", "personName": "Hong", "company": "ABC", "rank": "기사",
                  "dailyRate": 250_000.0, "totalManDays": 10.0,
                  "monthlyManDays": [2.0, 3.0, 5.0] }
            ]
        }
    })
}

#[test]
fn legacy_document_migrates_completely() {
    let project = migrate_value(&legacy_document()).unwrap();

    assert_eq!(project.project_info.project_name, "Legacy line");
    assert_eq!(project.project_info.contract_amount, 80_000_000.0);
    assert_eq!(project.electrical_materials.len(), 1);
    assert_eq!(project.electrical_materials[0].unit_price, 1_500_000.0);
    assert_eq!(project.travel_expense.accommodation_cost, 500_000.0);
    assert_eq!(project.outsourcing_costs[0].vendor, "SubCo");
    assert_eq!(project.delivery_cost.shipping_cost, 300_000.0);
    assert_eq!(project.consumable_costs[0].amount, 30_000.0);
    assert_eq!(project.overhead_and_margin.overhead_rate, 12.0);
    assert_eq!(project.overhead_and_margin.margin_rate, 20.0);

    // Single legacy labor bucket folds into wiring.
    assert_eq!(project.budget_allocation.design_labor, 1_000_000.0);
    assert_eq!(project.budget_allocation.wiring_labor, 7_000_000.0);
    assert_eq!(project.budget_allocation.other_labor, 0.0);

    // Legacy workers land in the external list with the wiring default.
    assert!(project.labor.internal_workers.is_empty());
    let worker = &project.labor.external_workers[0];
    assert_eq!(worker.id, "w1");
    assert_eq!(worker.daily_rate, 250_000.0);
    assert_eq!(worker.cost_category, CostCategory::Wiring);
    assert_eq!(worker.monthly_man_days, vec![2.0, 3.0, 5.0]);
}

#[test]
fn migration_is_idempotent() {
    let migrated = migrate_value(&legacy_document()).unwrap();
    let roundtrip = migrate_value(&serde_json::to_value(&migrated).unwrap()).unwrap();
    assert_eq!(roundtrip, migrated);
}

#[test]
fn missing_legacy_sections_default() {
    let project = migrate_value(&json!({ "projectInfo": { "projectName": "Bare" } })).unwrap();
    assert_eq!(project.project_info.project_name, "Bare");
    assert_eq!(project.overhead_and_margin.overhead_rate, 10.0);
    assert_eq!(project.overhead_and_margin.warranty_reserve_rate, 3.0);
    assert_eq!(project.overhead_and_margin.margin_rate, 15.0);
    assert!(project.labor.external_workers.is_empty());
    assert_eq!(project.budget_allocation.total(), 0.0);
}

#[test]
fn load_from_file_migrates_legacy_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", legacy_document()).unwrap();
    let project = load_project_from_json(file.path()).unwrap();
    assert_eq!(project.project_info.project_name, "Legacy line");
    assert_eq!(project.budget_allocation.wiring_labor, 7_000_000.0);
}

#[test]
fn save_then_load_preserves_current_shape() {
    let mut project = ProjectData::new();
    project.project_info.project_name = "Current".into();
    project.labor.add_external().daily_rate = 250_000.0;

    let file = NamedTempFile::new().unwrap();
    save_project_to_json(&project, file.path()).unwrap();
    let loaded = load_project_from_json(file.path()).unwrap();
    assert_eq!(loaded, project);
}
