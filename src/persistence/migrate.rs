//! Reshapes previously-persisted project documents into the current data
//! model. Each known legacy shape gets its own struct and a total, never
//! failing conversion; per-field absence is defaulted, and only a wholly
//! unreadable document is reported as an error.

use crate::budget::BudgetAllocation;
use crate::category::CostCategory;
use crate::project::{
    ConsumableCost, DeliveryCost, ElectricalMaterial, OutsourcingCost, OverheadAndMargin,
    ProjectData, ProjectInfo, TravelExpense, fresh_id,
};
use crate::worker::{ExternalWorker, LaborCost};
use serde::Deserialize;
use serde_json::Value;

/// Persisted project document in one of the shapes this tool has written.
#[derive(Debug)]
pub enum StoredProject {
    Current(ProjectData),
    /// The original desktop-app schema: camelCase field names, a single
    /// undifferentiated man-hour worker list, and one labor budget bucket.
    LegacyV1(LegacyProjectV1),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyProjectV1 {
    pub project_info: LegacyProjectInfo,
    pub electrical_materials: Vec<LegacyMaterial>,
    pub travel_expense: LegacyTravelExpense,
    pub outsourcing_costs: Vec<LegacyOutsourcing>,
    pub delivery_cost: LegacyDelivery,
    pub consumable_costs: Vec<LegacyConsumable>,
    pub overhead_and_margin: Option<LegacyOverheadAndMargin>,
    pub budget_allocation: Option<LegacyBudgetAllocation>,
    pub man_hour_cost: Option<LegacyManHourCost>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyProjectInfo {
    pub project_name: String,
    pub client_name: String,
    pub original_estimate: f64,
    pub contract_amount: f64,
    pub total_personnel: f64,
    pub estimated_man_hours: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyMaterial {
    pub id: String,
    pub category: String,
    pub item_name: String,
    pub quantity: f64,
    pub unit_price: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyTravelExpense {
    pub accommodation_cost: f64,
    pub meal_cost: f64,
    pub transport_cost: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyOutsourcing {
    pub id: String,
    pub vendor: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyDelivery {
    pub shipping_cost: f64,
    pub packaging_cost: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyConsumable {
    pub id: String,
    pub item_name: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyOverheadAndMargin {
    pub overhead_rate: f64,
    pub warranty_reserve_rate: f64,
    pub margin_rate: f64,
}

impl Default for LegacyOverheadAndMargin {
    fn default() -> Self {
        Self {
            overhead_rate: 10.0,
            warranty_reserve_rate: 3.0,
            margin_rate: 15.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyBudgetAllocation {
    pub design_cost: f64,
    pub electrical_material: f64,
    pub panel_cost: f64,
    pub wiring_cost: f64,
    pub travel_expense: f64,
    pub setup_cost: f64,
    pub outsourcing_cost: f64,
    pub delivery_cost: f64,
    pub consumable_cost: f64,
    pub overhead: f64,
    /// The single labor bucket that was later split into five category
    /// buckets; remapped one-to-one into the wiring bucket on migration.
    pub man_hour_cost: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyManHourCost {
    pub workers: Vec<LegacyManHourWorker>,
    pub source_file: Option<String>,
    pub imported_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyManHourWorker {
    pub id: String,
    pub person_name: String,
    pub company: String,
    pub rank: String,
    pub daily_rate: f64,
    pub total_man_days: f64,
    pub project_man_days: Option<f64>,
    pub monthly_man_days: Vec<f64>,
    pub daily_man_days_per_month: Vec<Vec<f64>>,
    pub cost_category: Option<String>,
}

const LEGACY_MARKER_KEYS: [&str; 8] = [
    "projectInfo",
    "electricalMaterials",
    "designCosts",
    "panelCosts",
    "wiringCosts",
    "manHourCost",
    "budgetAllocation",
    "overheadAndMargin",
];

/// Decide which persisted shape a document is in. CamelCase marker keys
/// identify the original desktop-app schema; everything else is treated as
/// the current shape (missing fields default during deserialization).
pub fn detect_shape(value: &Value) -> Result<StoredProject, serde_json::Error> {
    let is_legacy = value
        .as_object()
        .map(|map| LEGACY_MARKER_KEYS.iter().any(|key| map.contains_key(*key)))
        .unwrap_or(false);
    if is_legacy {
        Ok(StoredProject::LegacyV1(serde_json::from_value(
            value.clone(),
        )?))
    } else {
        Ok(StoredProject::Current(serde_json::from_value(
            value.clone(),
        )?))
    }
}

/// Migrate a parsed document of any known shape to the current model.
/// Idempotent on current-shape input.
pub fn migrate_value(value: &Value) -> Result<ProjectData, serde_json::Error> {
    match detect_shape(value)? {
        StoredProject::Current(project) => Ok(project),
        StoredProject::LegacyV1(legacy) => Ok(migrate_legacy_v1(legacy)),
    }
}

fn migrate_worker(legacy: LegacyManHourWorker) -> ExternalWorker {
    let cost_category = legacy
        .cost_category
        .as_deref()
        .and_then(CostCategory::from_str)
        .unwrap_or_default();
    ExternalWorker {
        id: if legacy.id.is_empty() {
            fresh_id("ext")
        } else {
            legacy.id
        },
        person_name: legacy.person_name,
        company: legacy.company,
        rank: legacy.rank,
        daily_rate: legacy.daily_rate,
        total_man_days: legacy.total_man_days,
        project_man_days: legacy.project_man_days,
        monthly_man_days: legacy.monthly_man_days,
        daily_man_days_per_month: legacy.daily_man_days_per_month,
        cost_category,
    }
}

fn migrate_budget(legacy: LegacyBudgetAllocation) -> BudgetAllocation {
    BudgetAllocation {
        design_labor: legacy.design_cost,
        panel_labor: legacy.panel_cost,
        // The legacy single labor bucket folds into wiring, not split
        // across categories.
        wiring_labor: legacy.wiring_cost + legacy.man_hour_cost,
        setup_labor: legacy.setup_cost,
        other_labor: 0.0,
        electrical_material: legacy.electrical_material,
        travel_expense: legacy.travel_expense,
        outsourcing_cost: legacy.outsourcing_cost,
        delivery_cost: legacy.delivery_cost,
        consumable_cost: legacy.consumable_cost,
        overhead: legacy.overhead,
    }
}

pub fn migrate_legacy_v1(legacy: LegacyProjectV1) -> ProjectData {
    let man_hour_cost = legacy.man_hour_cost.unwrap_or_default();
    let labor = LaborCost {
        // The legacy schema carried no salary model, so internal workers
        // start empty and every migrated worker lands in the external list.
        internal_workers: Vec::new(),
        external_workers: man_hour_cost
            .workers
            .into_iter()
            .map(migrate_worker)
            .collect(),
        source_file: man_hour_cost.source_file,
        imported_at: man_hour_cost.imported_at,
    };

    let rates = legacy.overhead_and_margin.unwrap_or_default();

    ProjectData {
        project_info: ProjectInfo {
            project_name: legacy.project_info.project_name,
            client_name: legacy.project_info.client_name,
            original_estimate: legacy.project_info.original_estimate,
            contract_amount: legacy.project_info.contract_amount,
            total_personnel: legacy.project_info.total_personnel,
            estimated_man_hours: legacy.project_info.estimated_man_hours,
        },
        electrical_materials: legacy
            .electrical_materials
            .into_iter()
            .map(|item| ElectricalMaterial {
                id: if item.id.is_empty() {
                    fresh_id("mat")
                } else {
                    item.id
                },
                category: item.category,
                item_name: item.item_name,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect(),
        travel_expense: TravelExpense {
            accommodation_cost: legacy.travel_expense.accommodation_cost,
            meal_cost: legacy.travel_expense.meal_cost,
            transport_cost: legacy.travel_expense.transport_cost,
        },
        outsourcing_costs: legacy
            .outsourcing_costs
            .into_iter()
            .map(|item| OutsourcingCost {
                id: if item.id.is_empty() {
                    fresh_id("out")
                } else {
                    item.id
                },
                vendor: item.vendor,
                description: item.description,
                amount: item.amount,
            })
            .collect(),
        delivery_cost: DeliveryCost {
            shipping_cost: legacy.delivery_cost.shipping_cost,
            packaging_cost: legacy.delivery_cost.packaging_cost,
        },
        consumable_costs: legacy
            .consumable_costs
            .into_iter()
            .map(|item| ConsumableCost {
                id: if item.id.is_empty() {
                    fresh_id("con")
                } else {
                    item.id
                },
                item_name: item.item_name,
                amount: item.amount,
            })
            .collect(),
        labor,
        overhead_and_margin: OverheadAndMargin {
            overhead_rate: rates.overhead_rate,
            warranty_reserve_rate: rates.warranty_reserve_rate,
            margin_rate: rates.margin_rate,
        },
        budget_allocation: migrate_budget(legacy.budget_allocation.unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn current_shape_passes_through_unchanged() {
        let mut project = ProjectData::default();
        project.project_info.project_name = "Line 3 retrofit".into();
        project.labor.add_external().daily_rate = 250_000.0;
        let value = serde_json::to_value(&project).unwrap();
        let migrated = migrate_value(&value).unwrap();
        assert_eq!(migrated, project);
        // Idempotence: migrating the migrated value is still a no-op.
        let again = migrate_value(&serde_json::to_value(&migrated).unwrap()).unwrap();
        assert_eq!(again, migrated);
    }

    #[test]
    fn marker_keys_route_to_the_legacy_shape() {
        for key in LEGACY_MARKER_KEYS {
            let value = json!({ (key): {} });
            assert!(
                matches!(detect_shape(&value).unwrap(), StoredProject::LegacyV1(_)),
                "'{key}' should identify a legacy document"
            );
        }
        let value = json!({ "project_info": {} });
        assert!(matches!(
            detect_shape(&value).unwrap(),
            StoredProject::Current(_)
        ));
    }

    #[test]
    fn empty_legacy_document_gets_full_defaults() {
        let value = json!({ "projectInfo": {} });
        let migrated = migrate_value(&value).unwrap();
        assert_eq!(migrated.overhead_and_margin.overhead_rate, 10.0);
        assert_eq!(migrated.overhead_and_margin.warranty_reserve_rate, 3.0);
        assert_eq!(migrated.overhead_and_margin.margin_rate, 15.0);
        assert!(migrated.labor.internal_workers.is_empty());
        assert!(migrated.labor.external_workers.is_empty());
    }

    #[test]
    fn legacy_workers_move_to_external_list_with_wiring_default() {
        let value = json!({
            "manHourCost": {
                "workers": [
                    { "personName": "Hong", "dailyRate": 250000, "totalManDays": 10 },
                    { "personName": "Kim", "dailyRate": 200000, "totalManDays": 5,
                      "costCategory": "design" }
                ]
            }
        });
        let migrated = migrate_value(&value).unwrap();
        assert!(migrated.labor.internal_workers.is_empty());
        let workers = &migrated.labor.external_workers;
        assert_eq!(workers.len(), 2);
        assert_eq!(workers[0].cost_category, CostCategory::Wiring);
        assert_eq!(workers[1].cost_category, CostCategory::Design);
        assert!(!workers[0].id.is_empty());
    }

    #[test]
    fn legacy_labor_budget_bucket_folds_into_wiring() {
        let value = json!({
            "budgetAllocation": {
                "designCost": 1000,
                "wiringCost": 2000,
                "manHourCost": 5000,
                "overhead": 300
            }
        });
        let migrated = migrate_value(&value).unwrap();
        let budget = &migrated.budget_allocation;
        assert_eq!(budget.design_labor, 1000.0);
        assert_eq!(budget.wiring_labor, 7000.0);
        assert_eq!(budget.other_labor, 0.0);
        assert_eq!(budget.overhead, 300.0);
    }
}
