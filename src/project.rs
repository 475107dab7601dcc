use crate::budget::BudgetAllocation;
use crate::worker::LaborCost;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Fresh identifier for a new record, unique within the process.
pub fn fresh_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{millis}_{seq}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub project_name: String,
    pub client_name: String,
    /// Pre-negotiation cost estimate. Informational only.
    pub original_estimate: f64,
    /// Post-negotiation revenue figure used for all profit computation.
    pub contract_amount: f64,
    pub total_personnel: f64,
    pub estimated_man_hours: f64,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            client_name: String::new(),
            original_estimate: 0.0,
            contract_amount: 0.0,
            total_personnel: 0.0,
            estimated_man_hours: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectricalMaterial {
    pub id: String,
    pub category: String,
    pub item_name: String,
    pub quantity: f64,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutsourcingCost {
    pub id: String,
    pub vendor: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumableCost {
    pub id: String,
    pub item_name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelExpense {
    pub accommodation_cost: f64,
    pub meal_cost: f64,
    pub transport_cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryCost {
    pub shipping_cost: f64,
    pub packaging_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverheadAndMargin {
    /// General administration share applied to the direct cost subtotal (%).
    pub overhead_rate: f64,
    /// Warranty/after-service reserve applied to the contract amount (%).
    pub warranty_reserve_rate: f64,
    /// Target margin used for the margin-difference readout (%).
    pub margin_rate: f64,
}

impl Default for OverheadAndMargin {
    fn default() -> Self {
        Self {
            overhead_rate: 10.0,
            warranty_reserve_rate: 3.0,
            margin_rate: 15.0,
        }
    }
}

/// The single source of truth for one project session. All derived figures
/// are recomputed from this record on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectData {
    pub project_info: ProjectInfo,
    pub electrical_materials: Vec<ElectricalMaterial>,
    pub travel_expense: TravelExpense,
    pub outsourcing_costs: Vec<OutsourcingCost>,
    pub delivery_cost: DeliveryCost,
    pub consumable_costs: Vec<ConsumableCost>,
    pub labor: LaborCost,
    pub overhead_and_margin: OverheadAndMargin,
    pub budget_allocation: BudgetAllocation,
}

impl ProjectData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn add_material(&mut self) -> &mut ElectricalMaterial {
        self.electrical_materials.push(ElectricalMaterial {
            id: fresh_id("mat"),
            ..ElectricalMaterial::default()
        });
        self.electrical_materials.last_mut().expect("just pushed")
    }

    pub fn remove_material(&mut self, id: &str) -> bool {
        let before = self.electrical_materials.len();
        self.electrical_materials.retain(|item| item.id != id);
        self.electrical_materials.len() != before
    }

    pub fn add_outsourcing(&mut self) -> &mut OutsourcingCost {
        self.outsourcing_costs.push(OutsourcingCost {
            id: fresh_id("out"),
            ..OutsourcingCost::default()
        });
        self.outsourcing_costs.last_mut().expect("just pushed")
    }

    pub fn remove_outsourcing(&mut self, id: &str) -> bool {
        let before = self.outsourcing_costs.len();
        self.outsourcing_costs.retain(|item| item.id != id);
        self.outsourcing_costs.len() != before
    }

    pub fn add_consumable(&mut self) -> &mut ConsumableCost {
        self.consumable_costs.push(ConsumableCost {
            id: fresh_id("con"),
            ..ConsumableCost::default()
        });
        self.consumable_costs.last_mut().expect("just pushed")
    }

    pub fn remove_consumable(&mut self, id: &str) -> bool {
        let before = self.consumable_costs.len();
        self.consumable_costs.retain(|item| item.id != id);
        self.consumable_costs.len() != before
    }
}
