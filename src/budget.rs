use serde::{Deserialize, Serialize};

/// User-entered allocation of the contract amount across the eleven
/// reporting buckets. Pure input; no derived fields are stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetAllocation {
    pub design_labor: f64,
    pub panel_labor: f64,
    pub wiring_labor: f64,
    pub setup_labor: f64,
    pub other_labor: f64,
    pub electrical_material: f64,
    pub travel_expense: f64,
    pub outsourcing_cost: f64,
    pub delivery_cost: f64,
    pub consumable_cost: f64,
    pub overhead: f64,
}

impl BudgetAllocation {
    pub fn total(&self) -> f64 {
        self.design_labor
            + self.panel_labor
            + self.wiring_labor
            + self.setup_labor
            + self.other_labor
            + self.electrical_material
            + self.travel_expense
            + self.outsourcing_cost
            + self.delivery_cost
            + self.consumable_cost
            + self.overhead
    }

    /// Named access for the CLI/HTTP surfaces; unknown names return None.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "design_labor" => Some(&mut self.design_labor),
            "panel_labor" => Some(&mut self.panel_labor),
            "wiring_labor" => Some(&mut self.wiring_labor),
            "setup_labor" => Some(&mut self.setup_labor),
            "other_labor" => Some(&mut self.other_labor),
            "electrical_material" => Some(&mut self.electrical_material),
            "travel_expense" => Some(&mut self.travel_expense),
            "outsourcing_cost" => Some(&mut self.outsourcing_cost),
            "delivery_cost" => Some(&mut self.delivery_cost),
            "consumable_cost" => Some(&mut self.consumable_cost),
            "overhead" => Some(&mut self.overhead),
            _ => None,
        }
    }

    pub const FIELD_NAMES: [&'static str; 11] = [
        "design_labor",
        "panel_labor",
        "wiring_labor",
        "setup_labor",
        "other_labor",
        "electrical_material",
        "travel_expense",
        "outsourcing_cost",
        "delivery_cost",
        "consumable_cost",
        "overhead",
    ];
}
