use crate::project::ProjectData;

/// One total per non-labor cost bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostTotals {
    pub electrical_material: f64,
    pub travel_expense: f64,
    pub outsourcing: f64,
    pub delivery: f64,
    pub consumable: f64,
}

impl CostTotals {
    pub fn from_project(project: &ProjectData) -> Self {
        let electrical_material = project
            .electrical_materials
            .iter()
            .map(|item| item.quantity * item.unit_price)
            .sum();
        let travel = &project.travel_expense;
        let travel_expense = travel.accommodation_cost + travel.meal_cost + travel.transport_cost;
        let outsourcing = project
            .outsourcing_costs
            .iter()
            .map(|item| item.amount)
            .sum();
        let delivery = project.delivery_cost.shipping_cost + project.delivery_cost.packaging_cost;
        let consumable = project
            .consumable_costs
            .iter()
            .map(|item| item.amount)
            .sum();
        Self {
            electrical_material,
            travel_expense,
            outsourcing,
            delivery,
            consumable,
        }
    }

    pub fn sum(&self) -> f64 {
        self.electrical_material
            + self.travel_expense
            + self.outsourcing
            + self.delivery
            + self.consumable
    }
}
