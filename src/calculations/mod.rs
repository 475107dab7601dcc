pub mod labor;
pub mod reconciliation;
pub mod summary;
pub mod totals;
