use serde::{Deserialize, Serialize};

/// Reporting bucket a labor cost rolls up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Design,
    Panel,
    Wiring,
    Setup,
    Other,
}

impl CostCategory {
    pub const ALL: [CostCategory; 5] = [
        CostCategory::Design,
        CostCategory::Panel,
        CostCategory::Wiring,
        CostCategory::Setup,
        CostCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::Design => "design",
            CostCategory::Panel => "panel",
            CostCategory::Wiring => "wiring",
            CostCategory::Setup => "setup",
            CostCategory::Other => "other",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "design" => Some(CostCategory::Design),
            "panel" => Some(CostCategory::Panel),
            "wiring" => Some(CostCategory::Wiring),
            "setup" => Some(CostCategory::Setup),
            "other" => Some(CostCategory::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Design => "Design labor",
            CostCategory::Panel => "Panel labor",
            CostCategory::Wiring => "Wiring labor",
            CostCategory::Setup => "Setup labor",
            CostCategory::Other => "Other labor",
        }
    }
}

impl Default for CostCategory {
    // Pre-category records default to wiring; this shim applies only at the
    // deserialization/migration boundary, never inside the aggregators.
    fn default() -> Self {
        CostCategory::Wiring
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
