use serde::{Deserialize, Serialize};

/// Entry supplied by the calculator registry; the computation lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}
