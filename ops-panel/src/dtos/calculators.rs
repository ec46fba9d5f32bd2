use crate::models::CalculatorSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculatorListResponse {
    pub calculators: Vec<CalculatorSummary>,
}
