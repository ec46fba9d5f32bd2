use crate::models::CalculatorSummary;

/// Source of the calculators offered to end users. Computation is not part of
/// this service; it only lists what the registry provides.
pub trait CalculatorRegistry: Send + Sync {
    /// Calculators in display order.
    fn list_calculators(&self) -> Vec<CalculatorSummary>;
}

/// Registry backed by a fixed, configured list.
#[derive(Debug, Clone)]
pub struct StaticCalculatorRegistry {
    calculators: Vec<CalculatorSummary>,
}

impl StaticCalculatorRegistry {
    pub fn new(calculators: Vec<CalculatorSummary>) -> Self {
        Self { calculators }
    }
}

impl CalculatorRegistry for StaticCalculatorRegistry {
    fn list_calculators(&self) -> Vec<CalculatorSummary> {
        self.calculators.clone()
    }
}

pub fn default_calculators() -> Vec<CalculatorSummary> {
    [
        (
            "loan-payment",
            "Loan Payment",
            "Monthly payment and total interest for an amortizing loan",
        ),
        (
            "compound-interest",
            "Compound Interest",
            "Future value of a deposit with periodic compounding and contributions",
        ),
        (
            "retirement-savings",
            "Retirement Savings",
            "Projected balance at retirement from current savings and contributions",
        ),
        (
            "mortgage-affordability",
            "Mortgage Affordability",
            "Maximum home price for a given income, debt and down payment",
        ),
    ]
    .into_iter()
    .map(|(id, name, description)| CalculatorSummary {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}
