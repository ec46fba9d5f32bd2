pub mod calculators;
pub mod documents;
pub mod metrics;
pub mod probe;

pub use calculators::{CalculatorRegistry, StaticCalculatorRegistry};
pub use documents::{DocumentError, DocumentStore};
pub use metrics::{get_metrics, init_metrics};
pub use probe::{ProbeError, ResourceProbe};
