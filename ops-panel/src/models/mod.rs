pub mod calculator;
pub mod document;
pub mod resource;

pub use calculator::CalculatorSummary;
pub use document::{DocumentKey, DocumentRecord};
pub use resource::{ResourceDescriptor, ResourceMetadata};
