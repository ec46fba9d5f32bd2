pub mod calculators;
pub mod documents;
pub mod status;

pub use calculators::CalculatorListResponse;
pub use documents::{DocumentListResponse, DocumentResponse, DocumentSummary};
pub use status::ResourceStatusResponse;
