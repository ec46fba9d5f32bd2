pub mod calculators;
pub mod docs;
pub mod health;
pub mod status;

pub use calculators::list_calculators;
pub use docs::{get_document, list_documents};
pub use health::{health_check, metrics_endpoint, not_found, readiness_check};
pub use status::get_resource_status;
