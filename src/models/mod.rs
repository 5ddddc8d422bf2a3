
pub mod validation;
pub mod stats;

pub use validation::{Device, TicketDetails, ValidationResult, ValidationStatus};
pub use stats::{HealthStatus, ScanRecord, StatsResponse, StatsSnapshot};
