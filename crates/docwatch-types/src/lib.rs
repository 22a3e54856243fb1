pub mod tally;
pub mod types;

pub use tally::ValueTally;
pub use types::{AuditResult, DocumentRecord, Inconsistency, MonitoredField, Severity};
