pub mod fields;
pub mod metrics;

use docwatch_types::{AuditResult, DocumentRecord, Inconsistency, MonitoredField, ValueTally};

pub use metrics::OutcomeMetrics;

/// Message carried by the error-shaped result for an empty record set
pub const EMPTY_RECORDS_MESSAGE: &str = "records must not be empty";

/// ConsistencyAuditor entry point
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyAuditor;

impl ConsistencyAuditor {
    pub fn new() -> Self {
        Self
    }

    /// Compare the monitored fields across records.
    ///
    /// Findings come back in field order (site, laterality, dose, fractions).
    /// Records that leave a field undocumented are skipped for that field.
    pub fn evaluate(&self, records: &[DocumentRecord]) -> Vec<Inconsistency> {
        MonitoredField::ALL
            .iter()
            .filter_map(|&field| Self::check_field(records, field))
            .collect()
    }

    pub fn compute_metrics(
        &self,
        findings: &[Inconsistency],
        qa_time_manual_minutes: f64,
    ) -> OutcomeMetrics {
        OutcomeMetrics::compute(findings, qa_time_manual_minutes)
    }

    /// Full pipeline: evaluate, then derive the outcome metrics
    pub fn audit(&self, records: &[DocumentRecord], qa_time_manual_minutes: f64) -> AuditResult {
        if records.is_empty() {
            return AuditResult::rejected(EMPTY_RECORDS_MESSAGE, qa_time_manual_minutes);
        }

        let inconsistencies = self.evaluate(records);
        let metrics = self.compute_metrics(&inconsistencies, qa_time_manual_minutes);

        AuditResult {
            error: None,
            near_miss_detected: inconsistencies.len(),
            qa_time_llm_minutes: metrics.qa_time_llm_minutes,
            qa_time_manual_minutes,
            escape_rate: metrics.escape_rate,
            team_workload_reduction_percent: metrics.team_workload_reduction_percent,
            inconsistencies,
        }
    }

    fn check_field(records: &[DocumentRecord], field: MonitoredField) -> Option<Inconsistency> {
        let values: ValueTally = records
            .iter()
            .filter_map(|record| fields::canonical_value(record, field))
            .collect();

        if values.len() > 1 {
            Some(Inconsistency {
                field,
                values,
                severity: field.severity(),
            })
        } else {
            None
        }
    }
}
