// Simulated outcome metrics derived from an audit's findings.
// These are placeholders, not measured clinical outcomes.
use docwatch_types::{Inconsistency, Severity};

/// Tool-assisted QA never takes less than this
pub const TOOL_TIME_FLOOR_MINUTES: f64 = 3.0;
/// Tool-assisted QA time as a share of the manual time
pub const TOOL_TIME_RATIO: f64 = 0.35;
/// Escape rate when at least one high-severity finding was caught
pub const ESCAPE_RATE_HIGH_RISK_CAUGHT: f64 = 0.01;
pub const ESCAPE_RATE_BASELINE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeMetrics {
    pub qa_time_llm_minutes: f64,
    pub team_workload_reduction_percent: f64,
    pub escape_rate: f64,
}

impl OutcomeMetrics {
    pub fn compute(findings: &[Inconsistency], qa_time_manual_minutes: f64) -> Self {
        let qa_time_llm_minutes = simulated_tool_minutes(qa_time_manual_minutes);
        let high_risk_findings = findings
            .iter()
            .filter(|f| f.severity == Severity::High)
            .count();

        Self {
            qa_time_llm_minutes,
            team_workload_reduction_percent: workload_reduction_percent(
                qa_time_manual_minutes,
                qa_time_llm_minutes,
            ),
            escape_rate: if high_risk_findings > 0 {
                ESCAPE_RATE_HIGH_RISK_CAUGHT
            } else {
                ESCAPE_RATE_BASELINE
            },
        }
    }
}

pub fn simulated_tool_minutes(qa_time_manual_minutes: f64) -> f64 {
    round2(TOOL_TIME_FLOOR_MINUTES.max(qa_time_manual_minutes * TOOL_TIME_RATIO))
}

/// Negative when the tool floor exceeds the manual time; left unclamped.
pub fn workload_reduction_percent(manual_minutes: f64, tool_minutes: f64) -> f64 {
    if manual_minutes > 0.0 {
        round2((manual_minutes - tool_minutes) / manual_minutes * 100.0)
    } else {
        0.0
    }
}

/// Values at or above 2^52 have no fractional part and scaling them could overflow
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= 2f64.powi(52) {
        return value;
    }
    (value * 100.0).round() / 100.0
}
