use crate::tally::ValueTally;

/// One clinical document's extracted fields
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentRecord {
    pub document_type: String, // simulation / contour / prescription / plan / delivery
    pub patient_id: String,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub laterality: Option<String>,
    #[serde(default)]
    pub dose_gy: Option<f64>,
    #[serde(default)]
    pub fraction_count: Option<i64>,
}

/// Fields compared across records, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoredField {
    Site,
    Laterality,
    DoseGy,
    FractionCount,
}

impl MonitoredField {
    pub const ALL: [MonitoredField; 4] = [
        MonitoredField::Site,
        MonitoredField::Laterality,
        MonitoredField::DoseGy,
        MonitoredField::FractionCount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MonitoredField::Site => "site",
            MonitoredField::Laterality => "laterality",
            MonitoredField::DoseGy => "dose_gy",
            MonitoredField::FractionCount => "fraction_count",
        }
    }

    /// Severity assigned when this field disagrees across records
    pub fn severity(&self) -> Severity {
        match self {
            MonitoredField::Site => Severity::Medium,
            MonitoredField::Laterality | MonitoredField::DoseGy | MonitoredField::FractionCount => {
                Severity::High
            }
        }
    }
}

impl std::fmt::Display for MonitoredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
        }
    }
}

/// A field whose documented value differs between records
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Inconsistency {
    pub field: MonitoredField,
    pub values: ValueTally, // stringified value -> record count, first-seen order
    pub severity: Severity,
}

/// Outcome of auditing one patient's document set
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuditResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub near_miss_detected: usize,
    pub qa_time_llm_minutes: f64,
    pub qa_time_manual_minutes: f64,
    pub escape_rate: f64,
    pub team_workload_reduction_percent: f64,
    pub inconsistencies: Vec<Inconsistency>,
}

impl AuditResult {
    /// Error-shaped result: metrics zeroed, no findings, manual time echoed
    pub fn rejected(message: impl Into<String>, qa_time_manual_minutes: f64) -> Self {
        Self {
            error: Some(message.into()),
            near_miss_detected: 0,
            qa_time_llm_minutes: 0.0,
            qa_time_manual_minutes,
            escape_rate: 0.0,
            team_workload_reduction_percent: 0.0,
            inconsistencies: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_high_severity(&self) -> bool {
        self.inconsistencies
            .iter()
            .any(|i| i.severity == Severity::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_optional_fields_default_to_none() {
        let json = r#"{"document_type": "resep", "patient_id": "RT-001"}"#;
        let record: DocumentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.site, None);
        assert_eq!(record.laterality, None);
        assert_eq!(record.dose_gy, None);
        assert_eq!(record.fraction_count, None);
    }

    #[test]
    fn test_integer_dose_parses_as_float() {
        let json = r#"{"document_type": "plan", "patient_id": "RT-001", "dose_gy": 50}"#;
        let record: DocumentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.dose_gy, Some(50.0));
    }

    #[test]
    fn test_field_wire_names() {
        let names: Vec<String> = MonitoredField::ALL
            .iter()
            .map(|f| serde_json::to_value(f).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["site", "laterality", "dose_gy", "fraction_count"]);
        for field in MonitoredField::ALL {
            assert_eq!(field.to_string(), field.as_str());
        }
    }

    #[test]
    fn test_only_site_is_medium() {
        assert_eq!(MonitoredField::Site.severity(), Severity::Medium);
        assert_eq!(MonitoredField::Laterality.severity(), Severity::High);
        assert_eq!(MonitoredField::DoseGy.severity(), Severity::High);
        assert_eq!(MonitoredField::FractionCount.severity(), Severity::High);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn test_rejected_result_shape() {
        let result = AuditResult::rejected("records must not be empty", 15.0);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["error"], "records must not be empty");
        assert_eq!(json["near_miss_detected"], 0);
        assert_eq!(json["qa_time_llm_minutes"], 0.0);
        assert_eq!(json["qa_time_manual_minutes"], 15.0);
        assert_eq!(json["escape_rate"], 0.0);
        assert_eq!(json["team_workload_reduction_percent"], 0.0);
        assert_eq!(json["inconsistencies"], serde_json::json!([]));
        assert!(result.is_error());
    }

    #[test]
    fn test_successful_result_omits_error_key() {
        let result = AuditResult {
            error: None,
            near_miss_detected: 0,
            qa_time_llm_minutes: 3.5,
            qa_time_manual_minutes: 10.0,
            escape_rate: 0.05,
            team_workload_reduction_percent: 65.0,
            inconsistencies: Vec::new(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("error").is_none());
        assert!(!result.is_error());
    }
}
