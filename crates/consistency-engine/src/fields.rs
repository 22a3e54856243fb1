// Canonical string forms of the monitored record fields
use docwatch_types::{DocumentRecord, MonitoredField};

/// Returns the field's value as a comparable string, or `None` when the
/// record does not document it.
pub fn canonical_value(record: &DocumentRecord, field: MonitoredField) -> Option<String> {
    match field {
        MonitoredField::Site => record.site.clone(),
        MonitoredField::Laterality => record.laterality.clone(),
        MonitoredField::DoseGy => record.dose_gy.map(format_dose),
        MonitoredField::FractionCount => record.fraction_count.map(|n| n.to_string()),
    }
}

/// Integral doses keep one decimal place so `50` and `50.0` read the same.
/// Magnitudes below 1e-4 or from 1e16 up use exponent form (`1e-05`, `1e+16`).
/// Comparison is textual, not numeric: 50.0 and 50.000001 are different values.
pub fn format_dose(dose: f64) -> String {
    if dose.is_nan() {
        return "nan".to_string();
    }
    if dose.is_infinite() {
        return if dose > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", dose);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if dose.fract() == 0.0 {
        format!("{:.1}", dose)
    } else {
        dose.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DocumentRecord {
        DocumentRecord {
            document_type: "plan".to_string(),
            patient_id: "RT-001".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_fields_have_no_value() {
        let r = record();
        for field in MonitoredField::ALL {
            assert_eq!(canonical_value(&r, field), None);
        }
    }

    #[test]
    fn test_integral_dose_has_trailing_decimal() {
        assert_eq!(format_dose(50.0), "50.0");
        assert_eq!(format_dose(0.0), "0.0");
        assert_eq!(format_dose(-2.0), "-2.0");
    }

    #[test]
    fn test_fractional_dose_uses_shortest_form() {
        assert_eq!(format_dose(1.8), "1.8");
        assert_eq!(format_dose(42.56), "42.56");
    }

    #[test]
    fn test_extreme_doses_use_exponent_form() {
        assert_eq!(format_dose(1e16), "1e+16");
        assert_eq!(format_dose(1.5e17), "1.5e+17");
        assert_eq!(format_dose(1e-5), "1e-05");
        assert_eq!(format_dose(-2.5e-7), "-2.5e-07");
        assert_eq!(format_dose(1e300), "1e+300");
    }

    #[test]
    fn test_exponent_thresholds() {
        assert_eq!(format_dose(0.0001), "0.0001");
        assert_eq!(format_dose(9999999999999998.0), "9999999999999998.0");
        assert_eq!(format_dose(-0.0), "-0.0");
    }

    #[test]
    fn test_fraction_count_is_decimal_integer() {
        let r = DocumentRecord {
            fraction_count: Some(25),
            ..record()
        };
        assert_eq!(
            canonical_value(&r, MonitoredField::FractionCount),
            Some("25".to_string())
        );
    }

    #[test]
    fn test_strings_are_taken_verbatim() {
        let r = DocumentRecord {
            site: Some("Breast ".to_string()),
            laterality: Some("LEFT".to_string()),
            ..record()
        };
        assert_eq!(
            canonical_value(&r, MonitoredField::Site),
            Some("Breast ".to_string())
        );
        assert_eq!(
            canonical_value(&r, MonitoredField::Laterality),
            Some("LEFT".to_string())
        );
    }
}
