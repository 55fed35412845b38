//! Projection of measurement records into retrievable document texts.
//!
//! Exactly five fields are rendered, in fixed order, with the provider's
//! Korean labels. The labels are an observable contract of the system and
//! must not be translated.

use airkorea_client::MeasurementRecord;
use tracing::debug;

/// Marker used for absent field values.
const ABSENT: &str = "None";

/// Renders one record into its document text.
///
/// Output shape: `"측정소명: <station>, 날짜: <time>, 미세먼지농도: <pm10>,
/// 초미세먼지농도: <pm25>, 통합대기환경수치: <khai>"`. Absent values render
/// the literal `None` marker, never get omitted.
pub fn measurement_document(record: &MeasurementRecord) -> String {
    let fields: [(&str, &Option<String>); 5] = [
        ("측정소명", &record.station_name),
        ("날짜", &record.data_time),
        ("미세먼지농도", &record.pm10_value),
        ("초미세먼지농도", &record.pm25_value),
        ("통합대기환경수치", &record.khai_value),
    ];

    fields
        .iter()
        .map(|(label, value)| format!("{label}: {}", value.as_deref().unwrap_or(ABSENT)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a sequence of records, preserving input order.
///
/// Records with no usable fields are still included; short-circuiting an
/// empty input is the caller's choice.
pub fn measurement_documents(records: &[MeasurementRecord]) -> Vec<String> {
    let docs: Vec<String> = records.iter().map(measurement_document).collect();
    debug!("measurement_documents: {} documents", docs.len());
    docs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_five_fields_in_order() {
        let rec = MeasurementRecord {
            station_name: Some("강남구".into()),
            data_time: Some("2024-01-01 12:00".into()),
            pm10_value: Some("45".into()),
            pm25_value: Some("20".into()),
            khai_value: Some("70".into()),
            ..Default::default()
        };
        assert_eq!(
            measurement_document(&rec),
            "측정소명: 강남구, 날짜: 2024-01-01 12:00, 미세먼지농도: 45, 초미세먼지농도: 20, 통합대기환경수치: 70"
        );
    }

    #[test]
    fn absent_fields_render_none_marker() {
        let rec = MeasurementRecord::default();
        assert_eq!(
            measurement_document(&rec),
            "측정소명: None, 날짜: None, 미세먼지농도: None, 초미세먼지농도: None, 통합대기환경수치: None"
        );
    }

    #[test]
    fn non_designated_fields_are_ignored() {
        let rec = MeasurementRecord {
            so2_value: Some("0.003".into()),
            no2_value: Some("0.02".into()),
            ..Default::default()
        };
        let doc = measurement_document(&rec);
        assert!(!doc.contains("0.003"));
        assert!(!doc.contains("0.02"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(measurement_documents(&[]).is_empty());
    }
}
