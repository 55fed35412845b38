//! Tolerant normalization of raw provider responses into measurement records.
//!
//! The expected shape is `{response: {body: {items: [..]}}}`. If any level
//! is missing or has the wrong type, normalization yields an empty list —
//! malformed upstream data is treated as "no data", never as a failure.

use serde_json::Value;
use tracing::{debug, trace};

use crate::record::MeasurementRecord;

/// Extracts measurement records from a raw provider response.
///
/// Each named field is extracted independently; a missing field becomes
/// `None`. Item ordering is preserved. No deduplication, no sorting.
pub fn parse_measurements(raw: &Value) -> Vec<MeasurementRecord> {
    let Some(items) = raw
        .get("response")
        .and_then(|v| v.get("body"))
        .and_then(|v| v.get("items"))
        .and_then(|v| v.as_array())
    else {
        trace!("parse_measurements: response.body.items missing; returning empty");
        return Vec::new();
    };

    let records: Vec<MeasurementRecord> = items.iter().map(record_of).collect();
    debug!("parse_measurements: {} records", records.len());
    records
}

fn record_of(item: &Value) -> MeasurementRecord {
    MeasurementRecord {
        station_name: pick(item, "stationName"),
        data_time: pick(item, "dataTime"),
        pm10_value: pick(item, "pm10Value"),
        pm25_value: pick(item, "pm25Value"),
        so2_value: pick(item, "so2Value"),
        co_value: pick(item, "coValue"),
        o3_value: pick(item, "o3Value"),
        no2_value: pick(item, "no2Value"),
        khai_value: pick(item, "khaiValue"),
        khai_grade: pick(item, "khaiGrade"),
        pm10_grade: pick(item, "pm10Grade"),
        pm25_grade: pick(item, "pm25Grade"),
    }
}

/// Picks a field as a string, accepting both string and numeric JSON values.
fn pick(item: &Value, key: &str) -> Option<String> {
    match item.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_yields_empty() {
        assert!(parse_measurements(&json!({})).is_empty());
    }

    #[test]
    fn missing_body_yields_empty() {
        assert!(parse_measurements(&json!({"response": {}})).is_empty());
    }

    #[test]
    fn missing_items_yields_empty() {
        assert!(parse_measurements(&json!({"response": {"body": {}}})).is_empty());
    }

    #[test]
    fn non_array_items_yields_empty() {
        let raw = json!({"response": {"body": {"items": "oops"}}});
        assert!(parse_measurements(&raw).is_empty());
    }

    #[test]
    fn fields_extracted_independently() {
        let raw = json!({"response": {"body": {"items": [
            {"stationName": "강남구", "dataTime": "2024-01-01 12:00", "pm10Value": "45"},
            {"pm25Value": "20"}
        ]}}});
        let recs = parse_measurements(&raw);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].station_name.as_deref(), Some("강남구"));
        assert_eq!(recs[0].pm10_value.as_deref(), Some("45"));
        assert_eq!(recs[0].pm25_value, None);
        assert_eq!(recs[1].station_name, None);
        assert_eq!(recs[1].pm25_value.as_deref(), Some("20"));
    }

    #[test]
    fn numeric_values_are_stringified() {
        let raw = json!({"response": {"body": {"items": [{"pm10Value": 45}]}}});
        let recs = parse_measurements(&raw);
        assert_eq!(recs[0].pm10_value.as_deref(), Some("45"));
    }

    #[test]
    fn ordering_matches_provider() {
        let raw = json!({"response": {"body": {"items": [
            {"stationName": "a"}, {"stationName": "b"}, {"stationName": "c"}
        ]}}});
        let names: Vec<_> = parse_measurements(&raw)
            .into_iter()
            .map(|r| r.station_name.unwrap())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
