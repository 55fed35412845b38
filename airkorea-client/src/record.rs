//! Core data model: one real-time measurement row per station.

use serde::{Deserialize, Serialize};

/// A single station measurement as returned by the provider.
///
/// Every field is optional: the service may omit any of them, and several
/// are returned as `"-"` when a sensor is offline. Absence is represented
/// as `None`, never defaulted to a zero value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Station name (e.g., `강남구`).
    pub station_name: Option<String>,
    /// Measurement timestamp, provider-formatted (e.g., `2024-01-01 12:00`).
    pub data_time: Option<String>,
    /// PM10 concentration (㎍/㎥).
    pub pm10_value: Option<String>,
    /// PM2.5 concentration (㎍/㎥).
    pub pm25_value: Option<String>,
    /// SO2 concentration (ppm).
    pub so2_value: Option<String>,
    /// CO concentration (ppm).
    pub co_value: Option<String>,
    /// O3 concentration (ppm).
    pub o3_value: Option<String>,
    /// NO2 concentration (ppm).
    pub no2_value: Option<String>,
    /// Composite air-quality index (khai) value.
    pub khai_value: Option<String>,
    /// Composite index grade.
    pub khai_grade: Option<String>,
    /// PM10 grade.
    pub pm10_grade: Option<String>,
    /// PM2.5 grade.
    pub pm25_grade: Option<String>,
}
