use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

// Raw reading as published in sensorData.json
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensorData {
    pub tank_depth: f64,
    pub current_distance: f64,
    pub timestamp: DateTime<Utc>,
    pub sensor_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub quota: f64,
    pub current_usage: f64,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    pub level: f64,
    pub usage: f64,
}

// Contents of usageData.json
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageData {
    pub farmers: Vec<Farmer>,
    pub historical_data: Vec<HistoricalRecord>,
}
