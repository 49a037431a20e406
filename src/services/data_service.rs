use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use crate::errors::{AppError, AppResult};
use crate::models::{SensorData, UsageData};

const SENSOR_FILE: &str = "sensorData.json";
const USAGE_FILE: &str = "usageData.json";

// Read-only access to the static JSON resources
#[derive(Clone, Debug)]
pub struct DataService {
    dir: PathBuf,
}

impl DataService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> AppResult<T> {
        let path = self.dir.join(file);
        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            AppError::File(e)
        })?;

        serde_json::from_str(&raw)
            .map_err(|e| AppError::Data(format!("Failed to parse {}: {}", file, e)))
    }

    pub async fn load_sensor_data(&self) -> AppResult<SensorData> {
        let data: SensorData = self.load(SENSOR_FILE).await?;
        tracing::debug!("Loaded sensor data from {}", data.sensor_id);
        Ok(data)
    }

    pub async fn load_usage_data(&self) -> AppResult<UsageData> {
        let data: UsageData = self.load(USAGE_FILE).await?;
        tracing::debug!(
            "Loaded {} farmers and {} historical records",
            data.farmers.len(),
            data.historical_data.len()
        );
        Ok(data)
    }
}
