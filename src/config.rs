use serde::Deserialize;
use crate::evaluator::ThresholdPolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub data: DataConfig,
    pub dashboard: DashboardConfig,
    pub thresholds: ThresholdConfig,
    pub reports: ReportConfig,
    pub alerts: AlertConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: Option<String>,
    pub redis_url: Option<String>,
    pub profile: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub refresh_interval_secs: u64,
    pub variation: i64,       // Simulated sensor noise, in liters
    pub min_distance: f64,
    pub max_distance: f64,
}

// Two independent policies over different units; never merged
#[derive(Debug, Deserialize, Clone)]
pub struct ThresholdConfig {
    pub tank_percent: ThresholdPolicy,
    pub report_liters: ThresholdPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub level_scale: f64,
    pub usage_scale: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertConfig {
    pub community_usage_warning: f64,   // Percent of total community quota
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: config::Config) -> Result<Self, config::ConfigError> {
        let parsed: Config = config.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        for (name, policy) in [
            ("thresholds.tank_percent", &self.thresholds.tank_percent),
            ("thresholds.report_liters", &self.thresholds.report_liters),
        ] {
            if policy.critical_below > policy.low_below {
                return Err(config::ConfigError::Message(format!(
                    "{}: critical_below ({}) must not exceed low_below ({})",
                    name, policy.critical_below, policy.low_below
                )));
            }
        }

        if self.dashboard.min_distance > self.dashboard.max_distance {
            return Err(config::ConfigError::Message(
                "dashboard: min_distance must not exceed max_distance".into(),
            ));
        }

        if self.reports.level_scale <= 0.0 || self.reports.usage_scale <= 0.0 {
            return Err(config::ConfigError::Message(
                "reports: scales must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}
