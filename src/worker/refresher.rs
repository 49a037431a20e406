use std::sync::Arc;
use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration, MissedTickBehavior};
use crate::config::DashboardConfig;
use crate::errors::AppResult;
use crate::models::SensorData;
use crate::services::DataService;

// Latest jittered reading, shared between the refresher and the views
#[derive(Clone, Default)]
pub struct SensorCache {
    latest: Arc<RwLock<Option<SensorData>>>,
}

impl SensorCache {
    pub async fn latest(&self) -> Option<SensorData> {
        self.latest.read().await.clone()
    }

    pub async fn store(&self, reading: SensorData) {
        *self.latest.write().await = Some(reading);
    }
}

/// Simulate sensor noise: shift the distance by an integer in
/// `[-variation, variation)`, clamp it to the configured range and stamp the
/// reading with the current time.
pub fn apply_jitter<R: Rng>(
    mut reading: SensorData,
    rng: &mut R,
    config: &DashboardConfig,
) -> SensorData {
    let offset = if config.variation > 0 {
        rng.gen_range(-config.variation..config.variation) as f64
    } else {
        0.0
    };

    reading.current_distance = (reading.current_distance + offset)
        .clamp(config.min_distance, config.max_distance);
    reading.timestamp = Utc::now();
    reading
}

// Load one fresh reading and publish it
pub async fn refresh_once(
    data: &DataService,
    cache: &SensorCache,
    config: &DashboardConfig,
) -> AppResult<SensorData> {
    let raw = data.load_sensor_data().await?;
    let reading = apply_jitter(raw, &mut rand::thread_rng(), config);
    cache.store(reading.clone()).await;

    tracing::debug!(
        "Sensor {} refreshed: distance {}",
        reading.sensor_id,
        reading.current_distance
    );
    Ok(reading)
}

pub async fn refresher_process(data: DataService, cache: SensorCache, config: DashboardConfig) {
    tracing::info!(
        "Sensor refresher started, interval {}s",
        config.refresh_interval_secs
    );

    let mut ticker = interval(Duration::from_secs(config.refresh_interval_secs.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if let Err(e) = refresh_once(&data, &cache, &config).await {
            // Keep the previous reading and try again next tick
            tracing::error!("Failed to refresh sensor data: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dashboard_config(variation: i64) -> DashboardConfig {
        DashboardConfig {
            refresh_interval_secs: 10,
            variation,
            min_distance: 50.0,
            max_distance: 450.0,
        }
    }

    fn reading(distance: f64) -> SensorData {
        SensorData {
            tank_depth: 500.0,
            current_distance: distance,
            timestamp: "2025-01-15T10:30:00Z".parse().unwrap(),
            sensor_id: "ARD-TANK-001".into(),
        }
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let config = dashboard_config(10);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let jittered = apply_jitter(reading(150.0), &mut rng, &config);
            assert!(jittered.current_distance >= 140.0);
            assert!(jittered.current_distance < 160.0);
            assert_eq!(jittered.current_distance.fract(), 0.0);
        }
    }

    #[test]
    fn test_jitter_clamps_to_bounds() {
        let config = dashboard_config(10);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let low = apply_jitter(reading(45.0), &mut rng, &config);
            assert!(low.current_distance >= 50.0);
            let high = apply_jitter(reading(460.0), &mut rng, &config);
            assert!(high.current_distance <= 450.0);
        }
    }

    #[test]
    fn test_zero_variation_only_restamps() {
        let config = dashboard_config(0);
        let mut rng = StdRng::seed_from_u64(1);
        let original = reading(150.0);
        let jittered = apply_jitter(original.clone(), &mut rng, &config);
        assert_eq!(jittered.current_distance, 150.0);
        assert!(jittered.timestamp > original.timestamp);
    }

    #[tokio::test]
    async fn test_refresh_once_fills_cache() {
        let data = DataService::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        let cache = SensorCache::default();
        assert!(cache.latest().await.is_none());

        let reading = refresh_once(&data, &cache, &dashboard_config(10)).await.unwrap();
        assert_eq!(cache.latest().await, Some(reading));
    }
}
