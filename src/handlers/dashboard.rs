use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::app::AppState;
use crate::errors::AppResult;
use crate::evaluator::{community_summary, tank_status, TankStatus};
use crate::models::SensorData;
use crate::worker::refresh_once;

#[derive(Serialize)]
pub struct CommunityMeter {
    pub total_usage: f64,
    pub total_quota: f64,
    pub usage_percentage: Option<f64>,
}

#[derive(Serialize)]
pub struct DashboardView {
    pub sensor_id: String,
    pub last_updated: DateTime<Utc>,
    pub refresh_interval_secs: u64,
    pub tank: TankStatus,
    pub community: CommunityMeter,
}

// Latest cached reading, or a fresh one if the refresher has not run yet
pub(crate) async fn current_reading(state: &AppState) -> AppResult<SensorData> {
    match state.sensors.latest().await {
        Some(reading) => Ok(reading),
        None => refresh_once(&state.data, &state.sensors, &state.config.dashboard).await,
    }
}

async fn build_view(state: &AppState, reading: SensorData) -> AppResult<DashboardView> {
    let tank = tank_status(
        reading.tank_depth,
        reading.current_distance,
        &state.config.thresholds.tank_percent,
    )?;

    let usage = state.data.load_usage_data().await?;
    let community = community_summary(&usage.farmers, None);

    tracing::debug!("Tank at {:.1}% ({:?})", tank.percentage, tank.severity);

    Ok(DashboardView {
        sensor_id: reading.sensor_id,
        last_updated: reading.timestamp,
        refresh_interval_secs: state.config.dashboard.refresh_interval_secs,
        tank,
        community: CommunityMeter {
            total_usage: community.total_usage,
            total_quota: community.total_quota,
            usage_percentage: community.usage_percentage,
        },
    })
}

pub async fn serve_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardView>> {
    let reading = current_reading(&state).await?;
    Ok(Json(build_view(&state, reading).await?))
}

pub async fn refresh_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardView>> {
    tracing::info!("Manual sensor refresh requested");
    let reading = refresh_once(&state.data, &state.sensors, &state.config.dashboard).await?;
    Ok(Json(build_view(&state, reading).await?))
}
