use axum::{extract::{Query, State}, Json};
use serde::Serialize;
use crate::app::AppState;
use crate::errors::{AppError, AppResult};
use crate::evaluator::{community_summary, count_alerts, derive_alerts, filter_alerts, tank_status};
use crate::models::{Alert, AlertCounts, AlertQuery, AlertType};
use super::dashboard::current_reading;

#[derive(Serialize)]
pub struct AlertsView {
    pub alerts: Vec<Alert>,
    pub counts: AlertCounts,   // Always over the unfiltered feed
}

pub async fn serve_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> AppResult<Json<AlertsView>> {
    let kind = match query.kind.as_deref() {
        None | Some("all") => None,
        Some(other) => Some(
            AlertType::parse(other)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown alert type: {}", other)))?,
        ),
    };

    let reading = current_reading(&state).await?;
    let policy = &state.config.thresholds.tank_percent;
    let tank = tank_status(reading.tank_depth, reading.current_distance, policy)?;
    let usage = state.data.load_usage_data().await?;
    let community = community_summary(&usage.farmers, None);

    let alerts = derive_alerts(
        &tank,
        policy,
        &community,
        state.config.alerts.community_usage_warning,
        &reading.timestamp.to_rfc3339(),
    );

    Ok(Json(AlertsView {
        counts: count_alerts(&alerts),
        alerts: filter_alerts(&alerts, kind),
    }))
}
