use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use crate::app::AppState;
use crate::errors::AppResult;
use crate::evaluator::{report_csv, report_summary, ReportScales, ReportSummary};

pub async fn serve_reports(State(state): State<AppState>) -> AppResult<Json<ReportSummary>> {
    let usage = state.data.load_usage_data().await?;
    let scales = ReportScales {
        level: state.config.reports.level_scale,
        usage: state.config.reports.usage_scale,
    };
    let summary = report_summary(
        &usage.historical_data,
        &state.config.thresholds.report_liters,
        &scales,
    )?;
    Ok(Json(summary))
}

pub async fn download_report_csv(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let usage = state.data.load_usage_data().await?;
    tracing::info!("Exporting {} report rows as CSV", usage.historical_data.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"water-usage-report.csv\""),
        ],
        report_csv(&usage.historical_data),
    ))
}
