use axum::{extract::{Query, State}, Json};
use crate::app::AppState;
use crate::errors::AppResult;
use crate::evaluator::{community_summary, CommunitySummary};
use crate::models::CommunityQuery;

pub async fn serve_community(
    State(state): State<AppState>,
    Query(query): Query<CommunityQuery>,
) -> AppResult<Json<CommunitySummary>> {
    let usage = state.data.load_usage_data().await?;
    let summary = community_summary(&usage.farmers, query.search.as_deref());

    tracing::debug!(
        "Community view: {} of {} farmers shown, {} over quota",
        summary.farmers.len(),
        summary.total_farmers,
        summary.exceeded_count
    );
    Ok(Json(summary))
}
