use axum::{
    routing::{get, post},
    Router,
    middleware::from_fn_with_state,
};
use tower_http::{
    services::ServeDir,
    limit::RequestBodyLimitLayer,
};
use crate::config::Config;
use crate::handlers;
use crate::middleware;
use crate::services::{DataService, SessionStore};
use crate::worker::SensorCache;

// JSON request bodies here are tiny login and registration forms
const MAX_BODY_BYTES: usize = 64 * 1024;

// Application state that is shared between handlers
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub data: DataService,
    pub sensors: SensorCache,
    pub config: Config,
}

pub fn build_router(state: AppState) -> Router {
    let data_dir = state.data.dir().to_path_buf();

    Router::new()
        // Auth routes
        .route("/api/register", post(handlers::handle_register))
        .route("/api/login", post(handlers::handle_login))
        .route("/api/logout", post(handlers::handle_logout))
        .route("/api/me", get(handlers::current_user))

        // Dashboard routes
        .route("/api/dashboard", get(handlers::serve_dashboard))
        .route("/api/dashboard/refresh", post(handlers::refresh_dashboard))
        .route("/api/community", get(handlers::serve_community))
        .route("/api/reports", get(handlers::serve_reports))
        .route("/api/reports/csv", get(handlers::download_report_csv))
        .route("/api/alerts", get(handlers::serve_alerts))

        // Static data files
        .nest_service("/data", ServeDir::new(data_dir))

        // Add middleware
        .layer(from_fn_with_state(state.clone(), middleware::require_auth))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))

        // Add state
        .with_state(state)
}
