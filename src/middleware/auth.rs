use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use crate::app::AppState;
use crate::errors::AppError;

const PUBLIC_PATHS: [&str; 3] = ["/api/login", "/api/register", "/api/logout"];

pub async fn require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();

    // Only the API is gated; static data files stay public
    if !path.starts_with("/api/") || PUBLIC_PATHS.contains(&path) {
        return next.run(req).await;
    }

    if state.session.is_authenticated() {
        next.run(req).await
    } else {
        tracing::debug!("Rejecting unauthenticated request to {}", path);
        AppError::Auth("Not authenticated".into()).into_response()
    }
}
