use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use crate::errors::AppError;

// The IntoResponse trait implementation converts AppError into a JSON error response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Missing or unknown session
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,

            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // Duplicate or rejected registration
            AppError::Conflict(_) => StatusCode::CONFLICT,

            // Numeric inputs outside the evaluator's domain
            AppError::Usage(_) => StatusCode::UNPROCESSABLE_ENTITY,

            AppError::Storage(e) => {
                tracing::error!("Storage failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Data(msg) => {
                tracing::error!("Data failure: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::File(e) => {
                tracing::error!("File failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UsageError;

    #[test]
    fn test_status_codes() {
        let resp = AppError::Auth("Not authenticated".into()).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = AppError::Conflict("Email already exists".into()).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = AppError::from(UsageError::InvalidCapacity(0.0)).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = AppError::Data("bad json".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
