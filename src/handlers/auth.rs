use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use crate::app::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::{LoginForm, RegisterForm, User};

pub async fn handle_register(
    State(state): State<AppState>,
    Json(form): Json<RegisterForm>,
) -> AppResult<(StatusCode, Json<User>)> {
    tracing::info!("Registration attempt for: {}", form.email);

    if !state.session.register(&form.email, &form.password, &form.name, form.role, form.quota) {
        // register() reports a single boolean; recover the reason for the message
        let taken = state.session.users().iter().any(|u| u.email == form.email);
        let msg = if taken { "Email already exists" } else { "Invalid registration details" };
        return Err(AppError::Conflict(msg.into()));
    }

    let user = state
        .session
        .current_user()
        .ok_or_else(|| AppError::Auth("Session was not established".into()))?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn handle_login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> AppResult<Json<User>> {
    tracing::info!("Login attempt for: {}", form.email);

    state
        .session
        .login(&form.email, &form.password)
        .map(Json)
        .ok_or_else(|| AppError::Auth("Email is not registered".into()))
}

pub async fn handle_logout(State(state): State<AppState>) -> StatusCode {
    state.session.logout();
    StatusCode::NO_CONTENT
}

pub async fn current_user(State(state): State<AppState>) -> AppResult<Json<User>> {
    state
        .session
        .current_user()
        .map(Json)
        .ok_or_else(|| AppError::Auth("Not authenticated".into()))
}
