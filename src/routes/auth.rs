use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        auth_dto::{LoginPayload, RegisterPayload, TokenResponse},
        common_dto::MessageResponse,
    },
    error::Result,
    routes::extract::ApiJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Username already exists or invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.auth_service.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login succeeded, returns a JWT", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginPayload>,
) -> Result<impl IntoResponse> {
    let access_token = state.auth_service.login(payload).await?;
    Ok(Json(TokenResponse { access_token }))
}
