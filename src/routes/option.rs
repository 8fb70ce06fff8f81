use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common_dto::CreatedResponse,
        question_dto::{CreateOptionPayload, OptionDto, OptionListQuery},
    },
    error::Result,
    routes::extract::ApiJson,
    AppState,
};

#[utoipa::path(
    get,
    path = "/options",
    tag = "options",
    params(OptionListQuery),
    responses(
        (status = 200, description = "Filtered options", body = [OptionDto])
    )
)]
#[axum::debug_handler]
pub async fn list_options(
    State(state): State<AppState>,
    Query(query): Query<OptionListQuery>,
) -> Result<impl IntoResponse> {
    let options = state.option_service.list(query).await?;
    let items: Vec<OptionDto> = options.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/options",
    tag = "options",
    request_body = CreateOptionPayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Option created successfully", body = CreatedResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Question does not exist")
    )
)]
#[axum::debug_handler]
pub async fn create_option(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOptionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let option = state.option_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Option created successfully", option.id)),
    ))
}
