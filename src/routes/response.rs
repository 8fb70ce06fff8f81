use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        common_dto::CreatedResponse,
        response_dto::{ResponseDto, ResponseListQuery, SubmitResponsePayload},
    },
    error::{Error, Result},
    routes::extract::ApiJson,
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    get,
    path = "/responses",
    tag = "responses",
    params(ResponseListQuery),
    responses(
        (status = 200, description = "Filtered responses", body = [ResponseDto]),
        (status = 400, description = "Unparsable date bound")
    )
)]
#[axum::debug_handler]
pub async fn list_responses(
    State(state): State<AppState>,
    Query(query): Query<ResponseListQuery>,
) -> Result<impl IntoResponse> {
    let responses = state.response_service.list(query).await?;
    let items: Vec<ResponseDto> = responses.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/responses",
    tag = "responses",
    request_body = SubmitResponsePayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Response submitted successfully", body = CreatedResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Unknown survey, question or option")
    )
)]
#[axum::debug_handler]
pub async fn submit_response(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiJson(payload): ApiJson<SubmitResponsePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .auth_service
        .find_by_username(&claims.sub)
        .await?
        .ok_or_else(|| Error::Unauthorized("Unknown user".to_string()))?;

    let response = state.response_service.submit(user.id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Response submitted successfully", response.id)),
    ))
}
