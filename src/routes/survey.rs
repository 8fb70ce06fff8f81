use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        common_dto::CreatedResponse,
        survey_dto::{CreateSurveyPayload, SeedResponse, SurveyDto},
    },
    error::Result,
    routes::extract::ApiJson,
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    get,
    path = "/surveys",
    tag = "surveys",
    responses(
        (status = 200, description = "Active surveys", body = [SurveyDto])
    )
)]
#[axum::debug_handler]
pub async fn list_surveys(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let surveys = state.survey_service.list_active().await?;
    let items: Vec<SurveyDto> = surveys.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/surveys",
    tag = "surveys",
    request_body = CreateSurveyPayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Survey created successfully", body = CreatedResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_survey(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiJson(payload): ApiJson<CreateSurveyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let survey = state.survey_service.create(payload).await?;
    tracing::debug!(survey_id = survey.id, created_by = %claims.sub, "survey creation requested");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Survey created successfully", survey.id)),
    ))
}

#[utoipa::path(
    post,
    path = "/create-surveys",
    tag = "surveys",
    responses(
        (status = 201, description = "Demo surveys created", body = SeedResponse)
    )
)]
#[axum::debug_handler]
pub async fn seed_demo_surveys(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let summary = state.seed_service.seed_demo_surveys().await?;
    Ok((
        StatusCode::CREATED,
        Json(SeedResponse {
            message: format!("{} encuestas creadas con éxito", summary.surveys),
            surveys_created: summary.surveys,
        }),
    ))
}
