use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common_dto::CreatedResponse,
        question_dto::{CreateQuestionPayload, QuestionDto, QuestionListQuery},
    },
    error::Result,
    routes::extract::ApiJson,
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(QuestionListQuery),
    responses(
        (status = 200, description = "Filtered questions", body = [QuestionDto])
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionListQuery>,
) -> Result<impl IntoResponse> {
    let questions = state.question_service.list(query).await?;
    let items: Vec<QuestionDto> = questions.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    request_body = CreateQuestionPayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Question created successfully", body = CreatedResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Survey does not exist")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.question_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Question created successfully", question.id)),
    ))
}
