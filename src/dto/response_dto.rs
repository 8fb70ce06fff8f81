use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::dto::common_dto::empty_as_none;
use crate::models::response::SurveyResponse;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerPayload {
    pub question_id: i64,
    pub selected_option_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitResponsePayload {
    pub survey_id: i64,
    #[validate(length(min = 1, message = "at least one answer is required"))]
    pub answers: Vec<AnswerPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResponseDto {
    pub id: i64,
    pub user_id: i64,
    pub survey_id: i64,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Default, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct ResponseListQuery {
    #[serde(deserialize_with = "empty_as_none")]
    pub survey_id: Option<i64>,
    #[serde(deserialize_with = "empty_as_none")]
    pub user_id: Option<i64>,
    /// Substring of the stored RFC 3339 timestamp, e.g. `2026-10-19`
    pub submitted_at: Option<String>,
    /// Inclusive lower bound (RFC 3339)
    pub submitted_from: Option<String>,
    /// Inclusive upper bound (RFC 3339)
    pub submitted_to: Option<String>,
}

impl From<SurveyResponse> for ResponseDto {
    fn from(value: SurveyResponse) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            survey_id: value.survey_id,
            submitted_at: value.submitted_at,
        }
    }
}
