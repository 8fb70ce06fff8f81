use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::dto::common_dto::empty_as_none;
use crate::models::{option::QuestionOption, question::Question};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    pub survey_id: i64,
    #[validate(length(min = 1))]
    pub question_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i64,
    pub survey_id: i64,
    pub question_text: String,
}

#[derive(Debug, Clone, Deserialize, Default, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct QuestionListQuery {
    /// Only questions of this survey
    #[serde(deserialize_with = "empty_as_none")]
    pub survey_id: Option<i64>,
    /// Case-insensitive substring of the question text
    pub question_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOptionPayload {
    pub question_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub option_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OptionDto {
    pub id: i64,
    pub question_id: i64,
    pub option_text: String,
}

#[derive(Debug, Clone, Deserialize, Default, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct OptionListQuery {
    /// Only options of this question
    #[serde(deserialize_with = "empty_as_none")]
    pub question_id: Option<i64>,
    /// Case-insensitive substring of the option text
    pub option_text: Option<String>,
}

impl From<Question> for QuestionDto {
    fn from(value: Question) -> Self {
        Self {
            id: value.id,
            survey_id: value.survey_id,
            question_text: value.question_text,
        }
    }
}

impl From<QuestionOption> for OptionDto {
    fn from(value: QuestionOption) -> Self {
        Self {
            id: value.id,
            question_id: value.question_id,
            option_text: value.option_text,
        }
    }
}
