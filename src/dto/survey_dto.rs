use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::survey::Survey;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSurveyPayload {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SurveyDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
    pub surveys_created: usize,
}

impl From<Survey> for SurveyDto {
    fn from(value: Survey) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            is_active: value.is_active,
        }
    }
}
