use sqlx::SqlitePool;

use crate::dto::survey_dto::CreateSurveyPayload;
use crate::error::Result;
use crate::models::survey::Survey;

#[derive(Clone)]
pub struct SurveyService {
    pool: SqlitePool,
}

impl SurveyService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_active(&self) -> Result<Vec<Survey>> {
        let surveys = sqlx::query_as::<_, Survey>(
            r#"
            SELECT id, title, description, is_active
            FROM surveys
            WHERE is_active = 1
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(surveys)
    }

    pub async fn create(&self, payload: CreateSurveyPayload) -> Result<Survey> {
        let survey = sqlx::query_as::<_, Survey>(
            r#"
            INSERT INTO surveys (title, description, is_active)
            VALUES (?, ?, 1)
            RETURNING id, title, description, is_active
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(survey_id = survey.id, "survey created");
        Ok(survey)
    }
}
