use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::response_dto::{ResponseListQuery, SubmitResponsePayload};
use crate::error::{Error, Result};
use crate::models::{answer::Answer, response::SurveyResponse};
use crate::utils::{query::contains_pattern, time};

#[derive(Clone)]
pub struct ResponseService {
    pool: SqlitePool,
}

impl ResponseService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: ResponseListQuery) -> Result<Vec<SurveyResponse>> {
        let submitted_from = query
            .submitted_from
            .as_deref()
            .map(|raw| parse_bound("submitted_from", raw))
            .transpose()?;
        let submitted_to = query
            .submitted_to
            .as_deref()
            .map(|raw| parse_bound("submitted_to", raw))
            .transpose()?;

        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT id, user_id, survey_id, submitted_at FROM responses WHERE 1 = 1",
        );

        if let Some(survey_id) = query.survey_id {
            builder.push(" AND survey_id = ").push_bind(survey_id);
        }
        if let Some(user_id) = query.user_id {
            builder.push(" AND user_id = ").push_bind(user_id);
        }
        if let Some(fragment) = query.submitted_at.filter(|t| !t.is_empty()) {
            builder
                .push(" AND submitted_at LIKE ")
                .push_bind(contains_pattern(&fragment))
                .push(" ESCAPE '\\'");
        }
        if let Some(from) = submitted_from {
            builder.push(" AND submitted_at >= ").push_bind(from);
        }
        if let Some(to) = submitted_to {
            builder.push(" AND submitted_at <= ").push_bind(to);
        }
        builder.push(" ORDER BY id");

        let responses = builder
            .build_query_as::<SurveyResponse>()
            .fetch_all(&self.pool)
            .await?;
        Ok(responses)
    }

    /// Stores the response and all of its answers atomically.
    pub async fn submit(&self, user_id: i64, payload: SubmitResponsePayload) -> Result<SurveyResponse> {
        let mut tx = self.pool.begin().await?;

        let response = sqlx::query_as::<_, SurveyResponse>(
            r#"
            INSERT INTO responses (user_id, survey_id, submitted_at)
            VALUES (?, ?, ?)
            RETURNING id, user_id, survey_id, submitted_at
            "#,
        )
        .bind(user_id)
        .bind(payload.survey_id)
        .bind(time::to_storage(time::now()))
        .fetch_one(&mut *tx)
        .await?;

        QueryBuilder::<Sqlite>::new(
            "INSERT INTO answers (response_id, question_id, selected_option_id) ",
        )
        .push_values(payload.answers.iter(), |mut b, answer| {
            b.push_bind(response.id);
            b.push_bind(answer.question_id);
            b.push_bind(answer.selected_option_id);
        })
        .build()
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            response_id = response.id,
            user_id,
            survey_id = response.survey_id,
            answers = payload.answers.len(),
            "response submitted"
        );
        Ok(response)
    }

    pub async fn answers_for(&self, response_id: i64) -> Result<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, response_id, question_id, selected_option_id
            FROM answers
            WHERE response_id = ?
            ORDER BY id
            "#,
        )
        .bind(response_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(answers)
    }
}

fn parse_bound(name: &str, raw: &str) -> Result<String> {
    time::from_rfc3339(raw)
        .map(time::to_storage)
        .map_err(|e| Error::BadRequest(format!("Invalid {}: {}", name, e)))
}
