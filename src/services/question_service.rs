use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::question_dto::{CreateQuestionPayload, QuestionListQuery};
use crate::error::Result;
use crate::models::question::Question;
use crate::utils::query::contains_pattern;

#[derive(Clone)]
pub struct QuestionService {
    pool: SqlitePool,
}

impl QuestionService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: QuestionListQuery) -> Result<Vec<Question>> {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT id, survey_id, question_text FROM questions WHERE 1 = 1",
        );

        if let Some(survey_id) = query.survey_id {
            builder.push(" AND survey_id = ").push_bind(survey_id);
        }
        if let Some(text) = query.question_text.filter(|t| !t.is_empty()) {
            builder
                .push(" AND question_text LIKE ")
                .push_bind(contains_pattern(&text))
                .push(" ESCAPE '\\'");
        }
        builder.push(" ORDER BY id");

        let questions = builder
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    /// The survey must exist; a dangling id surfaces as an integrity error.
    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (survey_id, question_text)
            VALUES (?, ?)
            RETURNING id, survey_id, question_text
            "#,
        )
        .bind(payload.survey_id)
        .bind(&payload.question_text)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(question_id = question.id, survey_id = question.survey_id, "question created");
        Ok(question)
    }
}
