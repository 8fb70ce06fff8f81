use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::question_dto::{CreateOptionPayload, OptionListQuery};
use crate::error::Result;
use crate::models::option::QuestionOption;
use crate::utils::query::contains_pattern;

#[derive(Clone)]
pub struct OptionService {
    pool: SqlitePool,
}

impl OptionService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: OptionListQuery) -> Result<Vec<QuestionOption>> {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT id, question_id, option_text FROM options WHERE 1 = 1",
        );

        if let Some(question_id) = query.question_id {
            builder.push(" AND question_id = ").push_bind(question_id);
        }
        if let Some(text) = query.option_text.filter(|t| !t.is_empty()) {
            builder
                .push(" AND option_text LIKE ")
                .push_bind(contains_pattern(&text))
                .push(" ESCAPE '\\'");
        }
        builder.push(" ORDER BY id");

        let options = builder
            .build_query_as::<QuestionOption>()
            .fetch_all(&self.pool)
            .await?;
        Ok(options)
    }

    pub async fn create(&self, payload: CreateOptionPayload) -> Result<QuestionOption> {
        let option = sqlx::query_as::<_, QuestionOption>(
            r#"
            INSERT INTO options (question_id, option_text)
            VALUES (?, ?)
            RETURNING id, question_id, option_text
            "#,
        )
        .bind(payload.question_id)
        .bind(&payload.option_text)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(option_id = option.id, question_id = option.question_id, "option created");
        Ok(option)
    }
}
