use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A selectable answer for a question. Named to avoid shadowing `std::option::Option`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionOption {
    pub id: i64,
    pub question_id: i64,
    pub option_text: String,
}
