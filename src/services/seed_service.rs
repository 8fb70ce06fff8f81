use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::Result;

const SURVEY_TITLES: [&str; 10] = [
    "Satisfacción del Cliente",
    "Preferencias de Productos",
    "Uso de Redes Sociales",
    "Opiniones sobre el Servicio al Cliente",
    "Evaluación de la Experiencia de Compra",
    "Encuesta de Salud y Bienestar",
    "Preferencias de Entretenimiento",
    "Hábitos de Consumo",
    "Opinión sobre Nuevos Productos",
    "Encuesta sobre Tendencias de Tecnología",
];

const QUESTION_TEXTS: [&str; 10] = [
    "¿Qué tan satisfecho estás con nuestro producto?",
    "¿Con qué frecuencia usas nuestro servicio?",
    "¿Recomendarías nuestro producto a otros?",
    "¿Cómo calificarías nuestra atención al cliente?",
    "¿Cuál es tu principal fuente de entretenimiento?",
    "¿Cuánto tiempo dedicas al ejercicio semanalmente?",
    "¿Qué tan probable es que compres un producto nuevo de nuestra marca?",
    "¿Cuáles son tus principales preocupaciones al comprar en línea?",
    "¿Qué tan a menudo actualizas tus dispositivos tecnológicos?",
    "¿Cuál es tu red social favorita?",
];

// Indexed in parallel with QUESTION_TEXTS.
const OPTION_TEXTS: [[&str; 4]; 10] = [
    ["Muy satisfecho", "Satisfecho", "Neutral", "Insatisfecho"],
    ["Diariamente", "Semanalmente", "Mensualmente", "Raramente"],
    ["Definitivamente sí", "Probablemente sí", "No estoy seguro", "Probablemente no"],
    ["Excelente", "Bueno", "Regular", "Malo"],
    ["Televisión", "Streaming", "Lectura", "Juegos"],
    ["Menos de 1 hora", "1-3 horas", "3-5 horas", "Más de 5 horas"],
    ["Muy probable", "Probable", "Poco probable", "Nada probable"],
    ["Seguridad", "Precio", "Calidad", "Entrega"],
    ["Cada año", "Cada 2-3 años", "Cada 4-5 años", "Menos frecuentemente"],
    ["Facebook", "Instagram", "Twitter", "TikTok"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub surveys: usize,
    pub questions: usize,
    pub options: usize,
}

#[derive(Clone)]
pub struct SeedService {
    pool: SqlitePool,
}

impl SeedService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Appends the demo catalogue. Not idempotent: every call adds a fresh copy.
    pub async fn seed_demo_surveys(&self) -> Result<SeedSummary> {
        let mut tx = self.pool.begin().await?;
        let mut summary = SeedSummary {
            surveys: 0,
            questions: 0,
            options: 0,
        };

        for title in SURVEY_TITLES {
            let survey_id = sqlx::query_scalar::<_, i64>(
                "INSERT INTO surveys (title, description, is_active) VALUES (?, ?, 1) RETURNING id",
            )
            .bind(title)
            .bind(survey_description(title))
            .fetch_one(&mut *tx)
            .await?;
            summary.surveys += 1;

            for (question_text, option_texts) in QUESTION_TEXTS.iter().zip(OPTION_TEXTS.iter()) {
                let question_id = sqlx::query_scalar::<_, i64>(
                    "INSERT INTO questions (survey_id, question_text) VALUES (?, ?) RETURNING id",
                )
                .bind(survey_id)
                .bind(*question_text)
                .fetch_one(&mut *tx)
                .await?;
                summary.questions += 1;

                QueryBuilder::<Sqlite>::new("INSERT INTO options (question_id, option_text) ")
                    .push_values(option_texts.iter(), |mut b, option_text| {
                        b.push_bind(question_id);
                        b.push_bind(*option_text);
                    })
                    .build()
                    .execute(&mut *tx)
                    .await?;
                summary.options += option_texts.len();
            }
        }

        tx.commit().await?;

        tracing::info!(
            surveys = summary.surveys,
            questions = summary.questions,
            options = summary.options,
            "demo surveys seeded"
        );
        Ok(summary)
    }
}

fn survey_description(title: &str) -> String {
    format!(
        "Por favor, complete la encuesta '{}' para ayudarnos a mejorar nuestros servicios.",
        title
    )
}
