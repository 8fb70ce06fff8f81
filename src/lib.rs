pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{
    auth_service::AuthService, option_service::OptionService, question_service::QuestionService,
    response_service::ResponseService, seed_service::SeedService, survey_service::SurveyService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub auth_service: AuthService,
    pub survey_service: SurveyService,
    pub question_service: QuestionService,
    pub option_service: OptionService,
    pub response_service: ResponseService,
    pub seed_service: SeedService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        let auth_service = AuthService::new(
            pool.clone(),
            config.jwt_secret.clone(),
            chrono::Duration::minutes(config.jwt_expires_minutes),
        );
        let survey_service = SurveyService::new(pool.clone());
        let question_service = QuestionService::new(pool.clone());
        let option_service = OptionService::new(pool.clone());
        let response_service = ResponseService::new(pool.clone());
        let seed_service = SeedService::new(pool.clone());

        Self {
            pool,
            config,
            auth_service,
            survey_service,
            question_service,
            option_service,
            response_service,
            seed_service,
        }
    }
}

/// Full route table. Write endpoints sit behind the bearer-token guard.
pub fn app(state: AppState) -> Router {
    let public_api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/openapi.json", get(routes::docs::openapi_json))
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/surveys", get(routes::survey::list_surveys))
        .route("/create-surveys", post(routes::survey::seed_demo_surveys))
        .route("/questions", get(routes::question::list_questions))
        .route("/options", get(routes::option::list_options))
        .route("/responses", get(routes::response::list_responses));

    let protected_api = Router::new()
        .route("/surveys", post(routes::survey::create_survey))
        .route("/questions", post(routes::question::create_question))
        .route("/options", post(routes::option::create_option))
        .route("/responses", post(routes::response::submit_response))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_bearer_auth,
        ));

    public_api
        .merge(protected_api)
        .with_state(state)
        .layer(middleware::cors::api_cors())
        .layer(TraceLayer::new_for_http())
}
