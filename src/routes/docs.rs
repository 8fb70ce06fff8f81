use axum::{response::IntoResponse, Json};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::dto::{
    auth_dto::{LoginPayload, RegisterPayload, TokenResponse},
    common_dto::{CreatedResponse, MessageResponse},
    question_dto::{CreateOptionPayload, CreateQuestionPayload, OptionDto, QuestionDto},
    response_dto::{AnswerPayload, ResponseDto, SubmitResponsePayload},
    survey_dto::{CreateSurveyPayload, SeedResponse, SurveyDto},
};
use crate::models::user::Role;

#[derive(OpenApi)]
#[openapi(
    info(title = "Survey Service API", description = "Surveys, questions, options and responses"),
    paths(
        crate::routes::health::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::survey::list_surveys,
        crate::routes::survey::create_survey,
        crate::routes::survey::seed_demo_surveys,
        crate::routes::question::list_questions,
        crate::routes::question::create_question,
        crate::routes::option::list_options,
        crate::routes::option::create_option,
        crate::routes::response::list_responses,
        crate::routes::response::submit_response,
    ),
    components(schemas(
        Role,
        RegisterPayload,
        LoginPayload,
        TokenResponse,
        MessageResponse,
        CreatedResponse,
        CreateSurveyPayload,
        SurveyDto,
        SeedResponse,
        CreateQuestionPayload,
        QuestionDto,
        CreateOptionPayload,
        OptionDto,
        AnswerPayload,
        SubmitResponsePayload,
        ResponseDto,
    )),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[axum::debug_handler]
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/register",
            "/login",
            "/surveys",
            "/questions",
            "/options",
            "/responses",
            "/create-surveys",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
