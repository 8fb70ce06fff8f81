pub mod auth_dto;
pub mod common_dto;
pub mod question_dto;
pub mod response_dto;
pub mod survey_dto;
