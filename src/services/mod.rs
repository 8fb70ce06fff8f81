pub mod auth_service;
pub mod option_service;
pub mod question_service;
pub mod response_service;
pub mod seed_service;
pub mod survey_service;
