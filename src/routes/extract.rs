use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::error::Error;

/// `axum::Json` whose rejections (malformed body, missing field, unknown
/// enum value) are reported as 400 through [`Error`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}
