use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    #[error("Field `{0}` must be a finite number")]
    InvalidNumber(&'static str),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::MissingField(_) => StatusCode::BAD_REQUEST,
            ValidationError::InvalidNumber(_) => StatusCode::BAD_REQUEST,
            ValidationError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text())
    }
}
