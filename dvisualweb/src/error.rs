use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::IntoResponse,
};

pub struct ApiError {
    code: StatusCode,
    message: Option<String>,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let Some(msg) = self.message {
            (self.code, msg).into_response()
        } else {
            self.code.into_response()
        }
    }
}

impl From<StatusCode> for ApiError {
    fn from(code: StatusCode) -> Self {
        Self {
            code,
            message: None,
        }
    }
}

/// Keeps the status axum picked for the failure, e.g. 413 when the body is
/// over the size limit.
impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::from(err.status()).message(err.body_text())
    }
}

impl ApiError {
    /// Sets the message on the error.
    pub fn message<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = Some(msg.into());
        self
    }

    pub fn not_found() -> Self {
        Self::from(StatusCode::NOT_FOUND)
    }
}
