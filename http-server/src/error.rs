use axum::http::StatusCode;

#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
}

/// The uniform error shape shared by every endpoint
///
/// Handlers only build one of the two kinds; the kind to status code
/// mapping lives here and nowhere else.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    /// A required request field is missing or invalid
    #[error("{0}")]
    BadRequest(String),
    /// Any failure reported by the remote provider, transient or not
    #[error(transparent)]
    Upstream(#[from] gdrive::Error),
}

impl From<axum::extract::multipart::MultipartError> for Error {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::BadRequest(err.body_text())
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Reports the failed operation to the diagnostic stream and passes
    /// the error along.
    pub(crate) fn log(self, label: &str) -> Self {
        tracing::error!("{label}: {self}");
        self
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
