use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use log::error;

/// Errors leaving a handler. NotFound carries the already-rendered
/// error page so turning it into a response cannot fail again.
#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    Internal(anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
            WebError::Internal(err) => {
                error!("request failed: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
