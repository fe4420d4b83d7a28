use axum::extract::rejection::{FormRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::db::StoreError;

/// Errors a request handler can reply with.
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The `{id}` path segment was not an integer, so no post can match.
    #[error("invalid post path: {0}")]
    Path(#[from] PathRejection),
    /// The body was not a urlencoded form, so no fields were submitted.
    #[error("unreadable form body: {0}")]
    Form(#[from] FormRejection),
}

impl WebError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::NotFound(_)) | Self::Path(_) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::InvalidInput(_)) | Self::Form(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::Store(StoreError::NotFound(_)) | Self::Path(_) => "Post not found",
            Self::Store(StoreError::InvalidInput(_)) | Self::Form(_) => {
                "Title and content required"
            }
            Self::Store(StoreError::Storage(_)) => "Database error",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, %status, "Replying with error");
        } else {
            warn!(error = %self, %status, "Replying with error");
        }

        (status, self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            WebError::from(StoreError::NotFound(1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(StoreError::InvalidInput("title is required")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebError::from(StoreError::Storage(sqlx::Error::RowNotFound)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_is_plain_text() {
        let response =
            WebError::from(StoreError::InvalidInput("content is required")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }
}
