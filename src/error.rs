use std::borrow::Cow;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::details;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(Cow<'static, str>),
    #[error("Song with provided id is not found")]
    NotFound,
    #[error("Verse page {page} is not found, song has {total} verse(s)")]
    InvalidVersePage { page: u32, total: usize },

    #[error("Could not look up song details")]
    DetailsLookupFailed(#[source] details::Error),
    #[error("Could not persist song")]
    PersistenceFailed(#[source] diesel::result::Error),
    #[error("Could not checkout a connection from connection pool")]
    CheckoutConnectionPool,
}

impl From<diesel::result::Error> for Error {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => Self::NotFound,
            _ => Self::PersistenceFailed(value),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Self::Validation(value.body_text().into())
    }
}

impl From<PathRejection> for Error {
    fn from(value: PathRejection) -> Self {
        Self::Validation(value.body_text().into())
    }
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::InvalidVersePage { .. } => StatusCode::NOT_FOUND,
            Error::DetailsLookupFailed(_)
            | Error::PersistenceFailed(_)
            | Error::CheckoutConnectionPool => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = if status_code.is_server_error() {
            tracing::error!(error = ?self, "{self}");
            "Internal server error".to_owned()
        } else {
            tracing::debug!("{self}");
            self.to_string()
        };
        (status_code, Json(songbook_api::error::Error { code: status_code.as_u16(), message }))
            .into_response()
    }
}
