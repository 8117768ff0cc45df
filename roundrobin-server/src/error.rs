//! HTTP mapping for engine errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roundrobin_core::TournamentError;
use serde_json::json;

/// Engine rejection rendered as `{"error": "..."}` with a matching status
#[derive(Debug)]
pub struct ApiError(pub TournamentError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            TournamentError::DuplicatePlayer(_) => StatusCode::CONFLICT,
            TournamentError::UnknownPlayer(_) => StatusCode::NOT_FOUND,
            TournamentError::EmptyName | TournamentError::IneligibleWinner(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
