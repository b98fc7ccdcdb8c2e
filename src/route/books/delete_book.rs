use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    error::{ApiError, BookNotFoundError, ErrorVerbosityProvider},
    extractor::path::ApiPath,
    state::ApiState,
};

use super::BookPath;

#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    pub message: &'static str,
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn delete_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<BookPath>,
) -> Result<DeleteBookResponse, ApiError> {
    match state.books().remove(path.id).await {
        true => Ok(DeleteBookResponse {
            message: "Book deleted successfully",
        }),
        false => Err(BookNotFoundError::new(state.error_verbosity(), path.id).into()),
    }
}
