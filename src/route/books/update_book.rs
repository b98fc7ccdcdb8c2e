use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    error::{ApiError, BookNotFoundError, ErrorVerbosityProvider},
    extractor::{json::ApiJson, path::ApiPath},
    state::ApiState,
};

use super::{Book, BookPath};

#[derive(Debug, Serialize)]
pub struct UpdateBookResponse {
    pub message: &'static str,
}

impl IntoResponse for UpdateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Updates the first book matching the path id.
///
/// The id in the body is ignored, the match key is the path parameter.
pub async fn update_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<BookPath>,
    ApiJson(book): ApiJson<Book>,
) -> Result<UpdateBookResponse, ApiError> {
    match state.books().update(path.id, book).await {
        true => Ok(UpdateBookResponse {
            message: "Book updated successfully",
        }),
        false => Err(BookNotFoundError::new(state.error_verbosity(), path.id).into()),
    }
}
