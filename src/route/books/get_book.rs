use axum::{extract::State, Json};

use crate::{
    error::{ApiError, BookNotFoundError, ErrorVerbosityProvider},
    extractor::path::ApiPath,
    state::ApiState,
};

use super::{Book, BookPath};

pub async fn get_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<BookPath>,
) -> Result<Json<Book>, ApiError> {
    match state.books().get(path.id).await {
        Some(book) => Ok(Json(book)),
        None => Err(BookNotFoundError::new(state.error_verbosity(), path.id).into()),
    }
}
