use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{extractor::json::ApiJson, state::ApiState};

use super::Book;

#[derive(Debug, Serialize)]
pub struct AddBookResponse {
    pub message: &'static str,
}

impl IntoResponse for AddBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

pub async fn add_book(
    State(state): State<ApiState>,
    ApiJson(book): ApiJson<Book>,
) -> AddBookResponse {
    tracing::debug!(id = book.id, title = %book.title, "Adding book");

    state.books().add(book).await;

    AddBookResponse {
        message: "Book added successfully",
    }
}
