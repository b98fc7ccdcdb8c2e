use axum::{extract::State, Json};

use crate::state::ApiState;

use super::Book;

pub async fn list_books(State(state): State<ApiState>) -> Json<Vec<Book>> {
    Json(state.books().list().await)
}
