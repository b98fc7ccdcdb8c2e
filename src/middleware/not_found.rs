use axum::extract::State;

use crate::error::{ApiError, ErrorVerbosityProvider, NotFoundError};

pub async fn not_found<S>(State(state): State<S>) -> ApiError
where
    S: ErrorVerbosityProvider + Clone + Send + Sync + 'static,
{
    ApiError::NotFound(NotFoundError::new(state.error_verbosity()))
}
