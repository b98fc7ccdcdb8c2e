use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    error::{ApiError, ErrorVerbosityProvider, UpstreamError},
    state::FleetState,
};

/// Raw payload as returned by the fleet service, relayed without parsing.
#[derive(Debug)]
pub struct GetAircraftsResponse {
    pub xml: String,
}

impl IntoResponse for GetAircraftsResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
            self.xml,
        )
            .into_response()
    }
}

pub async fn get_aircrafts(
    State(state): State<FleetState>,
) -> Result<GetAircraftsResponse, ApiError> {
    let xml = state
        .client()
        .get_all_aircraft()
        .await
        .map_err(|err| UpstreamError::new(state.error_verbosity(), err))?;

    Ok(GetAircraftsResponse { xml })
}
