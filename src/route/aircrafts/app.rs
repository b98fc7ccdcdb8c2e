use axum::{routing::get, Router};

use crate::state::FleetState;

pub fn app() -> Router<FleetState> {
    Router::<FleetState>::new().route("/aircrafts", get(super::get_aircrafts::get_aircrafts))
}
