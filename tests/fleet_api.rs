use std::net::Ipv4Addr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use book_fleet::{
    error::ErrorVerbosity,
    fleet::{FleetClient, FleetServiceConfig},
    server::FleetServer,
    state::FleetState,
};
use serde_json::Value;
use tokio::net::TcpListener;

const AIRCRAFT_XML: &str =
    "<aircrafts><aircraft><id>1</id><model>A320</model><capacity>180</capacity><range>6100</range></aircraft></aircrafts>";

async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            eprintln!("server error: {err}");
        }
    });

    Ok(format!("http://{addr}"))
}

/// Accepts only envelopes that actually invoke the expected operation.
async fn soap_endpoint(body: String) -> Response {
    if body.contains("<ser:getAllAircraft/>") {
        AIRCRAFT_XML.into_response()
    } else {
        (StatusCode::BAD_REQUEST, "unexpected envelope").into_response()
    }
}

async fn start_fleet_server(endpoint: String) -> anyhow::Result<String> {
    let config = FleetServiceConfig {
        endpoint,
        namespace: "http://service.airline.com/".to_string(),
        timeout_secs: 5,
    };
    let state = FleetState::new(ErrorVerbosity::Full, FleetClient::new(config)?);

    spawn(FleetServer::router(state)).await
}

#[tokio::test]
async fn get_aircrafts_relays_raw_upstream_body() -> anyhow::Result<()> {
    let upstream_url = spawn(Router::new().route("/ws/airlineservice", post(soap_endpoint))).await?;
    let base_url = start_fleet_server(format!("{upstream_url}/ws/airlineservice")).await?;

    let res = reqwest::get(format!("{base_url}/aircrafts")).await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"].to_str()?,
        "text/xml; charset=utf-8"
    );
    assert_eq!(res.text().await?, AIRCRAFT_XML);

    Ok(())
}

#[tokio::test]
async fn upstream_error_status_maps_to_bad_gateway() -> anyhow::Result<()> {
    let upstream_url = spawn(Router::new().route(
        "/ws/airlineservice",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await?;
    let base_url = start_fleet_server(format!("{upstream_url}/ws/airlineservice")).await?;

    let res = reqwest::get(format!("{base_url}/aircrafts")).await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error_type"], "Upstream");
    assert_eq!(body["message"], "The fleet service call failed");

    Ok(())
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() -> anyhow::Result<()> {
    // Port 9 is the discard service, nothing should be listening there.
    let base_url = start_fleet_server("http://127.0.0.1:9/ws/airlineservice".to_string()).await?;

    let res = reqwest::get(format!("{base_url}/aircrafts")).await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error_type"], "Upstream");

    Ok(())
}

#[tokio::test]
async fn wrong_method_returns_method_not_allowed() -> anyhow::Result<()> {
    let base_url = start_fleet_server("http://127.0.0.1:9/unused".to_string()).await?;
    let client = reqwest::Client::new();

    let res = client.post(format!("{base_url}/aircrafts")).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
