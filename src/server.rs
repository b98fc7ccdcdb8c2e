use std::net::SocketAddr;

use anyhow::Context;
use axum::{middleware::from_fn_with_state, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    decompression::RequestDecompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{
    error::ErrorVerbosity,
    fleet::{FleetClient, FleetServiceConfig},
    middleware::{
        method_not_allowed::method_not_allowed, not_found::not_found,
        trace_response_body::trace_response_body,
    },
    route,
    state::{ApiState, FleetState},
};

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub error_verbosity: ErrorVerbosity,
    pub books: BooksConfig,
    pub fleet: FleetConfig,
}

#[derive(Debug, Deserialize)]
pub struct BooksConfig {
    pub socket_address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct FleetConfig {
    pub socket_address: SocketAddr,
    pub service: FleetServiceConfig,
}

impl ServerConfig {
    pub async fn from_config_file(path: &str) -> anyhow::Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .context("Failed to read config file")?;

        serde_yaml::from_str(&content).context("Failed to parse config file")
    }
}

/// The book service. CRUD over an in-memory book shelf.
pub struct BooksServer {
    socket_address: SocketAddr,
    error_verbosity: ErrorVerbosity,
}

impl BooksServer {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            socket_address: config.books.socket_address,
            error_verbosity: config.error_verbosity,
        }
    }

    pub fn router(state: ApiState) -> Router {
        Router::new()
            .nest("/books/", route::books::app::app())
            .fallback(not_found::<ApiState>)
            .layer(from_fn_with_state(
                state.clone(),
                method_not_allowed::<ApiState>,
            ))
            .layer(from_fn_with_state(
                state.clone(),
                trace_response_body::<ApiState>,
            ))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(
                        TraceLayer::new_for_http()
                            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                            .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                            .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                    )
                    .layer(RequestDecompressionLayer::new())
                    .layer(CompressionLayer::new())
                    .layer(CorsLayer::permissive()),
            )
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let state = ApiState::new(self.error_verbosity);

        serve(Self::router(state), self.socket_address).await
    }
}

/// The fleet service. Proxies one operation of the legacy fleet SOAP service.
pub struct FleetServer {
    socket_address: SocketAddr,
    error_verbosity: ErrorVerbosity,
    service: FleetServiceConfig,
}

impl FleetServer {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            socket_address: config.fleet.socket_address,
            error_verbosity: config.error_verbosity,
            service: config.fleet.service.clone(),
        }
    }

    pub fn router(state: FleetState) -> Router {
        Router::new()
            .merge(route::aircrafts::app::app())
            .fallback(not_found::<FleetState>)
            .layer(from_fn_with_state(
                state.clone(),
                method_not_allowed::<FleetState>,
            ))
            .layer(from_fn_with_state(
                state.clone(),
                trace_response_body::<FleetState>,
            ))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(
                        TraceLayer::new_for_http()
                            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                            .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                            .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                    )
                    .layer(RequestDecompressionLayer::new())
                    .layer(CompressionLayer::new())
                    .layer(CorsLayer::permissive()),
            )
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let client = FleetClient::new(self.service)?;
        let state = FleetState::new(self.error_verbosity, client);

        serve(Self::router(state), self.socket_address).await
    }
}

async fn serve(app: Router, socket_address: SocketAddr) -> anyhow::Result<()> {
    tracing::info!(addr = %socket_address, "Starting server");

    let listener = TcpListener::bind(&socket_address)
        .await
        .context("Bind failed")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;

        tracing::info!("SIGTERM received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
