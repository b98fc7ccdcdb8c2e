use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

/// The only operation the fleet service is asked for.
const GET_ALL_AIRCRAFT: &str = "getAllAircraft";

#[derive(Debug, Error)]
pub enum FleetServiceError {
    #[error("Request to the fleet service failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Fleet service responded with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct FleetServiceConfig {
    /// SOAP endpoint of the fleet service, without the `?wsdl` suffix.
    pub endpoint: String,
    /// Target namespace of the service, used in the request envelope.
    pub namespace: String,
    /// Timeout for a single call in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

/// Client for the WSDL-described fleet service.
///
/// Invokes operations as black-box SOAP calls and hands back the raw
/// response payload without parsing it.
pub struct FleetClient {
    http: reqwest::Client,
    config: FleetServiceConfig,
}

impl FleetClient {
    pub fn new(config: FleetServiceConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build the fleet HTTP client")?;

        Ok(Self { http, config })
    }

    pub async fn get_all_aircraft(&self) -> Result<String, FleetServiceError> {
        self.call(GET_ALL_AIRCRAFT).await
    }

    #[tracing::instrument(skip(self))]
    async fn call(&self, operation: &str) -> Result<String, FleetServiceError> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", "\"\"")
            .body(self.envelope(operation))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "Fleet service returned an error status");

            return Err(FleetServiceError::Status { status, body });
        }

        tracing::trace!(%body, "Fleet service response");

        Ok(body)
    }

    fn envelope(&self, operation: &str) -> String {
        format!(
            "<soapenv:Envelope \
             xmlns:soapenv=\"http://schemas.xmlsoap.org/soap/envelope/\" \
             xmlns:ser=\"{namespace}\">\
             <soapenv:Header/>\
             <soapenv:Body><ser:{operation}/></soapenv:Body>\
             </soapenv:Envelope>",
            namespace = self.config.namespace,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_names_namespace_and_operation() {
        let client = FleetClient::new(FleetServiceConfig {
            endpoint: "http://localhost:8088/ws/airlineservice".to_string(),
            namespace: "http://service.airline.com/".to_string(),
            timeout_secs: 10,
        })
        .expect("Failed to build client");

        let envelope = client.envelope(GET_ALL_AIRCRAFT);

        assert!(envelope.contains("xmlns:ser=\"http://service.airline.com/\""));
        assert!(envelope.contains("<ser:getAllAircraft/>"));
    }
}
