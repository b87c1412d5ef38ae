//! Shared HTTP plumbing for the network adapters

use crate::ProviderError;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build a client with a transport-level timeout
pub(crate) fn build_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Communication(format!("Failed to create HTTP client: {}", e)))
}

/// Send `request` once and decode a JSON body of type `R`
pub(crate) async fn send_json<R>(
    provider: &str,
    request: RequestBuilder,
    timeout: Duration,
) -> Result<R, ProviderError>
where
    R: DeserializeOwned,
{
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(e, timeout))?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited {
            provider: provider.to_string(),
        });
    }
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ProviderError::Http {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<R>()
        .await
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout(timeout)
    } else {
        ProviderError::Communication(format!("Request failed: {}", e))
    }
}
