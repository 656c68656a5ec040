mod dictionary;
mod images;
mod probe;
#[cfg(test)]
mod stub;

pub use dictionary::HttpDictionary;
pub use images::HttpImageSearch;
pub use probe::TcpProbe;

use std::time::Duration;

use lexi_core::TransportFailure;

pub(crate) fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to build HTTP client with timeout: {}", e);
            reqwest::Client::new()
        })
}

/// Map a reqwest error onto the transport failure taxonomy
pub(crate) fn transport_failure(err: reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout
    } else if let Some(status) = err.status() {
        TransportFailure::Status(status.as_u16())
    } else if err.is_decode() {
        TransportFailure::Malformed(err.to_string())
    } else {
        TransportFailure::Unreachable(err.to_string())
    }
}

/// Fail on non-success statuses, otherwise decode the body as JSON
pub(crate) async fn read_json(
    response: reqwest::Response,
) -> Result<serde_json::Value, TransportFailure> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportFailure::Status(status.as_u16()));
    }

    response.json::<serde_json::Value>().await.map_err(|e| {
        if e.is_timeout() {
            TransportFailure::Timeout
        } else {
            TransportFailure::Malformed(format!("Failed to parse response: {}", e))
        }
    })
}
