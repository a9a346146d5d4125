//! Shared `reqwest` plumbing for the store clients.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode, Url};

use crate::error::StoreError;

/// Builds the HTTP client every store client uses: one fixed per-request
/// deadline and a descriptive `User-Agent`.
pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, StoreError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `base_url`, forcing exactly one trailing slash so `Url::join`
/// appends to the path instead of replacing its last segment.
pub(crate) fn normalise_base_url(base_url: &str) -> Result<Url, StoreError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| StoreError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

pub(crate) fn join(base_url: &Url, path: &str) -> Result<Url, StoreError> {
    base_url.join(path).map_err(|e| StoreError::InvalidBaseUrl {
        base_url: base_url.to_string(),
        reason: e.to_string(),
    })
}

/// Sends a request and returns the body text of a 2xx response.
///
/// # Errors
///
/// - [`StoreError::NotFound`] for HTTP 404.
/// - [`StoreError::UnexpectedStatus`] for any other non-2xx status.
/// - [`StoreError::Http`] on network failure or timeout.
pub(crate) async fn send_for_text(request: RequestBuilder, url: &Url) -> Result<String, StoreError> {
    let response = request.send().await?;
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(StoreError::NotFound {
            url: url.to_string(),
        });
    }

    if !status.is_success() {
        return Err(StoreError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}
