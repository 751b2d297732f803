//! Genius HTTP client
//!
//! Handles communication with the Genius web service.
//! See: https://docs.genius.com
//!
//! Every request is a single authenticated GET against a fixed base URL.
//! Endpoints are written as templates (`/songs/{song_id}`); named parameters
//! fill the placeholders and everything else goes into the query string.
//! There are no retries - a failed call is reported to the caller as-is.

use reqwest::StatusCode;

use super::dto;
use super::error::GeniusError;

/// Production API address
pub const DEFAULT_BASE_URL: &str = "https://api.genius.com";

/// User agent string sent with every request
const USER_AGENT: &str = concat!("SampleExplorer/", env!("CARGO_PKG_VERSION"));

/// Genius API client
pub struct GeniusClient {
    http_client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl std::fmt::Debug for GeniusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keep the token out of logs
        f.debug_struct("GeniusClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// A formatted endpoint: concrete path plus leftover query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl GeniusClient {
    /// Create a client for the production API
    pub fn new(access_token: impl Into<String>) -> Result<Self, GeniusError> {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (config override, tests)
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GeniusError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GeniusError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            access_token: access_token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one GET and return the parsed JSON body
    pub async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, GeniusError> {
        let request = format_endpoint(endpoint, params)?;
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!(url = %url, query = ?request.query, "Genius GET");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| GeniusError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let api_message = response
                .json::<dto::ApiError>()
                .await
                .ok()
                .and_then(|body| body.message());
            let err = status_error(status, api_message);
            tracing::warn!("Genius request to {} failed: {}", request.path, err);
            return Err(err);
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| GeniusError::Parse(e.to_string()))
    }
}

/// Split named parameters between path placeholders and the query string.
///
/// Path values are percent-encoded. A placeholder with no matching parameter
/// is an error rather than a literal `{name}` in the URL.
pub fn format_endpoint(
    template: &str,
    params: &[(&str, String)],
) -> Result<EndpointRequest, GeniusError> {
    let mut path = template.to_string();
    let mut query = Vec::new();

    for (name, value) in params {
        let placeholder = format!("{{{name}}}");
        if path.contains(&placeholder) {
            path = path.replace(&placeholder, &urlencoding::encode(value));
        } else {
            query.push((name.to_string(), value.clone()));
        }
    }

    if let Some(start) = path.find('{') {
        let unfilled = path[start..]
            .split_inclusive('}')
            .next()
            .unwrap_or(&path[start..]);
        return Err(GeniusError::InvalidEndpoint(format!(
            "no value for {unfilled} in {template}"
        )));
    }

    Ok(EndpointRequest { path, query })
}

/// Map a non-success status to an error
fn status_error(status: StatusCode, api_message: Option<String>) -> GeniusError {
    let message = api_message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string()
    });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GeniusError::Unauthorized(message),
        StatusCode::NOT_FOUND => GeniusError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => GeniusError::RateLimited,
        _ => GeniusError::Status {
            status: status.as_u16(),
            message,
        },
    }
}
