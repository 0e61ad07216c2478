//! # HTTP Client
//!
//! Generic HTTP client for the rental REST API.
//!
//! ## Session Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NO mutable global default header.                                      │
//! │                                                                         │
//! │  Every request method takes `token: Option<&str>` explicitly; the app  │
//! │  passes the current session token from its ApiState. Login/logout      │
//! │  swap that state atomically, so no request can observe a half-updated  │
//! │  session.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Retries
//! Transport failures (refused connection, timeout) are retried with
//! exponential backoff up to `max_retries`. HTTP-level failures are never
//! retried here: a 422 or a business rejection will not improve on retry,
//! and the UI's submit buttons are disabled while a request is in flight.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RemoteError, RemoteResult};

// =============================================================================
// Configuration
// =============================================================================

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the rental REST API (no trailing slash).
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Bounded retries for transport errors only.
    pub max_retries: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_seconds: 30,
            max_retries: 2,
        }
    }
}

impl ApiConfig {
    /// Creates a config from environment variables, with defaults.
    ///
    /// ## Environment Variables
    /// - `LOCAUTO_API_URL`: API base URL
    /// - `LOCAUTO_API_TIMEOUT`: request timeout in seconds
    pub fn from_env() -> Self {
        let mut config = ApiConfig::default();

        if let Ok(url) = std::env::var("LOCAUTO_API_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(timeout) = std::env::var("LOCAUTO_API_TIMEOUT") {
            if let Ok(seconds) = timeout.parse() {
                config.timeout_seconds = seconds;
            }
        }

        config
    }
}

// =============================================================================
// Error Body
// =============================================================================

/// Error response body shape used by the API.
///
/// Validation failures carry `errors` (field → messages); business
/// failures carry only `message`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

// =============================================================================
// HTTP Client
// =============================================================================

/// Generic HTTP client wrapping `reqwest` with the API's conventions.
///
/// Cheap to clone: `reqwest::Client` is an `Arc` internally, so every
/// endpoint wrapper holds its own copy.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: ApiConfig) -> RemoteResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RemoteError::Network(format!("client init failed: {e}")))?;

        Ok(HttpClient { client, config })
    }

    /// The configured base URL (used in logs and tests).
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Sends a GET request.
    pub async fn get<T>(&self, path: &str, token: Option<&str>) -> RemoteResult<T>
    where
        T: DeserializeOwned,
    {
        debug!(path, "GET");
        let request = self.client.get(self.url(path));
        self.send(Self::authorize(request, token), "GET", path).await
    }

    /// Sends a GET request with query parameters.
    pub async fn get_with_query<Q, T>(
        &self,
        path: &str,
        query: &Q,
        token: Option<&str>,
    ) -> RemoteResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "GET (query)");
        let request = self.client.get(self.url(path)).query(query);
        self.send(Self::authorize(request, token), "GET", path).await
    }

    /// Sends a POST request with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> RemoteResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let request = self.client.post(self.url(path)).json(body);
        self.send(Self::authorize(request, token), "POST", path).await
    }

    /// Sends a PUT request with a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> RemoteResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "PUT");
        let request = self.client.put(self.url(path)).json(body);
        self.send(Self::authorize(request, token), "PUT", path).await
    }

    /// Sends a DELETE request. The API returns no meaningful body on
    /// deletes, so only the status is checked.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> RemoteResult<()> {
        debug!(path, "DELETE");
        let request = Self::authorize(self.client.delete(self.url(path)), token);

        let response = self.send_with_retry(request, "DELETE", path).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Sends, retries transport failures, then decodes the JSON body.
    async fn send<T>(&self, request: RequestBuilder, method: &str, path: &str) -> RemoteResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send_with_retry(request, method, path).await?;

        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| RemoteError::Decode(e.to_string()))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Transport-level retry loop with exponential backoff.
    async fn send_with_retry(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> RemoteResult<Response> {
        let mut attempt = 0;
        loop {
            let cloned = request.try_clone().ok_or_else(|| {
                RemoteError::Network("request body is not retryable".to_string())
            })?;

            match cloned.send().await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = Duration::from_millis(250 * 2_u64.pow(attempt));
                    warn!(method, path, attempt, error = %e, "transport error, retrying");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    warn!(method, path, error = %e, "transport error, giving up");
                    return Err(RemoteError::from(e));
                }
            }
        }
    }

    /// Maps a non-success response to the error taxonomy.
    async fn error_from_response(response: Response) -> RemoteError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed: Option<ErrorBody> = serde_json::from_str(&body).ok();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteError::Unauthorized,
            StatusCode::NOT_FOUND => RemoteError::NotFound {
                resource: parsed
                    .and_then(|b| b.message)
                    .unwrap_or_else(|| "ressource".to_string()),
            },
            StatusCode::UNPROCESSABLE_ENTITY => match parsed {
                Some(ErrorBody {
                    errors: Some(errors),
                    ..
                }) => RemoteError::Validation { errors },
                Some(ErrorBody {
                    message: Some(message),
                    ..
                }) => RemoteError::Business(message),
                _ => RemoteError::Validation {
                    errors: BTreeMap::new(),
                },
            },
            _ => match parsed.and_then(|b| b.message) {
                // "Business" failures (vehicle not available, ...) come back
                // with a message field on 4xx statuses; surface it verbatim.
                Some(message) if status.is_client_error() => RemoteError::Business(message),
                Some(message) => RemoteError::Http {
                    status: status.as_u16(),
                    message,
                },
                None => RemoteError::Http {
                    status: status.as_u16(),
                    message: String::new(),
                },
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_error_body_parses_laravel_validation_shape() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "date_depart": ["La date de départ est obligatoire"],
                "montant": ["Le montant doit être positif"]
            }
        }"#;
        let parsed: ErrorBody = serde_json::from_str(body).unwrap();
        let errors = parsed.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors["date_depart"][0],
            "La date de départ est obligatoire"
        );
    }

    #[test]
    fn test_error_body_parses_message_only_shape() {
        let body = r#"{"message": "Voiture non disponible"}"#;
        let parsed: ErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("Voiture non disponible"));
        assert!(parsed.errors.is_none());
    }

    #[test]
    fn test_url_join() {
        let client = HttpClient::new(ApiConfig {
            base_url: "https://api.example.test/api".to_string(),
            ..ApiConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.url("/voitures/3"),
            "https://api.example.test/api/voitures/3"
        );
    }
}
