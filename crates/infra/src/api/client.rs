//! Typed JSON client for the task tracking API
//!
//! Joins paths onto the configured base URL, attaches the bearer token and
//! turns non-2xx responses into [`ApiError`] carrying the server detail.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tasktime_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use tasktime_domain::ApiConfig;
use tracing::{debug, instrument};

use super::auth::AccessTokenProvider;
use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL every path is appended to (e.g. "https://tasks.example.com/api")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

/// Whether a request carries the stored bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Credentials {
    Bearer,
    Anonymous,
}

/// API client over [`HttpClient`]
pub struct ApiClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is not an absolute http(s)
    /// URL or the HTTP client cannot be built.
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let parsed = url::Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("Invalid API base URL: {}", e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "Unsupported API URL scheme: {}",
                parsed.scheme()
            )));
        }

        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(concat!("tasktime/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self {
            http_client,
            auth,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute an authenticated GET request
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.request(Method::GET, path), Credentials::Bearer).await?;
        Self::decode(response).await
    }

    /// Execute an authenticated GET request with query parameters
    ///
    /// Fields the query serializes as absent are left out of the URL.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, path).query(query);
        let response = self.execute(builder, Credentials::Bearer).await?;
        Self::decode(response).await
    }

    /// Execute an authenticated POST request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.execute(builder, Credentials::Bearer).await?;
        Self::decode(response).await
    }

    /// Execute an authenticated POST request without a body
    #[instrument(skip(self), fields(path = %path))]
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.execute(self.request(Method::POST, path), Credentials::Bearer).await?;
        Self::decode(response).await
    }

    /// Execute a POST request that never carries a token (login, register)
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post_anonymous<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.execute(builder, Credentials::Anonymous).await?;
        Self::decode(response).await
    }

    /// Execute an authenticated PUT request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).json(body);
        let response = self.execute(builder, Credentials::Bearer).await?;
        Self::decode(response).await
    }

    /// Execute an authenticated DELETE request
    ///
    /// The response body is never read, so an empty 204 is fine.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path), Credentials::Bearer).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http_client.request(method, url)
    }

    async fn execute(
        &self,
        builder: RequestBuilder,
        credentials: Credentials,
    ) -> Result<Response, ApiError> {
        let mut builder = builder.header("Accept", "application/json");

        if credentials == Credentials::Bearer {
            match self.auth.access_token().await? {
                Some(token) => builder = builder.bearer_auth(token),
                None => debug!("no stored token; sending request without credentials"),
            }
        }

        let response = self.http_client.send(builder).await.map_err(|err| {
            if err.is_timeout() {
                ApiError::Timeout(self.http_client.timeout())
            } else {
                ApiError::from(err.into_inner())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "request rejected by server");
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        // 204/205 carry no body by definition
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Decode(format!("Empty {} response where a body was expected", status))
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the authentication provider
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the auth provider is missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth =
            self.auth.ok_or_else(|| ApiError::Config("Auth provider not set".to_string()))?;

        ApiClient::new(config, auth)
    }
}
