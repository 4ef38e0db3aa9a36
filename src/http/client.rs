//! HTTP client
//!
//! Thin wrapper over `reqwest` that applies authentication and turns error
//! statuses into errors carrying the response body.

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::time::Duration;
use tracing::{debug, error};

/// Capability to execute a single HTTP request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the raw response, whatever its status
    async fn execute(&self, request: Request) -> Result<Response>;
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout (`None` waits indefinitely)
    pub timeout: Option<Duration>,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            accept_invalid_certs: false,
            user_agent: format!("solrdump/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Skip (or enforce) certificate verification
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client implementing [`Transport`]
pub struct HttpClient {
    client: Client,
    authenticator: Option<Authenticator>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            authenticator: None,
        })
    }

    /// Create a client with authentication
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let mut client = Self::with_config(config)?;
        if auth_config != AuthConfig::None {
            client.set_authenticator(Authenticator::new(auth_config)?);
        }
        Ok(client)
    }

    /// Set the authenticator
    pub fn set_authenticator(&mut self, authenticator: Authenticator) {
        self.authenticator = Some(authenticator);
    }

}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, mut request: Request) -> Result<Response> {
        if let Some(ref auth) = self.authenticator {
            auth.apply(&mut request)?;
        }

        let method = request.method().clone();
        let url = request.url().clone();
        let response = self.client.execute(request).await?;
        debug!("{} {} -> {}", method, url, response.status());
        Ok(response)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("has_authenticator", &self.authenticator.is_some())
            .finish_non_exhaustive()
    }
}

/// Pass successful responses through; turn status >= 400 into an error.
///
/// The full body is read and logged first so the server's explanation ends
/// up next to the failure.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            error!("failed to fetch response body for debugging: {e}");
            String::new()
        }
    };
    error!("response body ({}): {}", body.len(), body);
    Err(Error::http_status(status.as_u16(), body))
}
