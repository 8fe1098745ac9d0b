//! XRPC client implementation

use super::ListSource;
use crate::api::{GetListOutput, SessionOutput};
use crate::config::Credentials;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

/// Default PDS entrypoint
pub const DEFAULT_SERVICE: &str = "https://bsky.social";

/// Configuration for the XRPC client
#[derive(Debug, Clone)]
pub struct XrpcConfig {
    /// Service base URL (PDS entrypoint)
    pub service: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for XrpcConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("bsky-list-export/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl XrpcConfig {
    /// Create a new config builder
    pub fn builder() -> XrpcConfigBuilder {
        XrpcConfigBuilder::default()
    }
}

/// Builder for XRPC client config
#[derive(Default)]
pub struct XrpcConfigBuilder {
    config: XrpcConfig,
}

impl XrpcConfigBuilder {
    /// Set the service base URL
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.config.service = service.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> XrpcConfig {
        self.config
    }
}

/// Authenticated XRPC client
///
/// Holds one reqwest client and the current session tokens. Safe to
/// reuse across sequential calls; the session lock exists only so a
/// token refresh can swap both JWTs atomically.
pub struct XrpcClient {
    http: Client,
    service: String,
    session: RwLock<Option<SessionOutput>>,
}

impl XrpcClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(XrpcConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: XrpcConfig) -> Result<Self> {
        // Validate early so a typoed --service fails before login
        Url::parse(&config.service)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            http,
            service: config.service.trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        })
    }

    /// Log in with identifier/password, caching the returned session
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionOutput> {
        let response = self
            .http
            .post(self.endpoint("com.atproto.server.createSession"))
            .json(&json!({
                "identifier": credentials.identifier(),
                "password": credentials.password(),
            }))
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::auth(format!(
                "createSession failed with status {status}: {body}"
            )));
        }

        let session: SessionOutput = response.json().await.map_err(Error::Http)?;
        debug!(did = %session.did, "session created");

        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    /// Swap the current session for a fresh one via refreshSession
    async fn refresh_session(&self) -> Result<()> {
        let refresh_jwt = {
            let session = self.session.read().await;
            session
                .as_ref()
                .map(|s| s.refresh_jwt.clone())
                .ok_or_else(|| Error::auth("no active session to refresh"))?
        };

        let response = self
            .http
            .post(self.endpoint("com.atproto.server.refreshSession"))
            .bearer_auth(refresh_jwt)
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::SessionRefresh {
                message: format!("refreshSession failed with status {status}: {body}"),
            });
        }

        let session: SessionOutput = response.json().await.map_err(Error::Http)?;
        debug!(did = %session.did, "session refreshed");

        *self.session.write().await = Some(session);
        Ok(())
    }

    /// One getList round-trip with the current access token
    async fn get_list_once(
        &self,
        uri: &str,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<GetListOutput> {
        let access_jwt = {
            let session = self.session.read().await;
            session
                .as_ref()
                .map(|s| s.access_jwt.clone())
                .ok_or_else(|| Error::auth("not logged in"))?
        };

        let limit = limit.to_string();
        let mut request = self
            .http
            .get(self.endpoint("app.bsky.graph.getList"))
            .bearer_auth(access_jwt)
            .query(&[("list", uri), ("limit", limit.as_str())]);

        if let Some(cursor) = cursor {
            request = request.query(&[("cursor", cursor)]);
        }

        let response = request.send().await.map_err(Error::Http)?;
        decode_json(response).await
    }

    fn endpoint(&self, nsid: &str) -> String {
        format!("{}/xrpc/{}", self.service, nsid)
    }
}

#[async_trait]
impl ListSource for XrpcClient {
    async fn get_list(
        &self,
        uri: &str,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<GetListOutput> {
        match self.get_list_once(uri, limit, cursor.as_deref()).await {
            Err(Error::XrpcStatus { status: 400, ref body }) if is_expired_token(body) => {
                self.refresh_session().await?;
                self.get_list_once(uri, limit, cursor.as_deref()).await
            }
            other => other,
        }
    }
}

impl std::fmt::Debug for XrpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XrpcClient")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

/// XRPC error body, e.g. `{"error": "ExpiredToken", "message": "..."}`
#[derive(Debug, Deserialize)]
struct XrpcErrorBody {
    error: String,
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
}

fn is_expired_token(body: &str) -> bool {
    serde_json::from_str::<XrpcErrorBody>(body)
        .map(|e| e.error == "ExpiredToken")
        .unwrap_or(false)
}

/// Check the status and decode a JSON response body
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::xrpc_status(status.as_u16(), body));
    }

    response.json().await.map_err(Error::Http)
}
