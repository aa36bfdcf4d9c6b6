//! Admin API HTTP client
//!
//! Thin wrapper around `reqwest` that never fails a whole command: every
//! request resolves to a [`Probe`] carrying either the HTTP answer or the
//! reason the service could not be reached. Commands inspect probes and
//! render them; nothing here is propagated with `?`.

use anyhow::Context;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::{Config, REQUEST_TIMEOUT};

/// Reason a probe produced no usable HTTP response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// TCP接続を確立できなかった
    #[error("Connection refused")]
    ConnectionRefused,
    /// 固定タイムアウトを超過した
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    /// レスポンスボディがJSONとして解釈できなかった
    #[error("Invalid JSON in response: {0}")]
    Decode(String),
    /// その他のトランスポート障害
    #[error("{0}")]
    Transport(String),
}

impl ProbeError {
    /// Classify a transport-level `reqwest` failure.
    ///
    /// Connect failures are checked first: a timeout during connect
    /// counts as the peer being unreachable, not as a slow response.
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_connect() {
            ProbeError::ConnectionRefused
        } else if err.is_timeout() {
            ProbeError::Timeout(REQUEST_TIMEOUT.as_secs())
        } else if err.is_decode() {
            ProbeError::Decode(err.to_string())
        } else {
            ProbeError::Transport(err.to_string())
        }
    }
}

/// Outcome of one admin API request.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe {
    /// The service answered. Any HTTP status counts as an answer.
    Response {
        /// HTTPステータスコード
        status: u16,
        /// デコード済みJSONボディ（空ボディは `{}`）
        body: Value,
    },
    /// No usable HTTP response.
    Unreachable(ProbeError),
}

impl Probe {
    /// HTTP status code, `0` when the service was unreachable.
    pub fn status(&self) -> u16 {
        match self {
            Probe::Response { status, .. } => *status,
            Probe::Unreachable(_) => 0,
        }
    }

    /// Response payload, or `{"error": "<reason>"}` when unreachable.
    pub fn payload(&self) -> Value {
        match self {
            Probe::Response { body, .. } => body.clone(),
            Probe::Unreachable(err) => json!({ "error": err.to_string() }),
        }
    }

    /// Fully healthy answer: HTTP 200 carrying a `success: true` envelope.
    pub fn is_ok(&self) -> bool {
        match self {
            Probe::Response { status, body } => {
                *status == 200
                    && body
                        .get("success")
                        .and_then(Value::as_bool)
                        .unwrap_or(false)
            }
            Probe::Unreachable(_) => false,
        }
    }
}

/// HTTP client for the admin API.
///
/// Holds one pooled `reqwest` client with the fixed request timeout.
/// The bearer header is rendered once at construction and attached to
/// every request.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl AdminClient {
    /// Build a client for the given connection settings.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            auth_header: format!("Bearer {}", config.token),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET an admin endpoint.
    pub async fn get(&self, path: &str) -> Probe {
        let sent = self
            .http
            .get(self.url(path))
            .header("Authorization", &self.auth_header)
            .send()
            .await;
        let probe = Self::resolve(sent).await;
        tracing::debug!(method = "GET", path, status = probe.status(), "admin request");
        probe
    }

    /// POST a JSON body to an admin endpoint.
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Probe {
        let sent = self
            .http
            .post(self.url(path))
            .header("Authorization", &self.auth_header)
            .json(body)
            .send()
            .await;
        let probe = Self::resolve(sent).await;
        tracing::debug!(method = "POST", path, status = probe.status(), "admin request");
        probe
    }

    async fn resolve(sent: Result<reqwest::Response, reqwest::Error>) -> Probe {
        let response = match sent {
            Ok(response) => response,
            Err(err) => return Probe::Unreachable(ProbeError::from_reqwest(&err)),
        };
        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => return Probe::Unreachable(ProbeError::from_reqwest(&err)),
        };
        if text.is_empty() {
            return Probe::Response {
                status,
                body: json!({}),
            };
        }
        match serde_json::from_str(&text) {
            Ok(body) => Probe::Response { status, body },
            Err(err) => Probe::Unreachable(ProbeError::Decode(err.to_string())),
        }
    }
}
