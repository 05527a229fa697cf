use chrono::Utc;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use super::errors::ApiError;
use super::types::{
    AuthFailure, AuthRequest, AuthResponse, Entry, FetchFilter, SaveRequest, UpdateRequest,
};

/// Header carrying the session token on authenticated requests.
pub const SHARD_ID_HEADER: &str = "X-ShardId";

/// Client bound to one endpoint and, once logged in, one session token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(format!("life-stream/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::ClientBuildFailed { source })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_token: None,
        })
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange email/password for a session token.
    ///
    /// Rejected credentials are `Ok(None)`, not an error.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<String>, ApiError> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&AuthRequest { email, password })
            .send()
            .map_err(|source| ApiError::Transport {
                operation: "login",
                source,
            })?;

        match response.status() {
            StatusCode::OK => {
                let auth: AuthResponse = parse("login", response)?;
                Ok(Some(auth.shard_id))
            }
            StatusCode::UNAUTHORIZED => {
                let failure: AuthFailure = response.json().unwrap_or_default();
                info!(
                    event = "core.api.login_rejected",
                    code = %failure.code,
                    message = %failure.message
                );
                Ok(None)
            }
            status => {
                warn!(
                    event = "core.api.login_failed",
                    status = status.as_u16()
                );
                Ok(None)
            }
        }
    }

    /// Create an account. Any non-200 answer is `Ok(None)`.
    pub fn register(&self, email: &str, password: &str) -> Result<Option<String>, ApiError> {
        let response = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&AuthRequest { email, password })
            .send()
            .map_err(|source| ApiError::Transport {
                operation: "register",
                source,
            })?;

        if response.status() != StatusCode::OK {
            warn!(
                event = "core.api.register_failed",
                status = response.status().as_u16()
            );
            return Ok(None);
        }

        let auth: AuthResponse = parse("register", response)?;
        Ok(Some(auth.shard_id))
    }

    // =========================================================================
    // Stream
    // =========================================================================

    /// Record a new entry. `created_at` (epoch ms) backdates it; `None` lets the server stamp it.
    pub fn save(&self, payload: &str, created_at: Option<i64>) -> Result<Entry, ApiError> {
        let request = self
            .authed(self.client.post(self.url("/api/stream")))
            .json(&SaveRequest {
                payload,
                created_at,
            });
        let response = self.send("save", request)?;
        parse("save", response)
    }

    pub fn update(&self, id: &str, payload: &str) -> Result<Entry, ApiError> {
        let request = self
            .authed(self.client.post(self.url(&format!("/api/stream/id/{}", id))))
            .json(&UpdateRequest { payload });
        let response = self.send("update", request)?;
        parse("update", response)
    }

    pub fn fetch(&self, filter: &FetchFilter) -> Result<Vec<Entry>, ApiError> {
        let request = self
            .authed(self.client.get(self.url("/api/stream")))
            .query(&filter.query_pairs(Utc::now()));
        let response = self.send("fetch", request)?;
        parse("fetch", response)
    }

    pub fn fetch_by_id(&self, id: &str) -> Result<Entry, ApiError> {
        let request = self.authed(self.client.get(self.url(&format!("/api/stream/id/{}", id))));
        let response = self.send("fetch_by_id", request)?;
        parse("fetch_by_id", response)
    }

    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        let request =
            self.authed(self.client.delete(self.url(&format!("/api/stream/id/{}", id))));
        self.send("delete", request)?;
        Ok(())
    }

    /// Entry counts per tag, returned as the server shaped them.
    pub fn stats(&self) -> Result<Value, ApiError> {
        let request = self.authed(self.client.get(self.url("/api/stats/tags")));
        let response = self.send("stats", request)?;
        parse("stats", response)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session_token {
            Some(token) => request.header(SHARD_ID_HEADER, token),
            None => request,
        }
    }

    /// Send and reject anything but 200.
    fn send(&self, operation: &'static str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .map_err(|source| ApiError::Transport { operation, source })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(
                event = "core.api.request_failed",
                operation = operation,
                status = status.as_u16()
            );
            return Err(ApiError::UnexpectedStatus {
                operation,
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

fn parse<T: DeserializeOwned>(operation: &'static str, response: Response) -> Result<T, ApiError> {
    response.json().map_err(|e| ApiError::InvalidResponse {
        operation,
        message: e.to_string(),
    })
}
