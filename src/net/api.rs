//! REST API helpers for communicating with the gopanel server.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning [`ApiError::Unavailable`], since these
//! endpoints are only meaningful in the browser.
//!
//! AUTHORIZATION
//! =============
//! Nothing here holds default headers. [`ApiRequest::from_session`] reads the
//! `Authorization` value from the session store when a request is built, so
//! logging in or out takes effect on the very next request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{LoginRequest, LoginResponse};
use crate::config::SessionConfig;
use crate::state::session::SessionStore;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Error returned by the REST helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("request rejected: {status}")]
    Rejected { status: u16 },
    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),
    /// HTTP is not available in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Message shown on the login form.
    #[must_use]
    pub fn login_message(&self) -> String {
        match self {
            Self::Rejected { status: 401 | 403 } => "Invalid username or password.".to_owned(),
            other => format!("Login failed: {other}"),
        }
    }
}

/// A GET request with its headers resolved against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Build a request for the API `path`, attaching `Authorization` when the
    /// session store holds a value for it.
    #[must_use]
    pub fn from_session<S>(session: &SessionStore<S>, path: &str) -> Self {
        let url = session.config().api_url(path);
        let headers = session
            .authorization()
            .map(|value| (AUTHORIZATION_HEADER, value))
            .into_iter()
            .collect();
        Self { url, headers }
    }

    /// Value of header `name`, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Exchange credentials for a token via `POST /api/login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for a non-success status, and the other
/// variants for transport or body problems.
pub async fn login(config: &SessionConfig, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let payload = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.api_url("/login"))
            .json(&payload)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected { status: resp.status() });
        }
        resp.json::<LoginResponse>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, payload);
        Err(ApiError::Unavailable)
    }
}

/// Send a prepared GET request and decode the JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for a non-success status, and the other
/// variants for transport or body problems.
pub async fn get_json<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut builder = gloo_net::http::Request::get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let resp = builder.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected { status: resp.status() });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
