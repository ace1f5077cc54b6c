//! Reqwest-backed API gateway client.
//!
//! The sole egress point for network calls. This adapter owns transport
//! details only: header construction, base-address prefixing, and the
//! mapping of every failure into the classified [`GatewayError`] taxonomy.
//! It is stateless between calls; the only state that persists lives in
//! the session store it reads from.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::domain::GatewayError;
use crate::store::SessionStore;

/// API gateway client bound to one base address and one session store.
///
/// The session handle is read-only from the gateway's perspective: it is
/// consulted for a credential on each call and never mutated.
#[derive(Clone)]
pub struct Gateway {
    http: Client,
    base_url: Url,
    session: SessionStore,
}

impl Gateway {
    /// Build a gateway against `base_url`, reading credentials from
    /// `session`.
    ///
    /// Calls are single-attempt with no retry, timeout, or cancellation;
    /// the endpoints behind this client are few and carry no SLA.
    #[must_use]
    pub fn new(base_url: Url, session: SessionStore) -> Self {
        Self {
            http: Client::new(),
            base_url,
            session,
        }
    }

    /// Issue a GET and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] classifying the failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.request(Method::GET, path, None, HeaderMap::new()).await
    }

    /// Issue a POST carrying a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] classifying the failure.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, GatewayError> {
        self.request(Method::POST, path, Some(body), HeaderMap::new())
            .await
    }

    /// Issue a request against the base address.
    ///
    /// The sequence is fixed: read the session for a credential (anonymous
    /// calls are permitted), build headers with caller overrides winning
    /// on collision, send once, then classify.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Unreachable`] when the transport fails before a
    ///   response arrives;
    /// - [`GatewayError::ClientRejected`] for 4xx responses;
    /// - [`GatewayError::ServerFailed`] for 5xx responses, for any other
    ///   non-success status, and for a success response whose body does
    ///   not decode as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        overrides: HeaderMap,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(path);
        let headers = self.build_headers(overrides);
        debug!(%method, path, "issuing gateway request");

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|error| {
            debug!(%error, path, "gateway transport failure");
            GatewayError::Unreachable
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|error| {
            debug!(%error, path, "gateway response body never arrived");
            GatewayError::Unreachable
        })?;

        if !status.is_success() {
            return Err(classify_failure(status, &bytes));
        }

        serde_json::from_slice(&bytes).map_err(|error| {
            GatewayError::server_failed(status.as_u16(), format!("invalid response body: {error}"))
        })
    }

    /// The configured base address.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        // Plain prefixing, matching how the base address is deployed:
        // `base` carries any `/api` prefix, `path` starts with `/`.
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    fn build_headers(&self, overrides: HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(credential) = self.session.current().credential() {
            let bearer = format!("Bearer {}", credential.as_str());
            if let Ok(value) = HeaderValue::from_str(&bearer) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        for (name, value) in &overrides {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn classify_failure(status: StatusCode, body: &[u8]) -> GatewayError {
    let message = decode_error_message(body)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    if status.is_client_error() {
        GatewayError::client_rejected(status.as_u16(), message)
    } else {
        GatewayError::server_failed(status.as_u16(), message)
    }
}

fn decode_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|message| !message.is_empty())
}
