//! Typed clients for the MentalWell REST backend.
//!
//! One submodule per resource family: assessment data (`cognitive`),
//! emotion analysis (`emotion`), and identity (`users`). All of them hang
//! off [`ApiClient`], which owns the HTTP client, the base URL, and a
//! handle to the session store for bearer tokens.
//!
//! Error policy: validation happens before any network I/O, transport and
//! server errors are logged and propagated unchanged, and nothing here
//! retries. Read endpoints are safe to call on every page mount; write
//! endpoints are expected to run at most once per user action.

mod cognitive;
mod emotion;
mod users;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::{ClientConfig, Error, Result, SessionStore};

/// HTTP client for the backend.
///
/// Cheap to clone through `Arc`; a single instance (and therefore a single
/// connection pool and timeout policy) is shared by every page.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<SessionStore>,
}

impl ApiClient {
    /// Build a client from configuration. The request timeout applies to
    /// every call made through this client.
    pub fn new(config: &ClientConfig, store: Arc<SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            store,
        })
    }

    /// The session store this client reads tokens from.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The stored bearer token, or [`Error::MissingCredential`] before any
    /// network I/O when absent.
    pub(crate) fn bearer_token(&self) -> Result<String> {
        self.store.access_token().ok_or(Error::MissingCredential)
    }

    /// The stored account email, required by the per-user read endpoints.
    pub(crate) fn stored_email(&self) -> Result<String> {
        self.store.username().ok_or(Error::MissingCredential)
    }

    /// Map a non-success response to [`Error::Api`], logging the status and
    /// whatever body the server sent.
    pub(crate) async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %message, "backend returned an error");
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Check the status, then decode the body. A 2xx whose body does not
    /// match the expected shape is [`Error::InvalidResponse`], not a
    /// transport error.
    pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let bytes = Self::check(response).await?.bytes().await?;
        decode_body(&bytes)
    }
}

/// Decode a response body that has already passed the status check.
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| Error::InvalidResponse(format!("malformed response body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_without_session() -> ApiClient {
        ApiClient::new(
            &ClientConfig::default(),
            Arc::new(SessionStore::in_memory()),
        )
        .unwrap()
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = client_without_session();
        assert_eq!(
            client.url("/cognitive/questions"),
            "http://localhost:8000/api/cognitive/questions"
        );
    }

    #[test]
    fn bearer_token_fails_without_a_session() {
        let client = client_without_session();
        assert!(matches!(
            client.bearer_token(),
            Err(Error::MissingCredential)
        ));
    }

    #[test]
    fn bearer_token_reads_the_store() {
        let store = Arc::new(SessionStore::in_memory());
        store.save_login("tok-1", "sam@example.com").unwrap();
        let client = ApiClient::new(&ClientConfig::default(), store).unwrap();
        assert_eq!(client.bearer_token().unwrap(), "tok-1");
        assert_eq!(client.stored_email().unwrap(), "sam@example.com");
    }

    #[test]
    fn non_json_body_is_an_invalid_response() {
        let err = decode_body::<crate::types::TokenResponse>(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn wrong_shape_is_an_invalid_response() {
        let err = decode_body::<crate::types::TokenResponse>(br#"{"token":"tok"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn well_formed_body_decodes() {
        let token: crate::types::TokenResponse =
            decode_body(br#"{"access_token":"tok","token_type":"bearer"}"#).unwrap();
        assert_eq!(token.access_token, "tok");
    }
}
