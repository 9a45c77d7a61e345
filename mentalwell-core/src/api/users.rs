//! Identity endpoints: login and signup.
//!
//! Both are unauthenticated writes. On success the returned token and the
//! account email are persisted through the session store, which is what
//! flips every guard in the app to "logged in".

use tracing::{debug, info};

use super::ApiClient;
use crate::types::{LoginRequest, SignupRequest, TokenResponse};
use crate::Result;

impl ApiClient {
    /// Log in and persist the issued token.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        debug!(%email, "logging in");
        let response = self
            .http()
            .post(self.url("/users/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let token: TokenResponse = Self::read_json(response).await?;
        self.store().save_login(&token.access_token, email)?;
        info!(%email, "login succeeded");
        Ok(token)
    }

    /// Register a new account and persist the issued token.
    ///
    /// Password confirmation is the caller's job (`SignupForm::into_request`)
    /// and has already happened by the time a `SignupRequest` exists.
    pub async fn register(&self, signup: &SignupRequest) -> Result<TokenResponse> {
        debug!(email = %signup.email, "registering account");
        let response = self
            .http()
            .post(self.url("/users/register"))
            .json(signup)
            .send()
            .await?;
        let token: TokenResponse = Self::read_json(response).await?;
        self.store().save_login(&token.access_token, &signup.email)?;
        info!(email = %signup.email, "registration succeeded");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::{ClientConfig, SessionStore};

    use super::ApiClient;

    #[tokio::test]
    async fn failed_login_leaves_the_store_empty() {
        // Point at a port nothing listens on; the transport error must
        // propagate and the store must stay untouched.
        let config = ClientConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_millis(250),
        };
        let store = Arc::new(SessionStore::in_memory());
        let client = ApiClient::new(&config, Arc::clone(&store)).unwrap();

        let result = client.login("sam@example.com", "pw").await;
        assert!(result.is_err());
        assert!(store.access_token().is_none());
        assert!(store.username().is_none());
    }
}
