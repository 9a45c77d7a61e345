//! CLI subcommands.

pub mod auth;
pub mod run;
pub mod status;

use std::sync::Arc;

use anyhow::Result;
use mentalwell_core::{ApiClient, ClientConfig, SessionStore};

/// Build an API client over the on-disk session, honoring an optional
/// base-URL override from the command line.
pub fn build_client(api_url: Option<&str>) -> Result<ApiClient> {
    let mut config = ClientConfig::load()?;
    if let Some(url) = api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }
    let store = Arc::new(SessionStore::open_default()?);
    Ok(ApiClient::new(&config, store)?)
}
