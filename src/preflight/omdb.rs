//! OMDb API preflight check.

use super::CheckResult;
use crate::models::config::Config;
use crate::services::omdb::{OmdbClient, OmdbConfig};

/// Check that an OMDb API key is configured and accepted.
pub async fn check(config: &Config) -> CheckResult {
    let Some(key) = config.omdb_api_key.clone() else {
        return CheckResult::fail(
            "OMDb",
            "API key not configured",
            "Set omdbAPIKey in conf.json or the OMDB_API_KEY environment variable",
        );
    };

    let client = OmdbClient::new(OmdbConfig::new(key));
    match client.verify_api_key().await {
        Ok(true) => CheckResult::ok("OMDb", "API key valid"),
        Ok(false) => CheckResult::fail(
            "OMDb",
            "API key rejected",
            "Request a key at https://www.omdbapi.com/apikey.aspx",
        ),
        Err(e) => CheckResult::fail(
            "OMDb",
            &format!("unreachable: {}", e),
            "Check your network connection",
        ),
    }
}
