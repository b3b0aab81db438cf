//! Guessit preflight check.

use super::CheckResult;
use crate::services::guessit::GuessitClient;

/// Check if the guessit binary is available.
pub fn check() -> CheckResult {
    let client = GuessitClient::new();
    if client.is_installed() {
        match client.version() {
            Ok(version) => CheckResult::ok("guessit", &format!("installed ({})", version)),
            Err(_) => CheckResult::ok("guessit", "installed"),
        }
    } else {
        CheckResult::fail(
            "guessit",
            "not found",
            "Install with: pip install guessit",
        )
    }
}
