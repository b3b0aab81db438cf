//! Guessit filename-parsing service.
//!
//! Spawns the external `guessit` CLI (a Python tool) on a bare filename
//! and parses its JSON output into a [`Guess`]. The binary can be
//! overridden via the `GUESSIT_BIN` environment variable.

use crate::models::film::Guess;
use crate::Result;
use serde::Deserialize;
use tokio::process::Command;

const DEFAULT_BINARY: &str = "guessit";

/// Raw guessit JSON output. Only the fields the pipeline consumes are
/// deserialized; everything else guessit prints is ignored.
#[derive(Debug, Deserialize)]
struct GuessitOutput {
    title: Option<String>,
    year: Option<u16>,
    genres: Option<String>,
}

/// Client for the external guessit parser.
#[derive(Debug, Clone)]
pub struct GuessitClient {
    binary: String,
}

impl GuessitClient {
    /// Create a client using `GUESSIT_BIN` or the default binary name.
    pub fn new() -> Self {
        let binary =
            std::env::var("GUESSIT_BIN").unwrap_or_else(|_| DEFAULT_BINARY.to_string());
        Self { binary }
    }

    /// Check if guessit is installed (synchronous, used by preflight).
    pub fn is_installed(&self) -> bool {
        std::process::Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Get the guessit version line.
    pub fn version(&self) -> Result<String> {
        let output = std::process::Command::new(&self.binary)
            .arg("--version")
            .output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or("unknown").to_string())
    }

    /// Parse a bare filename into a structured guess.
    pub async fn parse_name(&self, filename: &str) -> Result<Guess> {
        let output = Command::new(&self.binary)
            .arg("--json")
            .arg(filename)
            .output()
            .await?;

        if !output.status.success() {
            return Err(crate::Error::GuessFailed(filename.to_string()));
        }

        let parsed: GuessitOutput = serde_json::from_slice(&output.stdout)?;

        Ok(Guess {
            title: parsed.title,
            year: parsed.year,
            genres: parsed.genres,
        })
    }
}

impl Default for GuessitClient {
    fn default() -> Self {
        Self::new()
    }
}
