//! OMDb API client.

use crate::models::film::MetadataFields;
use crate::Result;
use serde::Deserialize;

const OMDB_BASE_URL: &str = "https://www.omdbapi.com";

/// Lookup timeout. Each title query that exceeds this resolves as a
/// failure and the record keeps its guess-only fields.
const LOOKUP_TIMEOUT_SECS: u64 = 30;

/// OMDb client configuration.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// API key.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OmdbConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            timeout_secs: LOOKUP_TIMEOUT_SECS,
        }
    }

    /// Create config from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("OMDB_API_KEY").map_err(|_| crate::Error::OmdbApiKeyMissing)?;
        Ok(Self::new(api_key))
    }
}

/// OMDb API client.
pub struct OmdbClient {
    config: OmdbConfig,
    client: reqwest::Client,
}

/// Every OMDb response carries `Response: "True"/"False"`; failures add an
/// `Error` message and omit the film fields.
#[derive(Debug, Deserialize)]
struct OmdbEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(flatten)]
    film: OmdbFilm,
}

/// Film record as OMDb returns it. Missing fields come back as the literal
/// string "N/A"; use [`OmdbFilm::metadata_fields`] to get cleaned values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbFilm {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// Year as OMDb formats it: "2010", or "2010–2013" for series.
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    /// Comma-delimited genre names, e.g. "Action, Crime, Drama".
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
}

/// Treat OMDb's "N/A" placeholder as an absent value.
fn not_na(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "N/A" && !v.is_empty())
}

/// Parse an OMDb year string ("2010", "2010–2013") to its leading year.
fn parse_year(value: &str) -> Option<u16> {
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}

impl OmdbFilm {
    /// Convert to the cleaned field set the enricher merges.
    pub fn metadata_fields(self) -> MetadataFields {
        MetadataFields {
            name: not_na(self.title),
            year: not_na(self.year).as_deref().and_then(parse_year),
            genres: not_na(self.genre),
        }
    }
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: OmdbConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");
        Self { config, client }
    }

    /// Create a new OMDb client from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(OmdbConfig::from_env()?))
    }

    fn build_url(&self, extra_params: &str) -> String {
        format!(
            "{}/?apikey={}{}",
            OMDB_BASE_URL, self.config.api_key, extra_params
        )
    }

    /// Verify the API key is accepted.
    pub async fn verify_api_key(&self) -> Result<bool> {
        let url = self.build_url("&i=tt0111161");
        match self.client.get(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Look up a film by exact title.
    pub async fn get_by_title(&self, title: &str) -> Result<OmdbFilm> {
        let url = self.build_url(&format!("&t={}", urlencoding::encode(title)));

        let envelope: OmdbEnvelope = self.client.get(&url).send().await?.json().await?;

        if envelope.response != "True" {
            let reason = envelope
                .error
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(crate::Error::TitleNotFound(format!(
                "{}: {}",
                title, reason
            )));
        }

        Ok(envelope.film)
    }
}
