// HP API HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, status checking and
// lenient JSON decoding. The API is read-only and unauthenticated: every
// endpoint is a bare GET returning a JSON array, and all filtering is
// done client-side after full retrieval.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{CharacterResponse, SpellResponse};
use crate::transport::TransportConfig;

/// Public instance of the API.
pub const DEFAULT_BASE_URL: &str = "https://hp-api.onrender.com/api";

/// The collection endpoints exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Characters,
    Students,
    Staff,
    Spells,
}

impl Endpoint {
    /// Path relative to the API base.
    pub fn path(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Students => "characters/students",
            Self::Staff => "characters/staff",
            Self::Spells => "spells",
        }
    }
}

/// Raw HTTP client for the HP API.
///
/// All methods return the decoded array payload. Non-success statuses are
/// surfaced as [`Error::Status`]; nothing is retried.
#[derive(Debug, Clone)]
pub struct HpClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HpClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the API root, e.g. `https://hp-api.onrender.com/api`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/{path}` without losing any path prefix on the base.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET {base}/characters`
    pub async fn list_characters(&self) -> Result<Vec<CharacterResponse>, Error> {
        self.get(Endpoint::Characters).await
    }

    /// `GET {base}/characters/students`
    pub async fn list_students(&self) -> Result<Vec<CharacterResponse>, Error> {
        self.get(Endpoint::Students).await
    }

    /// `GET {base}/characters/staff`
    pub async fn list_staff(&self) -> Result<Vec<CharacterResponse>, Error> {
        self.get(Endpoint::Staff).await
    }

    /// `GET {base}/spells`
    pub async fn list_spells(&self) -> Result<Vec<SpellResponse>, Error> {
        self.get(Endpoint::Spells).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request to an endpoint and decode the JSON array body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Vec<T>, Error> {
        let url = self.api_url(endpoint.path())?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        let body = resp.text().await?;
        trace!(bytes = body.len(), "response body received");

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}
