//! HTTP client for the Fantasy Premier League API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::{
    cli::types::PlayerId,
    error::{FplError, Result},
    fpl::types::{
        ElementSummary, ElementTypesEnvelope, ElementsEnvelope, PlayerInfoRecord, PositionRecord,
        SeasonStats,
    },
};


/// Base path for the public FPL API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

const USER_AGENT: &str = concat!("fpl-history/", env!("CARGO_PKG_VERSION"));

/// Outcome of a single `element-summary/{id}/` request.
#[derive(Debug)]
pub enum PlayerHistory {
    /// The body parsed; `history_past` may still be empty.
    Found(Vec<SeasonStats>),
    /// Non-success status, e.g. 404 for an id with no player.
    Unavailable(StatusCode),
    /// The body was not JSON. Past the last valid id the API answers this way.
    Malformed(serde_json::Error),
}

/// Thin wrapper over a reusable [`reqwest::Client`] bound to one API base URL.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: Url,
}

impl FplClient {
    /// Client for the public API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(FPL_BASE_URL)
    }

    /// Client for an alternate base URL (mirrors, mock servers).
    ///
    /// The URL must parse, use `http` or `https`, and name a host.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let mut base_url = match Url::parse(&raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => url,
            _ => return Err(FplError::InvalidBaseUrl { url: raw }),
        };

        // Endpoints are joined onto the base, so its path must end in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { client, base_url })
    }

    /// The normalized base, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn player_summary_url(&self, player_id: PlayerId) -> Result<Url> {
        Ok(self
            .base_url
            .join(&format!("element-summary/{}/", player_id))?)
    }

    pub fn bootstrap_url(&self) -> Result<Url> {
        Ok(self.base_url.join("bootstrap-static/")?)
    }

    /// Fetch one player's past seasons.
    ///
    /// Transport failures are errors. A body that is not JSON at all is
    /// reported as [`PlayerHistory::Malformed`] so the caller can treat it as
    /// the end of the id range; JSON of the wrong shape is an error.
    pub async fn fetch_player_history(&self, player_id: PlayerId) -> Result<PlayerHistory> {
        let url = self.player_summary_url(player_id)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Ok(PlayerHistory::Unavailable(status));
        }

        let body = response.text().await?;
        let value: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(e) => return Ok(PlayerHistory::Malformed(e)),
        };

        let summary: ElementSummary = serde_json::from_value(value)?;
        Ok(PlayerHistory::Found(summary.into_history()))
    }

    /// GET `bootstrap-static/` and decode the parts `T` describes.
    pub async fn fetch_bootstrap<T: DeserializeOwned>(&self) -> Result<T> {
        let url = self.bootstrap_url()?;
        debug!("GET {}", url);

        let v = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(v)
    }

    /// Current-season stats for every listed player, in API order.
    pub async fn fetch_current_season(&self) -> Result<Vec<SeasonStats>> {
        let envelope: ElementsEnvelope = self.fetch_bootstrap().await?;
        Ok(envelope
            .elements
            .iter()
            .map(SeasonStats::from_current)
            .collect())
    }

    /// Identity, team, price and ownership for every listed player.
    pub async fn fetch_player_info(&self) -> Result<Vec<PlayerInfoRecord>> {
        let envelope: ElementsEnvelope = self.fetch_bootstrap().await?;
        Ok(envelope
            .elements
            .iter()
            .map(PlayerInfoRecord::from)
            .collect())
    }

    /// The position table, as listed.
    pub async fn fetch_positions(&self) -> Result<Vec<PositionRecord>> {
        let envelope: ElementTypesEnvelope = self.fetch_bootstrap().await?;
        Ok(envelope.element_types)
    }
}
