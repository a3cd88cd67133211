//! Status API integration.
//!
//! Queries a third-party status service (mcsrvstat.us by default) for a
//! server's MOTD, player counts and version. The MOTD's string / list /
//! object forms are resolved here into a single [`Motd`].

use crate::address::Address;
use crate::config::Config;
use crate::error::{PingerError, Result};
use crate::motd::Motd;
use serde::Deserialize;

/// Which MOTD representation to prefer when the API supplies several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotdSource {
    /// The API's plain variant, falling back to the raw one
    #[default]
    Clean,
    /// The raw variant with `§` codes intact, falling back to the clean one
    Raw,
}

/// Server status as reported by the status API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatus {
    pub online: bool,
    pub motd: Option<Motd>,
    pub players_online: Option<u32>,
    pub players_max: Option<u32>,
    pub version: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiResponse {
    online: bool,
    #[serde(default)]
    motd: Option<ApiMotd>,
    #[serde(default)]
    players: Option<ApiPlayers>,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ApiMotd {
    Text(ApiMotdText),
    Variants {
        #[serde(default)]
        raw: Option<ApiMotdText>,
        #[serde(default)]
        clean: Option<ApiMotdText>,
    },
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ApiMotdText {
    Text(String),
    Lines(Vec<String>),
}

#[derive(Deserialize, Debug)]
struct ApiPlayers {
    #[serde(default)]
    online: Option<u32>,
    #[serde(default)]
    max: Option<u32>,
}

impl From<ApiMotdText> for Motd {
    fn from(text: ApiMotdText) -> Self {
        match text {
            ApiMotdText::Text(text) => Motd::PlainText(text),
            ApiMotdText::Lines(lines) => Motd::LineList(lines),
        }
    }
}

impl ApiMotd {
    fn select(self, source: MotdSource) -> Option<Motd> {
        match self {
            ApiMotd::Text(text) => Some(text.into()),
            ApiMotd::Variants { raw, clean } => {
                let (preferred, fallback) = match source {
                    MotdSource::Clean => (clean, raw),
                    MotdSource::Raw => (raw, clean),
                };
                preferred.or(fallback).map(Motd::from)
            }
        }
    }
}

impl ApiResponse {
    fn into_status(self, source: MotdSource) -> ServerStatus {
        let (players_online, players_max) = match self.players {
            Some(players) => (players.online, players.max),
            None => (None, None),
        };
        ServerStatus {
            online: self.online,
            motd: self.motd.and_then(|motd| motd.select(source)),
            players_online,
            players_max,
            version: self.version,
        }
    }
}

/// Client for the status API.
#[derive(Debug, Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    base_url: String,
    motd_source: MotdSource,
}

impl StatusClient {
    /// Create a status client on top of an HTTP client built by
    /// [`Config::http_client`].
    pub fn with_client(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.status_api_url.trim_end_matches('/').to_string(),
            motd_source: config.motd_source,
        }
    }

    /// Fetch the status of a server.
    ///
    /// Issues a single `GET {base}/2/{host}:{port}`; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`PingerError::ServerUnavailable`] on transport errors,
    /// timeouts, non-success status codes, or a response body that does not
    /// have the expected shape.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mcpinger::address::Address;
    /// use mcpinger::config::Config;
    /// use mcpinger::status::StatusClient;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::default();
    /// let client = StatusClient::with_client(config.http_client()?, &config);
    /// let status = client.fetch(&Address::new("10.0.0.5", 25565)).await?;
    /// println!("Online: {}", status.online);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch(&self, address: &Address) -> Result<ServerStatus> {
        let url = format!("{}/2/{}", self.base_url, address);
        tracing::debug!(%url, "querying status API");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(format!("Request failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(unavailable(format!("API returned error: {}", resp.status())));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| unavailable(format!("Failed to read response: {}", e)))?;

        let parsed: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| unavailable(format!("Failed to parse status response: {}", e)))?;

        Ok(parsed.into_status(self.motd_source))
    }
}

fn unavailable(msg: String) -> PingerError {
    PingerError::ServerUnavailable(msg)
}
