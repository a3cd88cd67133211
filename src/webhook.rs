//! Discord webhook notifications.
//!
//! Forwards a status report to a Discord webhook as a single embed. Delivery
//! failures are reported to the caller, which logs them; they never replace
//! the displayed result.

use crate::address::Address;
use crate::error::{PingerError, Result};
use crate::render::StatusReport;
use crate::utils::validation::truncate_chars;
use reqwest::StatusCode;
use serde::Serialize;

/// Discord's limit on the length of an embed field value.
const FIELD_VALUE_LIMIT: usize = 1024;

/// Length of the code-block fence wrapped around the MOTD.
const CODE_BLOCK_OVERHEAD: usize = "```\n\n```".len();

/// Zero-width space placed after each backtick inside the MOTD code block.
const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Embed sidebar color (Minecraft green).
const EMBED_COLOR: u32 = 0x55ff55;

/// Webhook request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

/// A Discord embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
}

/// A named embed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn new(name: &str, value: String, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value,
            inline,
        }
    }
}

impl WebhookPayload {
    /// Build the payload for a report.
    ///
    /// The MOTD is sent as plain text inside a code block so it renders
    /// monospaced; colors are dropped.
    pub fn from_report(address: &Address, report: &StatusReport) -> Self {
        let motd = truncate_chars(
            &escape_code_block(&report.motd_plain()),
            FIELD_VALUE_LIMIT - CODE_BLOCK_OVERHEAD,
        );

        Self {
            embeds: vec![Embed {
                title: "Minecraft Server Info".to_string(),
                description: address.to_string(),
                color: EMBED_COLOR,
                fields: vec![
                    EmbedField::new("MOTD", format!("```\n{}\n```", motd), false),
                    EmbedField::new("Players Online", report.players(), true),
                    EmbedField::new(
                        "Version",
                        truncate_chars(&report.version_or_na(), FIELD_VALUE_LIMIT),
                        true,
                    ),
                ],
            }],
        }
    }
}

/// Keep backticks from closing the surrounding code fence.
///
/// No two backticks stay adjacent, so no run of three can form.
fn escape_code_block(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        out.push(c);
        if c == '`' {
            out.push(ZERO_WIDTH_SPACE);
        }
    }
    out
}

/// Client for a single webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    /// Create a client for the given webhook URL.
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Post a payload to the webhook.
    ///
    /// # Errors
    ///
    /// Returns [`PingerError::WebhookDelivery`] if the request fails or the
    /// endpoint answers with anything other than `204 No Content`.
    pub async fn send(&self, payload: &WebhookPayload) -> Result<()> {
        let resp = self
            .http
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| PingerError::WebhookDelivery(format!("Request failed: {}", e)))?;

        if resp.status() == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(PingerError::WebhookDelivery(format!(
                "Webhook returned status: {}",
                resp.status()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motd::format_text;
    use mockito::Matcher;
    use serde_json::json;

    fn sample_report() -> StatusReport {
        StatusReport {
            motd: Some(format_text("§aHello World")),
            players_online: 3,
            players_max: 20,
            version: Some("1.20.1".to_string()),
        }
    }

    #[test]
    fn test_payload_shape() {
        let payload = WebhookPayload::from_report(&Address::new("10.0.0.5", 25566), &sample_report());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "embeds": [{
                    "title": "Minecraft Server Info",
                    "description": "10.0.0.5:25566",
                    "color": 0x55ff55,
                    "fields": [
                        { "name": "MOTD", "value": "```\nHello World\n```", "inline": false },
                        { "name": "Players Online", "value": "3/20", "inline": true },
                        { "name": "Version", "value": "1.20.1", "inline": true }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_payload_missing_motd() {
        let report = StatusReport {
            motd: None,
            players_online: 0,
            players_max: 0,
            version: None,
        };
        let payload = WebhookPayload::from_report(&Address::new("10.0.0.5", 25565), &report);
        let fields = &payload.embeds[0].fields;
        assert_eq!(fields[0].value, "```\nN/A\n```");
        assert_eq!(fields[2].value, "N/A");
    }

    #[test]
    fn test_payload_truncates_long_motd() {
        let report = StatusReport {
            motd: Some(format_text(&"x".repeat(5000))),
            ..sample_report()
        };
        let payload = WebhookPayload::from_report(&Address::new("10.0.0.5", 25565), &report);
        let motd = &payload.embeds[0].fields[0].value;
        assert_eq!(motd.chars().count(), FIELD_VALUE_LIMIT);
        assert!(motd.starts_with("```\nxxx"));
        assert!(motd.ends_with("…\n```"));
    }

    #[test]
    fn test_payload_backticks_cannot_close_fence() {
        for motd in ["a```b", "`````", "``x``"] {
            let report = StatusReport {
                motd: Some(format_text(motd)),
                ..sample_report()
            };
            let payload = WebhookPayload::from_report(&Address::new("10.0.0.5", 25565), &report);
            let value = &payload.embeds[0].fields[0].value;
            let inner = value
                .strip_prefix("```\n")
                .and_then(|v| v.strip_suffix("\n```"))
                .unwrap();
            assert!(!inner.contains("``"), "fence can close early in {:?}", inner);
            assert_eq!(inner.replace('\u{200b}', ""), motd);
        }
    }

    #[tokio::test]
    async fn test_send_success_on_204() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/webhook")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "embeds": [{ "title": "Minecraft Server Info" }]
            })))
            .with_status(204)
            .create_async()
            .await;

        let client = WebhookClient::new(reqwest::Client::new(), format!("{}/webhook", server.url()));
        let payload = WebhookPayload::from_report(&Address::new("10.0.0.5", 25565), &sample_report());
        assert!(client.send(&payload).await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_non_204_is_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/webhook")
            .with_status(200)
            .create_async()
            .await;

        let client = WebhookClient::new(reqwest::Client::new(), format!("{}/webhook", server.url()));
        let payload = WebhookPayload::from_report(&Address::new("10.0.0.5", 25565), &sample_report());
        let result = client.send(&payload).await;
        assert!(matches!(result, Err(PingerError::WebhookDelivery(_))));
    }

    #[tokio::test]
    async fn test_send_unreachable_is_failure() {
        let client = WebhookClient::new(reqwest::Client::new(), "http://127.0.0.1:1/webhook");
        let payload = WebhookPayload::from_report(&Address::new("10.0.0.5", 25565), &sample_report());
        let result = client.send(&payload).await;
        assert!(matches!(result, Err(PingerError::WebhookDelivery(_))));
    }
}
