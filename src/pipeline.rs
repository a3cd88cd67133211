//! The query pipeline.
//!
//! One user action runs resolve, fetch, format and notify to completion. The
//! caller awaits each run before accepting the next input, so the display
//! only ever shows the most recently completed query.

use crate::address::{resolve_address, Address};
use crate::config::Config;
use crate::error::{PingerError, Result};
use crate::render::{RenderMode, StatusReport};
use crate::status::StatusClient;
use crate::webhook::{WebhookClient, WebhookPayload};

/// Result of a successful query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub address: Address,
    pub report: StatusReport,
}

/// Runs queries with a fixed configuration.
#[derive(Debug)]
pub struct Pipeline {
    config: Config,
    status: StatusClient,
    webhook: Option<WebhookClient>,
}

impl Pipeline {
    /// Build a pipeline and its HTTP clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let http = config.http_client()?;

        let status = StatusClient::with_client(http.clone(), &config);
        let webhook = config
            .webhook_url
            .as_ref()
            .map(|url| WebhookClient::new(http, url.clone()));

        if webhook.is_none() {
            tracing::debug!("no webhook configured, forwarding disabled");
        }

        Ok(Self {
            config,
            status,
            webhook,
        })
    }

    /// The configuration this pipeline was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Query a server using the configured default port.
    pub async fn run(&self, input: &str) -> Result<QueryResult> {
        self.run_with_port(input, &self.config.default_port).await
    }

    /// Query a server.
    ///
    /// # Arguments
    ///
    /// * `input` - Address field (`host` or `host:port`)
    /// * `port_field` - Port used when `input` has none
    ///
    /// # Errors
    ///
    /// - [`PingerError::UnresolvedAddress`] if the address cannot be resolved;
    ///   nothing is fetched.
    /// - [`PingerError::ServerUnavailable`] if the status API fails or reports
    ///   the server offline; nothing is formatted or forwarded.
    ///
    /// Webhook failures are logged and do not affect the result.
    pub async fn run_with_port(&self, input: &str, port_field: &str) -> Result<QueryResult> {
        // Name resolution blocks, so run it off the async thread
        let input_owned = input.to_string();
        let port_owned = port_field.to_string();
        let address =
            tokio::task::spawn_blocking(move || resolve_address(&input_owned, &port_owned)).await??;

        let status = self.status.fetch(&address).await?;
        if !status.online {
            return Err(PingerError::ServerUnavailable(format!(
                "{} reported offline",
                address
            )));
        }

        let report = StatusReport::from_status(&status);
        tracing::info!(
            %address,
            players_online = report.players_online,
            players_max = report.players_max,
            "server query complete"
        );

        if let Some(webhook) = &self.webhook {
            let payload = WebhookPayload::from_report(&address, &report);
            match webhook.send(&payload).await {
                Ok(()) => tracing::info!(%address, "forwarded status to webhook"),
                Err(e) => tracing::warn!(%address, error = %e, "webhook notification failed"),
            }
        }

        Ok(QueryResult { address, report })
    }

    /// Query a server and produce the text to display.
    ///
    /// Errors become their user-facing message. The returned flag is `true`
    /// when the query succeeded.
    pub async fn display(&self, input: &str, port_field: &str, mode: RenderMode) -> (String, bool) {
        match self.run_with_port(input, port_field).await {
            Ok(result) => (result.report.render(mode), true),
            Err(e) => {
                tracing::warn!(input, error = %e, "server query failed");
                (e.user_message(), false)
            }
        }
    }
}
