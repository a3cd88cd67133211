//! Custom error types for mcpinger.
//!
//! Every stage of the query pipeline reports failures through [`PingerError`].
//! The two user-facing variants map onto the canonical messages shown in place
//! of a server report.

use std::fmt;

/// Message shown when the address field cannot be turned into a host and port.
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid IP or Domain";

/// Message shown when the status API gives no usable answer.
pub const SERVER_NOT_FOUND_MESSAGE: &str = "Server not found";

/// Main error type for mcpinger operations.
#[derive(Debug)]
pub enum PingerError {
    /// Configuration errors (invalid env vars or flags)
    Config(String),
    /// Domain lookup failed or the address field is malformed
    UnresolvedAddress(String),
    /// Status API unreachable, timed out, or returned an unusable response
    ServerUnavailable(String),
    /// Webhook endpoint rejected the notification or could not be reached
    WebhookDelivery(String),
    /// Network/HTTP errors outside a specific stage
    Network(String),
    /// Generic I/O errors
    Io(std::io::Error),
}

impl PingerError {
    /// The message to display to the user in place of a server report.
    ///
    /// Only the address and status stages have canonical messages; everything
    /// else falls back to the error's `Display` output.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnresolvedAddress(_) => INVALID_ADDRESS_MESSAGE.to_string(),
            Self::ServerUnavailable(_) => SERVER_NOT_FOUND_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for PingerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::UnresolvedAddress(msg) => write!(f, "Unresolved address: {}", msg),
            Self::ServerUnavailable(msg) => write!(f, "Server unavailable: {}", msg),
            Self::WebhookDelivery(msg) => write!(f, "Webhook delivery failed: {}", msg),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for PingerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PingerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PingerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<reqwest::Error> for PingerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<std::env::VarError> for PingerError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for PingerError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Io(std::io::Error::other(format!("Task join error: {}", err)))
    }
}

/// Result type alias for mcpinger operations.
pub type Result<T> = std::result::Result<T, PingerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = PingerError::UnresolvedAddress("no such host".to_string());
        assert_eq!(err.user_message(), "Invalid IP or Domain");

        let err = PingerError::ServerUnavailable("timed out".to_string());
        assert_eq!(err.user_message(), "Server not found");

        let err = PingerError::Config("bad port".to_string());
        assert_eq!(err.user_message(), "Configuration error: bad port");
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = PingerError::WebhookDelivery("status 500".to_string());
        assert_eq!(err.to_string(), "Webhook delivery failed: status 500");
    }
}
