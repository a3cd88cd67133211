//! Server address resolution.
//!
//! Turns the free-text address field (and the separate port field) into a
//! concrete [`Address`]. Inputs carrying an explicit port are taken as-is;
//! bare host names are resolved to a numeric IP first.

use crate::error::{PingerError, Result};
use crate::utils::validation::{is_valid_host, parse_port};
use std::fmt;
use std::net::{IpAddr, Ipv6Addr, ToSocketAddrs};

/// Port used by Minecraft servers unless configured otherwise.
pub const DEFAULT_MINECRAFT_PORT: u16 = 25565;

/// A concrete server address: a domain or literal IP plus a port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub host: String,
    pub port: u16,
}

impl Address {
    /// Create an address from its parts.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Resolve the address field into an [`Address`].
///
/// # Arguments
///
/// * `input` - Address field, e.g. `"play.example.com"` or `"10.0.0.5:25566"`
/// * `default_port` - Port field, used when `input` carries no port
///
/// # Behavior
///
/// - `host:port` is split and returned without any name lookup; the port
///   overrides `default_port`.
/// - `[v6]:port` and bare IP literals are returned without a lookup.
/// - Anything else is treated as a host name and resolved to an IP address,
///   preferring IPv4.
///
/// This performs a blocking DNS lookup for host names; call it from
/// `spawn_blocking` inside async code.
///
/// # Errors
///
/// Returns [`PingerError::UnresolvedAddress`] for malformed input, an invalid
/// port, or a failed lookup. Never panics.
///
/// # Examples
///
/// ```
/// use mcpinger::address::{resolve_address, Address};
///
/// let address = resolve_address("10.0.0.5:25566", "25565").unwrap();
/// assert_eq!(address, Address::new("10.0.0.5", 25566));
/// ```
pub fn resolve_address(input: &str, default_port: &str) -> Result<Address> {
    let input = input.trim();
    if input.is_empty() {
        return Err(unresolved("address is empty"));
    }

    if input.starts_with('[') {
        return parse_bracketed(input, default_port);
    }

    if input.matches(':').count() == 1 {
        let (host, port) = input
            .split_once(':')
            .ok_or_else(|| unresolved("missing port separator"))?;
        if !is_valid_host(host) {
            return Err(unresolved(format!("invalid host '{}'", host)));
        }
        let port = parse_port(port).ok_or_else(|| unresolved(format!("invalid port '{}'", port)))?;
        return Ok(Address::new(host, port));
    }

    let port = parse_port(default_port)
        .ok_or_else(|| unresolved(format!("invalid port '{}'", default_port)))?;

    if let Ok(ip) = input.parse::<IpAddr>() {
        return Ok(Address::new(ip.to_string(), port));
    }

    if input.contains(':') || !is_valid_host(input) {
        return Err(unresolved(format!("malformed address '{}'", input)));
    }

    let ip = lookup_host(input, port)?;
    tracing::debug!(host = input, %ip, "resolved host name");
    Ok(Address::new(ip.to_string(), port))
}

/// Parse `[v6]` or `[v6]:port`.
fn parse_bracketed(input: &str, default_port: &str) -> Result<Address> {
    let (inner, rest) = input[1..]
        .split_once(']')
        .ok_or_else(|| unresolved(format!("unterminated bracket in '{}'", input)))?;

    let ip = inner
        .parse::<Ipv6Addr>()
        .map_err(|_| unresolved(format!("invalid IPv6 address '{}'", inner)))?;

    let port = match rest {
        "" => default_port,
        rest => rest
            .strip_prefix(':')
            .ok_or_else(|| unresolved(format!("unexpected '{}' after address", rest)))?,
    };
    let port = parse_port(port).ok_or_else(|| unresolved(format!("invalid port '{}'", port)))?;

    Ok(Address::new(ip.to_string(), port))
}

/// Resolve a host name to one IP address, preferring IPv4.
fn lookup_host(host: &str, port: u16) -> Result<IpAddr> {
    let addrs: Vec<_> = (host, port)
        .to_socket_addrs()
        .map_err(|e| unresolved(format!("failed to resolve '{}': {}", host, e)))?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .map(|addr| addr.ip())
        .ok_or_else(|| unresolved(format!("no addresses found for '{}'", host)))
}

fn unresolved(msg: impl Into<String>) -> PingerError {
    PingerError::UnresolvedAddress(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_port_skips_lookup() {
        let address = resolve_address("10.0.0.5:25566", "25565").unwrap();
        assert_eq!(address, Address::new("10.0.0.5", 25566));

        // Host names with a port are taken as-is, even unresolvable ones
        let address = resolve_address("nonexistent.invalid:25570", "25565").unwrap();
        assert_eq!(address, Address::new("nonexistent.invalid", 25570));
    }

    #[test]
    fn test_explicit_port_overrides_invalid_default() {
        let address = resolve_address("10.0.0.5:25566", "not a port").unwrap();
        assert_eq!(address.port, 25566);
    }

    #[test]
    fn test_ip_literal_uses_default_port() {
        let address = resolve_address("  192.168.1.20 ", "25565").unwrap();
        assert_eq!(address, Address::new("192.168.1.20", DEFAULT_MINECRAFT_PORT));

        let address = resolve_address("::1", "25570").unwrap();
        assert_eq!(address, Address::new("::1", 25570));
    }

    #[test]
    fn test_bracketed_ipv6() {
        let address = resolve_address("[2001:db8::1]:25566", "25565").unwrap();
        assert_eq!(address, Address::new("2001:db8::1", 25566));

        let address = resolve_address("[::1]", "25565").unwrap();
        assert_eq!(address, Address::new("::1", 25565));

        assert!(resolve_address("[::1", "25565").is_err());
        assert!(resolve_address("[not-an-ip]:25565", "25565").is_err());
        assert!(resolve_address("[::1]25565", "25565").is_err());
    }

    #[test]
    fn test_host_name_lookup() {
        let address = resolve_address("localhost", "25565").unwrap();
        assert_eq!(address.port, 25565);
        assert!(address.host == "127.0.0.1" || address.host == "::1");
    }

    #[test]
    fn test_unresolvable_host() {
        let result = resolve_address("nonexistent.invalid.domain.test", "25565");
        assert!(matches!(result, Err(PingerError::UnresolvedAddress(_))));
    }

    #[test]
    fn test_malformed_input() {
        for input in ["", "   ", ":25565", "host:", "host:abc", "host:70000", "a:b:c", "bad host"] {
            let result = resolve_address(input, "25565");
            assert!(
                matches!(result, Err(PingerError::UnresolvedAddress(_))),
                "expected unresolved for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_url_delimiters_in_host_rejected() {
        for input in ["a/b:25565", "x?y:1", "x/../../evil?q=#:25565", "user@host:25565", "a%2Fb"] {
            let result = resolve_address(input, "25565");
            assert!(
                matches!(result, Err(PingerError::UnresolvedAddress(_))),
                "expected unresolved for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_invalid_default_port() {
        assert!(resolve_address("10.0.0.5", "").is_err());
        assert!(resolve_address("10.0.0.5", "65536").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Address::new("10.0.0.5", 25565).to_string(), "10.0.0.5:25565");
        assert_eq!(Address::new("::1", 25565).to_string(), "[::1]:25565");
    }
}
