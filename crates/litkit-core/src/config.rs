//! SDK client configuration.
//!
//! Selects the network a client connects to and the defaults it applies to
//! requests. Defaults target the `serrano` network on `ethereum`. Override via
//! environment variables or explicit construction for local testing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::Url;

use crate::error::LitKitError;

/// Networks a client may connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LitNetwork {
    Jalapeno,
    Serrano,
    Localhost,
    /// Caller-supplied node set; requires explicit bootstrap URLs.
    Custom,
}

impl LitNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jalapeno => "jalapeno",
            Self::Serrano => "serrano",
            Self::Localhost => "localhost",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for LitNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LitNetwork {
    type Err = LitKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jalapeno" => Ok(Self::Jalapeno),
            "serrano" => Ok(Self::Serrano),
            "localhost" => Ok(Self::Localhost),
            "custom" => Ok(Self::Custom),
            other => Err(LitKitError::SchemaValidation(format!(
                "unknown network: {other:?}"
            ))),
        }
    }
}

/// Configuration shared by clients of the access-control network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkConfig {
    pub network: LitNetwork,
    /// Chain used when a request does not name one.
    pub default_chain: String,
    /// Node endpoints to bootstrap from. Empty for hosted networks, where the
    /// node client resolves them itself.
    pub bootstrap_urls: Vec<Url>,
    /// Minimum number of nodes that must respond before a request is served.
    pub min_node_count: usize,
    pub debug: bool,
    pub connect_timeout_secs: u64,
}

const DEFAULT_CHAIN: &str = "ethereum";
const DEFAULT_MIN_NODE_COUNT: usize = 6;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 120;
const LOCALHOST_PORTS: [u16; 3] = [7470, 7471, 7472];

impl SdkConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `LIT_NETWORK` (default: `serrano`)
    /// - `LIT_DEFAULT_CHAIN` (default: `ethereum`)
    /// - `LIT_BOOTSTRAP_URLS` (comma-separated; required when `LIT_NETWORK=custom`)
    /// - `LIT_MIN_NODE_COUNT` (default: 6)
    /// - `LIT_DEBUG` (`true` or `1` to enable)
    /// - `LIT_CONNECT_TIMEOUT_SECS` (default: 120)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let network = match lookup("LIT_NETWORK") {
            Some(raw) => raw
                .parse::<LitNetwork>()
                .map_err(|_| ConfigError::InvalidNetwork(raw))?,
            None => {
                tracing::debug!("LIT_NETWORK unset, defaulting to serrano");
                LitNetwork::Serrano
            }
        };

        let bootstrap_urls = match lookup("LIT_BOOTSTRAP_URLS") {
            Some(raw) => parse_url_list("LIT_BOOTSTRAP_URLS", &raw)?,
            None => default_bootstrap_urls(network)?,
        };
        if network == LitNetwork::Custom && bootstrap_urls.is_empty() {
            return Err(ConfigError::MissingBootstrapUrls);
        }

        Ok(Self {
            network,
            default_chain: lookup("LIT_DEFAULT_CHAIN").unwrap_or_else(|| {
                tracing::debug!(chain = DEFAULT_CHAIN, "LIT_DEFAULT_CHAIN unset");
                DEFAULT_CHAIN.to_string()
            }),
            bootstrap_urls,
            min_node_count: parse_or("LIT_MIN_NODE_COUNT", &lookup, DEFAULT_MIN_NODE_COUNT)?,
            debug: lookup("LIT_DEBUG")
                .map(|v| matches!(v.as_str(), "true" | "1"))
                .unwrap_or(false),
            connect_timeout_secs: parse_or(
                "LIT_CONNECT_TIMEOUT_SECS",
                &lookup,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }

    /// A configuration pointing at a local node set (for testing).
    pub fn local() -> Result<Self, ConfigError> {
        Ok(Self {
            network: LitNetwork::Localhost,
            default_chain: DEFAULT_CHAIN.to_string(),
            bootstrap_urls: default_bootstrap_urls(LitNetwork::Localhost)?,
            min_node_count: 2,
            debug: true,
            connect_timeout_secs: 5,
        })
    }
}

fn default_bootstrap_urls(network: LitNetwork) -> Result<Vec<Url>, ConfigError> {
    match network {
        LitNetwork::Localhost => LOCALHOST_PORTS
            .iter()
            .map(|port| {
                Url::parse(&format!("http://127.0.0.1:{port}"))
                    .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))
            })
            .collect(),
        LitNetwork::Jalapeno | LitNetwork::Serrano | LitNetwork::Custom => Ok(Vec::new()),
    }
}

fn parse_url_list(var: &str, raw: &str) -> Result<Vec<Url>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Url::parse(s).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
        })
        .collect()
}

fn parse_or<T: FromStr>(
    var: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(var.to_string(), raw)),
        None => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown network {0:?}; expected jalapeno, serrano, localhost, or custom")]
    InvalidNetwork(String),
    #[error("LIT_BOOTSTRAP_URLS is required when LIT_NETWORK=custom")]
    MissingBootstrapUrls,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid number for {0}: {1:?}")]
    InvalidNumber(String, String),
}
