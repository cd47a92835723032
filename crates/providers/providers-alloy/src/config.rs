//! TOML configuration for the price sources.

use std::{path::Path, time::Duration};

use alloy_primitives::Address;
use serde::Deserialize;
use url::Url;

use crate::{
    CHAINLINK_USDC_USD_FEED, ChainlinkFeed, CoingeckoFeed, FallbackSource, RedstoneFeed,
};

/// The default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// An error loading a [`SourcesConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid TOML or does not match the schema.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    /// An endpoint URL could not be parsed.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

/// Settings for the Chainlink source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainlinkConfig {
    /// The Ethereum JSON-RPC endpoint.
    pub rpc_url: Url,
    /// The aggregator address.
    #[serde(default = "default_feed_address")]
    pub feed_address: Address,
    /// The aggregator's decimals. Read from the aggregator when unset.
    #[serde(default)]
    pub decimals: Option<u8>,
}

const fn default_feed_address() -> Address {
    CHAINLINK_USDC_USD_FEED
}

/// Settings for the Coingecko source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoingeckoConfig {
    /// The price endpoint. Defaults to [`CoingeckoFeed::DEFAULT_URL`].
    pub url: Option<Url>,
}

impl CoingeckoConfig {
    /// Returns the configured endpoint, or the public one.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        self.url.clone().map_or_else(|| Url::parse(CoingeckoFeed::DEFAULT_URL), Ok)
    }
}

/// Settings for the Redstone source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RedstoneConfig {
    /// The price endpoint. Defaults to [`RedstoneFeed::DEFAULT_URL`].
    pub url: Option<Url>,
}

impl RedstoneConfig {
    /// Returns the configured endpoint, or the public one.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        self.url.clone().map_or_else(|| Url::parse(RedstoneFeed::DEFAULT_URL), Ok)
    }
}

/// Configuration for all three price sources.
///
/// ```toml
/// timeout_secs = 10
///
/// [chainlink]
/// rpc_url = "https://eth-mainnet.example.org"
///
/// [coingecko]
/// url = "https://api.coingecko.com/api/v3/simple/price?ids=usd-coin&vs_currencies=usd"
/// ```
///
/// Only `chainlink.rpc_url` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// The per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// The Chainlink source.
    pub chainlink: ChainlinkConfig,
    /// The Coingecko source.
    #[serde(default)]
    pub coingecko: CoingeckoConfig,
    /// The Redstone source.
    #[serde(default)]
    pub redstone: RedstoneConfig,
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl SourcesConfig {
    /// Parses a [`SourcesConfig`] from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a [`SourcesConfig`] from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(target: "price_source", path = %path.display(), "Loaded price source config");
        Ok(config)
    }

    /// The per-request timeout.
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the Chainlink source.
    pub fn chainlink_source(&self) -> FallbackSource<ChainlinkFeed> {
        let mut feed =
            ChainlinkFeed::new_http(self.chainlink.rpc_url.clone(), self.chainlink.feed_address);
        if let Some(decimals) = self.chainlink.decimals {
            feed = feed.with_decimals(decimals);
        }
        FallbackSource::new(feed, self.timeout())
    }

    /// Builds the Coingecko source.
    pub fn coingecko_source(&self) -> Result<FallbackSource<CoingeckoFeed>, ConfigError> {
        let feed = CoingeckoFeed::coingecko(self.coingecko.endpoint()?, self.timeout());
        Ok(FallbackSource::new(feed, self.timeout()))
    }

    /// Builds the Redstone source.
    pub fn redstone_source(&self) -> Result<FallbackSource<RedstoneFeed>, ConfigError> {
        let feed = RedstoneFeed::redstone(self.redstone.endpoint()?, self.timeout());
        Ok(FallbackSource::new(feed, self.timeout()))
    }
}
