#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod metrics;
pub use metrics::Metrics;

mod feed;
pub use feed::PriceFeed;

mod fallback;
pub use fallback::FallbackSource;

mod chainlink;
pub use chainlink::{CHAINLINK_USDC_USD_FEED, ChainlinkFeed};

mod http;
pub use http::{
    CoingeckoFeed, CoingeckoPrice, CoingeckoQuote, HttpPriceFeed, PriceSchema, RedstoneFeed,
    RedstonePrice,
};

mod config;
pub use config::{
    ChainlinkConfig, CoingeckoConfig, ConfigError, DEFAULT_TIMEOUT_SECS, RedstoneConfig,
    SourcesConfig,
};

#[cfg(test)]
pub(crate) mod test_utils;
