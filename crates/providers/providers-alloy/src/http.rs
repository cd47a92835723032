//! HTTP price feeds for the Coingecko and Redstone public APIs.

use std::{marker::PhantomData, time::Duration};

use alloy_primitives::U256;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use sysdep_protocol::{FetchError, PriceOracle, f64_to_wad};
use url::Url;

use crate::PriceFeed;

/// The response body of a price API.
pub trait PriceSchema: DeserializeOwned + Send + 'static {
    /// Extracts the decimal USD price, or [`None`] if the body carries no reading.
    fn price(&self) -> Option<f64>;
}

/// The `simple/price` response of the Coingecko API.
///
/// ```json
/// { "usd-coin": { "usd": 0.9998 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoingeckoPrice {
    /// The USDC quote, if present.
    #[serde(rename = "usd-coin", default)]
    pub usd_coin: Option<CoingeckoQuote>,
}

/// A single Coingecko quote.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoingeckoQuote {
    /// The USD price, if present.
    #[serde(default)]
    pub usd: Option<f64>,
}

impl PriceSchema for CoingeckoPrice {
    fn price(&self) -> Option<f64> {
        self.usd_coin.as_ref().and_then(|q| q.usd)
    }
}

/// One entry of the Redstone `prices` response.
///
/// ```json
/// [{ "symbol": "USDC", "value": 1.0001 }]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RedstonePrice {
    /// The asset symbol.
    #[serde(default)]
    pub symbol: String,
    /// The USD price.
    pub value: f64,
}

impl PriceSchema for Vec<RedstonePrice> {
    fn price(&self) -> Option<f64> {
        self.first().map(|p| p.value)
    }
}

/// A [`PriceFeed`] that GETs a JSON price from an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpPriceFeed<S> {
    oracle: PriceOracle,
    url: Url,
    timeout: Duration,
    inner: Client,
    _schema: PhantomData<fn() -> S>,
}

/// The Coingecko USDC price feed.
pub type CoingeckoFeed = HttpPriceFeed<CoingeckoPrice>;

/// The Redstone USDC price feed.
pub type RedstoneFeed = HttpPriceFeed<Vec<RedstonePrice>>;

impl<S: PriceSchema> HttpPriceFeed<S> {
    /// Creates a new [`HttpPriceFeed`] for the given endpoint.
    pub fn new(oracle: PriceOracle, url: Url, timeout: Duration) -> Self {
        Self { oracle, url, timeout, inner: Client::new(), _schema: PhantomData }
    }

    /// Returns the endpoint URL.
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl CoingeckoFeed {
    /// The Coingecko USDC / USD endpoint.
    pub const DEFAULT_URL: &str =
        "https://api.coingecko.com/api/v3/simple/price?ids=usd-coin&vs_currencies=usd";

    /// Creates a Coingecko feed for the given endpoint.
    pub fn coingecko(url: Url, timeout: Duration) -> Self {
        Self::new(PriceOracle::Coingecko, url, timeout)
    }
}

impl RedstoneFeed {
    /// The Redstone USDC endpoint.
    pub const DEFAULT_URL: &str =
        "https://api.redstone.finance/prices/?symbol=USDC&provider=redstone&limit=1";

    /// Creates a Redstone feed for the given endpoint.
    pub fn redstone(url: Url, timeout: Duration) -> Self {
        Self::new(PriceOracle::Redstone, url, timeout)
    }
}

#[async_trait]
impl<S: PriceSchema> PriceFeed for HttpPriceFeed<S> {
    fn oracle(&self) -> PriceOracle {
        self.oracle
    }

    async fn latest_price(&self) -> Result<U256, FetchError> {
        let res = self.inner.get(self.url.clone()).timeout(self.timeout).send().await.map_err(
            |err| {
                if err.is_timeout() {
                    FetchError::Timeout(self.timeout)
                } else {
                    FetchError::Transport(err.to_string())
                }
            },
        )?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: S = res.json().await.map_err(|err| FetchError::MalformedBody(err.to_string()))?;
        let value = body.price().ok_or(FetchError::EmptyReading)?;
        trace!(target: "price_source", oracle = %self.oracle, value, "Read price");

        Ok(f64_to_wad(value)?)
    }
}
