//! Contains the [`ChainlinkFeed`], which reads a Chainlink aggregator over JSON-RPC.

use alloy_primitives::{Address, Bytes, U256, address};
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_types_eth::TransactionRequest;
use alloy_sol_types::SolCall;
use alloy_transport::{RpcError, TransportError, TransportErrorKind};
use async_trait::async_trait;
use sysdep_protocol::{FetchError, PriceOracle, scale_to_wad};
use tokio::sync::OnceCell;
use url::Url;

use crate::PriceFeed;

/// The Chainlink USDC / USD aggregator on Ethereum mainnet.
pub const CHAINLINK_USDC_USD_FEED: Address = address!("A2F78ab2355fe2f984D808B5CeE7FD0A93D5270E");

#[allow(missing_docs, unreachable_pub, unnameable_types)]
mod aggregator {
    alloy_sol_types::sol! {
        /// The read side of Chainlink's `AggregatorV3Interface`.
        interface IAggregatorV3 {
            function decimals() external view returns (uint8);
            function latestRoundData()
                external
                view
                returns (
                    uint80 roundId,
                    int256 answer,
                    uint256 startedAt,
                    uint256 updatedAt,
                    uint80 answeredInRound
                );
        }
    }
}
use aggregator::IAggregatorV3;

/// A [`PriceFeed`] backed by a Chainlink aggregator.
///
/// The aggregator's `decimals` is read once and memoized, unless it was configured up front.
#[derive(Debug)]
pub struct ChainlinkFeed<P = RootProvider> {
    provider: P,
    feed: Address,
    decimals: OnceCell<u8>,
}

impl ChainlinkFeed<RootProvider> {
    /// Creates a new [`ChainlinkFeed`] talking to the given HTTP RPC endpoint.
    pub fn new_http(rpc_url: Url, feed: Address) -> Self {
        Self::new(RootProvider::new_http(rpc_url), feed)
    }
}

impl<P: Provider> ChainlinkFeed<P> {
    /// Creates a new [`ChainlinkFeed`] from a provider.
    pub fn new(provider: P, feed: Address) -> Self {
        Self { provider, feed, decimals: OnceCell::new() }
    }

    /// Sets the aggregator's decimals, skipping the `decimals()` lookup.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = OnceCell::new_with(Some(decimals));
        self
    }

    /// Returns the aggregator address.
    pub const fn feed(&self) -> Address {
        self.feed
    }

    async fn call<C: SolCall>(&self, call: C) -> Result<C::Return, FetchError> {
        let tx = TransactionRequest::default().to(self.feed).input(Bytes::from(call.abi_encode()).into());
        let output = self.provider.call(tx).await.map_err(rpc_error)?;
        C::abi_decode_returns(&output).map_err(|e| FetchError::MalformedBody(e.to_string()))
    }

    async fn decimals(&self) -> Result<u8, FetchError> {
        self.decimals
            .get_or_try_init(|| async {
                let decimals = self.call(IAggregatorV3::decimalsCall {}).await?;
                debug!(
                    target: "price_source",
                    feed = %self.feed,
                    decimals,
                    "Read aggregator decimals"
                );
                Ok::<_, FetchError>(decimals)
            })
            .await
            .copied()
    }
}

#[async_trait]
impl<P: Provider> PriceFeed for ChainlinkFeed<P> {
    fn oracle(&self) -> PriceOracle {
        PriceOracle::Chainlink
    }

    async fn latest_price(&self) -> Result<U256, FetchError> {
        let decimals = self.decimals().await?;
        let round = self.call(IAggregatorV3::latestRoundDataCall {}).await?;

        debug!(
            target: "price_source",
            feed = %self.feed,
            round_id = %round.roundId,
            answer = %round.answer,
            updated_at = %round.updatedAt,
            "Read latest round"
        );

        if !round.answer.is_positive() {
            return Err(FetchError::EmptyReading);
        }
        Ok(scale_to_wad(round.answer.into_raw(), decimals)?)
    }
}

fn rpc_error(err: TransportError) -> FetchError {
    match err {
        RpcError::Transport(TransportErrorKind::HttpError(http)) => FetchError::Status(http.status),
        RpcError::DeserError { err, .. } => FetchError::MalformedBody(err.to_string()),
        err => FetchError::Transport(err.to_string()),
    }
}
