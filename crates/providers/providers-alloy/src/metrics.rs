//! Metrics for the price sources.

use sysdep_protocol::{PriceOracle, PricePoint, PriceSourceError};

/// Container for metrics.
#[derive(Debug, Clone)]
pub struct Metrics;

impl Metrics {
    /// Identifier for the counter of price fetches, labeled by oracle and outcome.
    pub const PRICE_FETCH: &str = "sysdep_price_fetch";

    /// Identifier for the counter of failed fresh fetches, labeled by oracle and reason.
    pub const PRICE_FETCH_ERRORS: &str = "sysdep_price_fetch_errors";

    /// Identifier for the histogram of fetch durations, labeled by oracle.
    pub const PRICE_FETCH_DURATION: &str = "sysdep_price_fetch_duration";

    /// Outcome label for a fresh reading.
    pub const OUTCOME_FRESH: &str = "fresh";

    /// Outcome label for a fallback to the last known price.
    pub const OUTCOME_STALE: &str = "stale";

    /// Outcome label for a failed fetch with nothing to fall back to.
    pub const OUTCOME_UNAVAILABLE: &str = "unavailable";

    /// Initializes metrics for the price sources.
    ///
    /// This does two things:
    /// * Describes various metrics.
    /// * Initializes metrics to 0 so they can be queried immediately.
    #[cfg(feature = "metrics")]
    pub fn init() {
        Self::describe();
        Self::zero();
    }

    /// Describes metrics used in [`sysdep_providers_alloy`][crate].
    #[cfg(feature = "metrics")]
    pub fn describe() {
        metrics::describe_counter!(Self::PRICE_FETCH, "Number of price fetches by outcome");
        metrics::describe_counter!(
            Self::PRICE_FETCH_ERRORS,
            "Number of failed fresh price fetches by reason"
        );
        metrics::describe_histogram!(
            Self::PRICE_FETCH_DURATION,
            metrics::Unit::Seconds,
            "Duration of price fetches in seconds"
        );
    }

    /// Initializes metrics to `0` so they can be queried immediately by consumers of prometheus
    /// metrics.
    #[cfg(feature = "metrics")]
    pub fn zero() {
        for oracle in PriceOracle::ALL {
            for outcome in [Self::OUTCOME_FRESH, Self::OUTCOME_STALE, Self::OUTCOME_UNAVAILABLE] {
                metrics::counter!(
                    Self::PRICE_FETCH,
                    "oracle" => oracle.as_str(),
                    "outcome" => outcome
                )
                .absolute(0);
            }
        }
    }

    /// Records the outcome of one fetch through a fallback source.
    #[cfg_attr(not(feature = "metrics"), allow(unused_variables))]
    pub(crate) fn record_fetch(
        oracle: PriceOracle,
        result: &Result<PricePoint, PriceSourceError>,
        elapsed_secs: f64,
    ) {
        let (outcome, cause) = match result {
            Ok(PricePoint::Fresh(_)) => (Self::OUTCOME_FRESH, None),
            Ok(PricePoint::Stale { cause, .. }) => (Self::OUTCOME_STALE, Some(cause)),
            Err(PriceSourceError::NoFallbackAvailable { cause, .. }) => {
                (Self::OUTCOME_UNAVAILABLE, Some(cause))
            }
        };

        sysdep_macros::record!(
            histogram,
            Self::PRICE_FETCH_DURATION,
            "oracle",
            oracle.as_str(),
            elapsed_secs
        );
        sysdep_macros::inc!(
            counter,
            Self::PRICE_FETCH,
            "oracle" => oracle.as_str(),
            "outcome" => outcome
        );
        if let Some(cause) = cause {
            sysdep_macros::inc!(
                counter,
                Self::PRICE_FETCH_ERRORS,
                "oracle" => oracle.as_str(),
                "reason" => cause.reason()
            );
        }
    }
}
