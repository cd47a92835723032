//! Macros for recording metrics.

/// Sets a gauge or counter to an absolute value, optionally with a label.
///
/// ```ignore
/// sysdep_macros::set!(counter, Metrics::PRICE_FETCH, "oracle", "redstone", 0);
/// sysdep_macros::set!(gauge, Metrics::LAST_PRICE, 1.0);
/// ```
#[macro_export]
macro_rules! set {
    (counter, $metric:path, $key:expr, $value:expr, $amount:expr) => {
        #[cfg(feature = "metrics")]
        metrics::counter!($metric, $key => $value).absolute($amount);
    };
    ($instrument:ident, $metric:path, $key:expr, $value:expr, $amount:expr) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric, $key => $value).set($amount);
    };
    (counter, $metric:path, $amount:expr) => {
        #[cfg(feature = "metrics")]
        metrics::counter!($metric).absolute($amount);
    };
    ($instrument:ident, $metric:path, $amount:expr) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric).set($amount);
    };
}

/// Increments a counter by one, with any number of `key => value` labels.
#[macro_export]
macro_rules! inc {
    ($instrument:ident, $metric:path $(, $label_key:expr => $label_value:expr)* $(,)?) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric $(, $label_key => $label_value)*).increment(1);
    };
}

/// Records a histogram observation, optionally with a label.
#[macro_export]
macro_rules! record {
    ($instrument:ident, $metric:path, $key:expr, $value:expr, $amount:expr) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric, $key => $value).record($amount);
    };
    ($instrument:ident, $metric:path, $amount:expr) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric).record($amount);
    };
}
