//! Price readings, their fallback cache, and the [`PriceSource`] capability.

mod errors;
pub use errors::{FetchError, PriceSourceError};

mod cache;
pub use cache::PriceCache;

mod source;
pub use source::{PricePoint, PriceSource};
