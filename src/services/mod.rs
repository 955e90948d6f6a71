//! Services for price extraction, aggregation and lookup

pub mod aggregator;
pub mod currency;
pub mod extractor;
pub mod fetcher;
pub mod lookup;
pub mod normalizer;

pub use aggregator::Aggregator;
pub use currency::{round2, CurrencyConverter, DEFAULT_GBP_TO_EUR};
pub use extractor::{extract_decimal_comma_price, extract_price};
pub use fetcher::{HtmlFetcher, HttpFetcher};
pub use lookup::{FetchMode, PriceLookupService};
pub use normalizer::normalize_oem;
