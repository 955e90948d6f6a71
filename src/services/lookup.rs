//! Part price lookup service
//!
//! Normalizes the OEM code, runs every vendor adapter and aggregates the
//! quotes into a `PriceReport`. A vendor that fails is recorded in the
//! report instead of aborting the lookup; only when every vendor fails is
//! the lookup itself an error.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{normalize_oem, Aggregator, CurrencyConverter, HtmlFetcher, HttpFetcher};
use crate::config::Config;
use crate::types::{PriceReport, Quote, Result, Vendor, VendorFailure};
use crate::vendors::{VendorRegistry, VendorScraper};

/// How vendor pages are fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// All vendors in parallel on the rayon pool
    #[default]
    Concurrent,
    /// One vendor after another
    Sequential,
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Concurrent => f.write_str("concurrent"),
            FetchMode::Sequential => f.write_str("sequential"),
        }
    }
}

impl FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(FetchMode::Concurrent),
            "sequential" => Ok(FetchMode::Sequential),
            other => Err(format!("unknown fetch mode '{}'", other)),
        }
    }
}

/// Looks up part prices across all registered vendors
pub struct PriceLookupService {
    registry: VendorRegistry,
    fetcher: Arc<dyn HtmlFetcher>,
    converter: CurrencyConverter,
    mode: FetchMode,
}

impl PriceLookupService {
    /// Create a service that fetches over HTTP
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config.user_agent, config.timeout())?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Create a service with a custom page source
    pub fn with_fetcher(config: &Config, fetcher: Arc<dyn HtmlFetcher>) -> Self {
        Self {
            registry: VendorRegistry::from_endpoints(&config.endpoints),
            fetcher,
            converter: CurrencyConverter::new(config.gbp_to_eur),
            mode: config.fetch_mode,
        }
    }

    pub fn with_mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    pub fn registry(&self) -> &VendorRegistry {
        &self.registry
    }

    /// Look up prices for a free-form OEM code
    pub fn lookup(&self, oem: &str) -> Result<PriceReport> {
        let normalized = normalize_oem(oem);
        debug!(oem, normalized = %normalized, mode = %self.mode, "starting lookup");

        let mut quotes: Vec<Quote> = Vec::new();
        let mut failures: Vec<VendorFailure> = Vec::new();
        let mut first_error = None;

        for (vendor, result) in self.fetch_all(&normalized) {
            match result {
                Ok(vendor_quotes) => quotes.extend(vendor_quotes),
                Err(e) => {
                    warn!(%vendor, error = %e, "vendor lookup failed");
                    failures.push(VendorFailure {
                        vendor,
                        error: e.to_string(),
                    });
                    first_error.get_or_insert(e);
                }
            }
        }

        if failures.len() == self.registry.scrapers().len() {
            if let Some(e) = first_error {
                return Err(e);
            }
        }

        let report = Aggregator::report(oem, &normalized, &quotes, failures, &self.converter);
        info!(
            oem,
            prices = report.price_count(),
            average = ?report.average_price,
            failed = report.failed_vendors.len(),
            "lookup finished"
        );
        Ok(report)
    }

    /// Run every adapter, returning results in vendor order
    fn fetch_all(&self, oem: &str) -> Vec<(Vendor, Result<Vec<Quote>>)> {
        let fetcher = self.fetcher.as_ref();
        let scrapers = self.registry.scrapers();

        match self.mode {
            FetchMode::Sequential => scrapers
                .iter()
                .map(|s| (s.vendor(), s.fetch_quotes(fetcher, oem)))
                .collect(),
            // Indexed collect keeps registry order
            FetchMode::Concurrent => scrapers
                .par_iter()
                .map(|s| (s.vendor(), s.fetch_quotes(fetcher, oem)))
                .collect(),
        }
    }
}
