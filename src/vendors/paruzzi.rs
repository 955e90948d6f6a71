//! paruzzi.com search results scraper

use super::{SelectorSet, VendorScraper};
use crate::types::Vendor;

pub const DEFAULT_BASE_URL: &str = "https://www.paruzzi.com";

/// Scraper for paruzzi.com's Volkswagen catalogue (UK storefront, EUR prices)
pub struct ParuzziScraper {
    base_url: String,
}

impl ParuzziScraper {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a scraper against a custom host (for testing)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl Default for ParuzziScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorScraper for ParuzziScraper {
    fn vendor(&self) -> Vendor {
        Vendor::Paruzzi
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query_template(&self) -> &str {
        "/uk/volkswagen/?zoektrefwoord={oem}"
    }

    fn selectors(&self) -> SelectorSet {
        SelectorSet {
            item: ".product",
            title: Some(".product-title"),
            price: Some(".product-price"),
        }
    }
}
