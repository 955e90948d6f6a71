//! eBay search results scraper

use super::{SelectorSet, VendorScraper};
use crate::types::Vendor;

pub const DEFAULT_BASE_URL: &str = "https://www.ebay.com";

/// Scraper for eBay's car-parts category search
pub struct EbayScraper {
    base_url: String,
}

impl EbayScraper {
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

impl Default for EbayScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorScraper for EbayScraper {
    fn vendor(&self) -> Vendor {
        Vendor::Ebay
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query_template(&self) -> &str {
        // 60200 = "Car Parts & Accessories"
        "/sch/i.html?_nkw={oem}+vw&_sacat=60200"
    }

    fn selectors(&self) -> SelectorSet {
        SelectorSet {
            item: ".s-item",
            title: Some(".s-item__title"),
            price: Some(".s-item__price"),
        }
    }
}
