//! Vendor adapters: one scraper per parts shop

pub(crate) mod autodoc;
pub(crate) mod autoteile;
pub(crate) mod ebay;
pub(crate) mod paruzzi;

pub use autodoc::AutodocScraper;
pub use autoteile::AutoteileScraper;
pub use ebay::EbayScraper;
pub use paruzzi::ParuzziScraper;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::VendorEndpoints;
use crate::services::extractor::extract_price;
use crate::services::HtmlFetcher;
use crate::types::{PartPriceError, Quote, Result, Vendor};

/// CSS selectors describing a vendor's result list.
///
/// `title` and `price` are relative to each `item`. A `None` price selector
/// reads the price from the item element itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorSet {
    pub item: &'static str,
    pub title: Option<&'static str>,
    pub price: Option<&'static str>,
}

/// Trait for scraping part prices from a vendor's search page
pub trait VendorScraper: Send + Sync {
    fn vendor(&self) -> Vendor;

    /// Base URL (scheme + host) requests are sent to
    fn base_url(&self) -> &str;

    /// Path and query with `{oem}` as placeholder
    fn query_template(&self) -> &str;

    fn selectors(&self) -> SelectorSet;

    /// Whether listings must mention the OEM code in their title
    fn applies_title_filter(&self) -> bool {
        true
    }

    /// Parse a number from a listing's price text
    fn extract_price_text(&self, text: &str) -> Option<f64> {
        extract_price(text)
    }

    /// Build the search URL for a normalized OEM code
    fn query_url(&self, oem: &str) -> String {
        format!(
            "{}{}",
            self.base_url().trim_end_matches('/'),
            self.query_template().replace("{oem}", oem)
        )
    }

    /// Extract quotes from a result page.
    ///
    /// Items missing a title or price element are skipped, as are items
    /// whose title does not contain `oem` when the title filter applies.
    fn scrape_html(&self, html: &str, oem: &str) -> Result<Vec<Quote>> {
        let selectors = self.selectors();
        let item_sel = parse_selector(selectors.item)?;
        let title_sel = selectors.title.map(parse_selector).transpose()?;
        let price_sel = selectors.price.map(parse_selector).transpose()?;

        let doc = Html::parse_document(html);
        let needle = oem.to_lowercase();
        let mut quotes = Vec::new();

        for item in doc.select(&item_sel) {
            let title = match &title_sel {
                Some(sel) => match item.select(sel).next() {
                    Some(el) => Some(element_text(el)),
                    None => continue,
                },
                None => None,
            };

            let price_text = match &price_sel {
                Some(sel) => match item.select(sel).next() {
                    Some(el) => element_text(el),
                    None => continue,
                },
                None => element_text(item),
            };

            if self.applies_title_filter() {
                let matches = title
                    .as_deref()
                    .is_some_and(|t| t.to_lowercase().contains(&needle));
                if !matches {
                    continue;
                }
            }

            quotes.push(Quote::new(self.vendor(), self.extract_price_text(&price_text)));
        }

        Ok(quotes)
    }

    /// Fetch the vendor's result page for `oem` and scrape it
    fn fetch_quotes(&self, fetcher: &dyn HtmlFetcher, oem: &str) -> Result<Vec<Quote>> {
        let url = self.query_url(oem);
        let html = fetcher.fetch(self.vendor(), &url)?;
        let quotes = self.scrape_html(&html, oem)?;
        debug!(vendor = %self.vendor(), count = quotes.len(), "scraped quotes");
        Ok(quotes)
    }
}

pub(crate) fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| PartPriceError::Selector(format!("'{}': {}", css, e)))
}

/// Concatenated text of an element and its descendants
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Registry of vendor adapters in fetch order
pub struct VendorRegistry {
    scrapers: Vec<Box<dyn VendorScraper>>,
}

impl VendorRegistry {
    /// Create a registry pointed at the production vendor hosts
    pub fn new() -> Self {
        Self::from_endpoints(&VendorEndpoints::default())
    }

    /// Create a registry with configured base URLs
    pub fn from_endpoints(endpoints: &VendorEndpoints) -> Self {
        Self {
            scrapers: vec![
                Box::new(EbayScraper::with_base_url(&endpoints.ebay)),
                Box::new(AutoteileScraper::with_base_url(&endpoints.autoteile)),
                Box::new(ParuzziScraper::with_base_url(&endpoints.paruzzi)),
                Box::new(AutodocScraper::with_base_url(&endpoints.autodoc)),
            ],
        }
    }

    /// Get all registered scrapers
    pub fn scrapers(&self) -> &[Box<dyn VendorScraper>] {
        &self.scrapers
    }

    /// Find a scraper by vendor
    pub fn get(&self, vendor: Vendor) -> Option<&dyn VendorScraper> {
        self.scrapers
            .iter()
            .find(|s| s.vendor() == vendor)
            .map(|s| s.as_ref())
    }
}

impl Default for VendorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_in_vendor_order() {
        let registry = VendorRegistry::new();
        let vendors: Vec<Vendor> = registry.scrapers().iter().map(|s| s.vendor()).collect();
        assert_eq!(vendors, Vendor::ALL.to_vec());
    }

    #[test]
    fn test_registry_get() {
        let registry = VendorRegistry::new();
        for vendor in Vendor::ALL {
            assert_eq!(registry.get(vendor).unwrap().vendor(), vendor);
        }
    }

    #[test]
    fn test_only_autodoc_skips_title_filter() {
        let registry = VendorRegistry::new();
        for scraper in registry.scrapers() {
            assert_eq!(
                scraper.applies_title_filter(),
                scraper.vendor() != Vendor::Autodoc,
                "{}",
                scraper.vendor()
            );
        }
    }

    #[test]
    fn test_all_selectors_parse() {
        let registry = VendorRegistry::new();
        for scraper in registry.scrapers() {
            let s = scraper.selectors();
            assert!(parse_selector(s.item).is_ok());
            if let Some(title) = s.title {
                assert!(parse_selector(title).is_ok());
            }
            if let Some(price) = s.price {
                assert!(parse_selector(price).is_ok());
            }
        }
    }

    #[test]
    fn test_invalid_selector_is_error() {
        let err = parse_selector(".s-item[").unwrap_err();
        assert!(matches!(err, PartPriceError::Selector(_)));
    }

    #[test]
    fn test_custom_endpoints_used_in_urls() {
        let endpoints = VendorEndpoints {
            ebay: "http://127.0.0.1:9000/".into(),
            autoteile: "http://127.0.0.1:9001".into(),
            paruzzi: "http://127.0.0.1:9002".into(),
            autodoc: "http://127.0.0.1:9003".into(),
        };
        let registry = VendorRegistry::from_endpoints(&endpoints);

        let ebay = registry.get(Vendor::Ebay).unwrap();
        assert_eq!(
            ebay.query_url("1j0601025"),
            "http://127.0.0.1:9000/sch/i.html?_nkw=1j0601025+vw&_sacat=60200"
        );
        let autodoc = registry.get(Vendor::Autodoc).unwrap();
        assert_eq!(
            autodoc.query_url("1j0601025"),
            "http://127.0.0.1:9003/autonosat/oem/1j0601025"
        );
    }
}
