//! autodoc.fi OEM page scraper
//!
//! Autodoc's OEM listing has no per-item title worth matching: the page is
//! already keyed by OEM number, so every price element on it is taken. Prices
//! are printed Finnish-style (`45,90 €`) and only that form is accepted.

use scraper::Html;

use super::{parse_selector, SelectorSet, VendorScraper};
use crate::services::extractor::extract_decimal_comma_price;
use crate::types::{Quote, Result, Vendor};

pub const DEFAULT_BASE_URL: &str = "https://www.autodoc.fi";

/// Scraper for autodoc.fi OEM number pages
pub struct AutodocScraper {
    base_url: String,
}

impl AutodocScraper {
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

impl Default for AutodocScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorScraper for AutodocScraper {
    fn vendor(&self) -> Vendor {
        Vendor::Autodoc
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query_template(&self) -> &str {
        "/autonosat/oem/{oem}"
    }

    fn selectors(&self) -> SelectorSet {
        SelectorSet {
            item: ".product-list-item__price .price",
            title: None,
            price: None,
        }
    }

    fn applies_title_filter(&self) -> bool {
        false
    }

    fn extract_price_text(&self, text: &str) -> Option<f64> {
        extract_decimal_comma_price(text)
    }

    /// Every price element yields a quote if it holds a `digits,dd` price;
    /// the rest are dropped here rather than passed on as empty quotes.
    fn scrape_html(&self, html: &str, _oem: &str) -> Result<Vec<Quote>> {
        let price_sel = parse_selector(self.selectors().item)?;
        let doc = Html::parse_document(html);

        let quotes = doc
            .select(&price_sel)
            .filter_map(|el| {
                let text: String = el.text().map(str::trim).collect();
                self.extract_price_text(&text)
            })
            .map(|price| Quote::new(Vendor::Autodoc, Some(price)))
            .collect();

        Ok(quotes)
    }
}
