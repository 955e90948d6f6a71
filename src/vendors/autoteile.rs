//! autoteile-markt.de search results scraper

use super::{SelectorSet, VendorScraper};
use crate::types::Vendor;

pub const DEFAULT_BASE_URL: &str = "https://www.autoteile-markt.de";

/// Scraper for autoteile-markt.de article search
pub struct AutoteileScraper {
    base_url: String,
}

impl AutoteileScraper {
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

impl Default for AutoteileScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorScraper for AutoteileScraper {
    fn vendor(&self) -> Vendor {
        Vendor::Autoteile
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query_template(&self) -> &str {
        "/ersatzteile-suche?search_term={oem}"
    }

    fn selectors(&self) -> SelectorSet {
        SelectorSet {
            item: ".article-list__item",
            title: Some(".article-list__name"),
            price: Some(".article-list__price"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div class="article-list">
          <div class="article-list__item">
            <a class="article-list__name">Wasserpumpe VW 1J0601025 Original</a>
            <div class="article-list__price">45,90 €</div>
          </div>
          <div class="article-list__item">
            <a class="article-list__name">WASSERPUMPE 1J0601025B</a>
            <div class="article-list__price">ab 39,00 € inkl. MwSt.</div>
          </div>
          <div class="article-list__item">
            <a class="article-list__name">Thermostat 050121113C</a>
            <div class="article-list__price">12,00 €</div>
          </div>
        </div>
    "#;

    #[test]
    fn test_query_url() {
        assert_eq!(
            AutoteileScraper::new().query_url("1j0601025"),
            "https://www.autoteile-markt.de/ersatzteile-suche?search_term=1j0601025"
        );
    }

    #[test]
    fn test_scrape_case_insensitive_title_match() {
        let quotes = AutoteileScraper::new().scrape_html(PAGE, "1j0601025").unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].price, Some(45.9));
        assert_eq!(quotes[1].price, Some(39.0));
        assert!(quotes.iter().all(|q| q.vendor == Vendor::Autoteile));
    }
}
