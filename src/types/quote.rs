//! Quote and report types for part price lookups

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Currency every report is expressed in
pub const OUTPUT_CURRENCY: &str = "EUR";

/// Note attached to a report when no vendor produced a usable price
pub const NO_PRICES_NOTE: &str = "No valid prices found";

/// Vendors with a scraping adapter.
///
/// Declaration order is the fetch order and the order of
/// `PriceReport::prices_by_vendor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Ebay,
    Autoteile,
    Paruzzi,
    Autodoc,
}

impl Vendor {
    pub const ALL: [Vendor; 4] = [
        Vendor::Ebay,
        Vendor::Autoteile,
        Vendor::Paruzzi,
        Vendor::Autodoc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Ebay => "ebay",
            Vendor::Autoteile => "autoteile",
            Vendor::Paruzzi => "paruzzi",
            Vendor::Autodoc => "autodoc",
        }
    }

    /// Currency the vendor lists prices in
    pub fn native_currency(&self) -> Currency {
        match self {
            // Searched listings are mostly UK sellers
            Vendor::Ebay => Currency::Gbp,
            Vendor::Autoteile | Vendor::Paruzzi | Vendor::Autodoc => Currency::Eur,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Vendor::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown vendor '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

/// A single price observation before aggregation.
///
/// `price` is in the vendor's native currency; `None` means the listing's
/// price text held no number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub vendor: Vendor,
    pub price: Option<f64>,
}

impl Quote {
    pub fn new(vendor: Vendor, price: Option<f64>) -> Self {
        Self { vendor, price }
    }
}

/// A vendor whose fetch failed during a lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorFailure {
    pub vendor: Vendor,
    pub error: String,
}

/// Aggregated result of a part price lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReport {
    /// OEM code exactly as the caller passed it
    pub oem: String,
    pub normalized_oem: String,
    pub average_price: Option<f64>,
    pub currency: String,
    /// Converted prices per vendor, in arrival order
    pub prices_by_vendor: BTreeMap<Vendor, Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_vendors: Vec<VendorFailure>,
    pub generated_at: DateTime<Utc>,
}

impl PriceReport {
    /// Total number of prices across all vendors
    pub fn price_count(&self) -> usize {
        self.prices_by_vendor.values().map(Vec::len).sum()
    }

    pub fn has_prices(&self) -> bool {
        self.average_price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_order_matches_fetch_order() {
        let mut shuffled = vec![Vendor::Autodoc, Vendor::Ebay, Vendor::Paruzzi, Vendor::Autoteile];
        shuffled.sort();
        assert_eq!(shuffled, Vendor::ALL.to_vec());
    }

    #[test]
    fn test_vendor_from_str_case_insensitive() {
        assert_eq!("EBAY".parse::<Vendor>().unwrap(), Vendor::Ebay);
        assert_eq!(" autodoc ".parse::<Vendor>().unwrap(), Vendor::Autodoc);
        assert!("amazon".parse::<Vendor>().is_err());
    }

    #[test]
    fn test_only_ebay_is_gbp() {
        for vendor in Vendor::ALL {
            let expected = if vendor == Vendor::Ebay {
                Currency::Gbp
            } else {
                Currency::Eur
            };
            assert_eq!(vendor.native_currency(), expected);
        }
    }

    #[test]
    fn test_report_json_keys() {
        let mut prices = BTreeMap::new();
        prices.insert(Vendor::Autodoc, vec![20.0]);
        prices.insert(Vendor::Ebay, vec![11.7]);
        let report = PriceReport {
            oem: "1J0 601 025".into(),
            normalized_oem: "1j0601025".into(),
            average_price: Some(15.85),
            currency: OUTPUT_CURRENCY.into(),
            prices_by_vendor: prices,
            note: None,
            failed_vendors: Vec::new(),
            generated_at: Utc::now(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["oem"], "1J0 601 025");
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["prices_by_vendor"]["ebay"][0], 11.7);
        assert!(json.get("note").is_none());
        assert!(json.get("failed_vendors").is_none());

        // BTreeMap keeps vendor order: ebay before autodoc
        let text = serde_json::to_string(&report).unwrap();
        assert!(text.find("\"ebay\"").unwrap() < text.find("\"autodoc\"").unwrap());
        assert_eq!(report.price_count(), 2);
    }
}
