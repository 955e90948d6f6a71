//! Aggregator service for turning vendor quotes into a price report

use chrono::Utc;
use std::collections::BTreeMap;

use super::currency::{round2, CurrencyConverter};
use crate::types::{
    PriceReport, Quote, Vendor, VendorFailure, NO_PRICES_NOTE, OUTPUT_CURRENCY,
};

/// Aggregator for computing per-vendor price lists and the overall mean
pub struct Aggregator;

impl Aggregator {
    /// Build a report from quotes in arrival order.
    ///
    /// Quotes without a price are dropped; the rest are converted to EUR and
    /// rounded before grouping and averaging.
    pub fn report(
        oem: &str,
        normalized_oem: &str,
        quotes: &[Quote],
        failures: Vec<VendorFailure>,
        converter: &CurrencyConverter,
    ) -> PriceReport {
        let mut prices_by_vendor: BTreeMap<Vendor, Vec<f64>> = BTreeMap::new();
        let mut all_prices: Vec<f64> = Vec::with_capacity(quotes.len());

        for quote in quotes {
            let Some(price) = quote.price else {
                continue;
            };
            let eur = converter.to_eur(price, quote.vendor.native_currency());
            prices_by_vendor.entry(quote.vendor).or_default().push(eur);
            all_prices.push(eur);
        }

        let average_price = Self::mean(&all_prices).map(round2);
        let note = if average_price.is_none() {
            Some(NO_PRICES_NOTE.to_string())
        } else {
            None
        };

        PriceReport {
            oem: oem.to_string(),
            normalized_oem: normalized_oem.to_string(),
            average_price,
            currency: OUTPUT_CURRENCY.to_string(),
            prices_by_vendor,
            note,
            failed_vendors: failures,
            generated_at: Utc::now(),
        }
    }

    /// Arithmetic mean, `None` for an empty slice
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
