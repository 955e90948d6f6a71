//! Currency normalization for vendor prices

use crate::types::Currency;

/// Default GBP → EUR rate applied to eBay listings
pub const DEFAULT_GBP_TO_EUR: f64 = 1.17;

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts native vendor prices to EUR using a fixed rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyConverter {
    gbp_to_eur: f64,
}

impl CurrencyConverter {
    pub fn new(gbp_to_eur: f64) -> Self {
        Self { gbp_to_eur }
    }

    pub fn gbp_to_eur(&self) -> f64 {
        self.gbp_to_eur
    }

    /// Convert a price to EUR, rounded to 2 decimals
    pub fn to_eur(&self, price: f64, currency: Currency) -> f64 {
        match currency {
            Currency::Eur => round2(price),
            Currency::Gbp => round2(price * self.gbp_to_eur),
        }
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new(DEFAULT_GBP_TO_EUR)
    }
}
