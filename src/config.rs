//! Runtime configuration
//!
//! Resolved once at startup (defaults, then TOML file, then `PARTPRICE_*`
//! environment overrides) and passed explicitly to `PriceLookupService`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::services::{FetchMode, DEFAULT_GBP_TO_EUR};
use crate::types::{PartPriceError, Result, Vendor};
use crate::vendors;

/// Browser-like user agent sent with every vendor request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

const ENV_PREFIX: &str = "PARTPRICE_";

/// Base URLs (scheme + host) of each vendor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorEndpoints {
    pub ebay: String,
    pub autoteile: String,
    pub paruzzi: String,
    pub autodoc: String,
}

impl VendorEndpoints {
    pub fn base_url(&self, vendor: Vendor) -> &str {
        match vendor {
            Vendor::Ebay => &self.ebay,
            Vendor::Autoteile => &self.autoteile,
            Vendor::Paruzzi => &self.paruzzi,
            Vendor::Autodoc => &self.autodoc,
        }
    }

    fn base_url_mut(&mut self, vendor: Vendor) -> &mut String {
        match vendor {
            Vendor::Ebay => &mut self.ebay,
            Vendor::Autoteile => &mut self.autoteile,
            Vendor::Paruzzi => &mut self.paruzzi,
            Vendor::Autodoc => &mut self.autodoc,
        }
    }
}

impl Default for VendorEndpoints {
    fn default() -> Self {
        Self {
            ebay: vendors::ebay::DEFAULT_BASE_URL.to_string(),
            autoteile: vendors::autoteile::DEFAULT_BASE_URL.to_string(),
            paruzzi: vendors::paruzzi::DEFAULT_BASE_URL.to_string(),
            autodoc: vendors::autodoc::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// partprice configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    /// Flat rate applied to eBay (GBP) prices
    pub gbp_to_eur: f64,
    /// Per-request timeout; unset means wait indefinitely
    pub timeout_secs: Option<u64>,
    pub fetch_mode: FetchMode,
    pub endpoints: VendorEndpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            gbp_to_eur: DEFAULT_GBP_TO_EUR,
            timeout_secs: None,
            fetch_mode: FetchMode::default(),
            endpoints: VendorEndpoints::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path` (or the default location when it
    /// exists) and apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(p) => Self::from_file(&p)?,
                None => Self::default(),
            },
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config path (~/.partprice/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        directories::UserDirs::new()
            .map(|d| d.home_dir().join(".partprice").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| PartPriceError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PartPriceError::Config(e.to_string()))
    }

    /// Apply `PARTPRICE_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(ua) = var("USER_AGENT") {
            self.user_agent = ua;
        }
        if let Some(rate) = var("GBP_TO_EUR") {
            self.gbp_to_eur = rate.trim().parse().map_err(|_| {
                PartPriceError::Config(format!("{}GBP_TO_EUR: invalid rate '{}'", ENV_PREFIX, rate))
            })?;
        }
        if let Some(secs) = var("TIMEOUT_SECS") {
            self.timeout_secs = Some(secs.trim().parse().map_err(|_| {
                PartPriceError::Config(format!(
                    "{}TIMEOUT_SECS: invalid seconds '{}'",
                    ENV_PREFIX, secs
                ))
            })?);
        }
        if let Some(mode) = var("FETCH_MODE") {
            self.fetch_mode = mode
                .parse()
                .map_err(|e| PartPriceError::Config(format!("{}FETCH_MODE: {}", ENV_PREFIX, e)))?;
        }
        for vendor in Vendor::ALL {
            let name = format!("{}_URL", vendor.as_str().to_uppercase());
            if let Some(url) = var(&name) {
                *self.endpoints.base_url_mut(vendor) = url;
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gbp_to_eur.is_finite() || self.gbp_to_eur <= 0.0 {
            return Err(PartPriceError::Config(format!(
                "gbp_to_eur must be a positive number, got {}",
                self.gbp_to_eur
            )));
        }
        for vendor in Vendor::ALL {
            let url = self.endpoints.base_url(vendor);
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(PartPriceError::Config(format!(
                    "endpoint for {} must be an http(s) URL, got '{}'",
                    vendor, url
                )));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
