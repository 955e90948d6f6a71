//! partprice: average OEM part prices across VW parts vendors
//!
//! ```no_run
//! use partprice::{Config, PriceLookupService};
//!
//! let service = PriceLookupService::new(&Config::default())?;
//! let report = service.lookup("1J0 601 025")?;
//! println!("{:?} {}", report.average_price, report.currency);
//! # Ok::<(), partprice::PartPriceError>(())
//! ```

pub mod cli;
pub mod config;
pub mod services;
pub mod tool;
pub mod types;
pub mod vendors;

pub use config::Config;
pub use services::{FetchMode, PriceLookupService};
pub use tool::PriceLookupTool;
pub use types::{PartPriceError, PriceReport, Result, Vendor};
