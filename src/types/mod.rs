//! Type definitions for partprice

mod error;
mod quote;

pub use error::*;
pub use quote::*;
