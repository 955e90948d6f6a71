//! Tool registration contract for agent platforms
//!
//! An orchestrating agent registers the lookup as a tool: it needs a
//! description, a description of the output, and a callable taking the OEM
//! code as its single string argument.

use serde::{Deserialize, Serialize};

use crate::services::PriceLookupService;
use crate::types::{PartPriceError, PriceReport, Result};

pub const TOOL_NAME: &str = "vw_part_price";
pub const TOOL_DESCRIPTION: &str =
    "takes OEM part as input and returns the price of part if found";
pub const OUTPUT_DESCRIPTION: &str = "price of a Volkswagen OEM part";

/// Descriptor handed to the agent platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub tool_description: String,
    pub output_description: String,
}

/// Part price lookup exposed as an agent tool
pub struct PriceLookupTool {
    service: PriceLookupService,
}

impl PriceLookupTool {
    pub fn new(service: PriceLookupService) -> Self {
        Self { service }
    }

    pub fn spec() -> ToolSpec {
        ToolSpec {
            name: TOOL_NAME.to_string(),
            tool_description: TOOL_DESCRIPTION.to_string(),
            output_description: OUTPUT_DESCRIPTION.to_string(),
        }
    }

    /// Structured report for `input`
    pub fn call(&self, input: &str) -> Result<PriceReport> {
        self.service.lookup(input)
    }

    /// Report for `input` as a JSON string
    pub fn invoke(&self, input: &str) -> Result<String> {
        let report = self.call(input)?;
        serde_json::to_string(&report).map_err(|e| PartPriceError::Serialize(e.to_string()))
    }
}
