use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::config::Config;
use crate::services::{FetchMode, PriceLookupService};
use crate::tool::PriceLookupTool;
use crate::types::PriceReport;
use crate::vendors::{VendorRegistry, VendorScraper};

/// Average VW OEM part prices across parts vendors
#[derive(Parser)]
#[command(name = "partprice")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.partprice/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up prices for an OEM part number
    Lookup {
        /// OEM part number; spaces and punctuation are ignored
        #[arg(required = true, num_args = 1..)]
        oem: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Fetch vendors one after another
        #[arg(long)]
        sequential: bool,
    },

    /// List vendor adapters
    Vendors,

    /// Print the agent tool descriptor as JSON
    ToolSpec,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
            Some(Commands::Lookup {
                oem,
                json,
                sequential,
            }) => {
                let config = Config::load(self.config.as_deref())?;
                let mut service = PriceLookupService::new(&config)?;
                if sequential {
                    service = service.with_mode(FetchMode::Sequential);
                }

                let report = service.lookup(&oem.join(" "))?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", render_report(&report));
                }
                Ok(())
            }
            Some(Commands::Vendors) => {
                let config = Config::load(self.config.as_deref())?;
                let registry = VendorRegistry::from_endpoints(&config.endpoints);
                for scraper in registry.scrapers() {
                    println!(
                        "{:<10} {:<4} title filter: {:<3} {}",
                        scraper.vendor().as_str(),
                        scraper.vendor().native_currency().code(),
                        if scraper.applies_title_filter() { "yes" } else { "no" },
                        scraper.query_url("{oem}")
                    );
                }
                Ok(())
            }
            Some(Commands::ToolSpec) => {
                println!("{}", serde_json::to_string_pretty(&PriceLookupTool::spec())?);
                Ok(())
            }
        }
    }
}

/// Human-readable report for terminal output
pub fn render_report(report: &PriceReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "OEM {} ({})", report.oem, report.normalized_oem);

    for (vendor, prices) in &report.prices_by_vendor {
        let list: Vec<String> = prices.iter().map(|p| format!("{:.2}", p)).collect();
        let _ = writeln!(out, "  {:<10} {}", vendor.as_str(), list.join(", "));
    }

    for failure in &report.failed_vendors {
        let _ = writeln!(out, "  {:<10} failed: {}", failure.vendor.as_str(), failure.error);
    }

    match report.average_price {
        Some(avg) => {
            let _ = writeln!(
                out,
                "Average: {:.2} {} ({} prices)",
                avg,
                report.currency,
                report.price_count()
            );
        }
        None => {
            let note = report.note.as_deref().unwrap_or("No valid prices found");
            let _ = writeln!(out, "{}", note);
        }
    }
    out
}
