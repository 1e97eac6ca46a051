use clap::{ArgAction, Parser};
use std::path::PathBuf;
use vendor_risk::application::dto::{FilterCriteria, OutputFormat};
use vendor_risk::risk_assessment::domain::{RiskLevel, ServiceType};

/// Score third-party vendors and build filtered risk reports
#[derive(Parser, Debug)]
#[command(name = "vendor-risk")]
#[command(version)]
#[command(about = "Score third-party vendors and build filtered risk reports", long_about = None)]
pub struct Args {
    /// Vendor roster CSV (raw columns or a previous CSV export)
    #[arg(
        short,
        long,
        value_name = "ROSTER",
        conflicts_with = "synthetic",
        required_unless_present = "synthetic"
    )]
    pub input: Option<PathBuf>,

    /// Generate a synthetic roster of N vendors instead of reading one
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=100_000))]
    pub synthetic: Option<u32>,

    /// Seed for the synthetic roster and OWASP LLM check draws
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format: json, markdown or csv [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep only vendors in this risk level (Low, Medium, High).
    /// Can be specified multiple times
    #[arg(long = "risk-level", value_name = "LEVEL")]
    pub risk_levels: Vec<RiskLevel>,

    /// Keep only vendors of this service type, e.g. "AI Model Provider".
    /// Can be specified multiple times
    #[arg(long = "service-type", value_name = "TYPE")]
    pub service_types: Vec<ServiceType>,

    /// Keep only vendors from this country. Can be specified multiple times
    #[arg(long = "country", value_name = "COUNTRY")]
    pub countries: Vec<String>,

    /// Vendors scoring above this count as high risk [default: 15]
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=25))]
    pub high_risk_threshold: Option<u8>,

    /// Exit with code 1 when the selection contains high-risk vendors
    #[arg(long)]
    pub fail_on_high_risk: bool,

    /// Config file (defaults to ./vendor-risk.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Filter flags given on the command line; an axis without flags is unspecified
    pub fn filter_criteria(&self) -> FilterCriteria {
        fn specified<T: Clone>(values: &[T]) -> Option<Vec<T>> {
            (!values.is_empty()).then(|| values.to_vec())
        }

        FilterCriteria {
            risk_levels: specified(&self.risk_levels),
            service_types: specified(&self.service_types),
            countries: specified(&self.countries),
        }
    }
}
