use crate::core::engine::RunParams;
use crate::domain::model::{FetchParams, FrequencyBasis};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TARGETS_API_URL: &str =
    "https://faas-nyc1-2ef2e6cc.doserverless.co/api/v1/web/fn-6c6abe6c-b02b-4b79-a86e-f7633e99a025/targets/get";

const API_KEY_ENV: &str = "EBIRD_API_KEY";
const API_KEY_PLACEHOLDER: &str = "YOUR_EBIRD_API_KEY";

#[derive(Debug, Clone, Parser)]
#[command(name = "hotspot-targets")]
#[command(about = "Rank eBird hotspots by target-species frequency")]
pub struct CliConfig {
    /// eBird region code, e.g. US-CA-037 for Los Angeles County
    #[arg(long)]
    pub region: String,

    /// Target species code, e.g. grhowl
    #[arg(long)]
    pub species: String,

    #[arg(long, default_value_t = 1)]
    pub start_month: u8,

    #[arg(long, default_value_t = 12)]
    pub end_month: u8,

    /// Rank on the date-window frequency instead of year-round
    #[arg(long)]
    pub use_window: bool,

    /// Minimum frequency percent for a hotspot to appear in the report
    #[arg(long, default_value_t = 3.0)]
    pub rank_cutoff: f64,

    /// Cutoff forwarded to the frequency provider
    #[arg(long, default_value_t = 5)]
    pub provider_cutoff: u32,

    /// Seconds to wait between frequency requests
    #[arg(long, default_value_t = 0.3)]
    pub delay: f64,

    /// Only fetch the top N hotspots by lifetime species count
    #[arg(long)]
    pub max_hotspots: Option<usize>,

    /// Output CSV path; derived from the species name when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory-provider API key; falls back to $EBIRD_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = "https://api.ebird.org/v2")]
    pub hotspot_api_base: String,

    #[arg(long, default_value = DEFAULT_TARGETS_API_URL)]
    pub targets_api_url: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Flag value, then the environment, then the documented placeholder.
    pub fn api_key(&self) -> String {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .unwrap_or_else(|| API_KEY_PLACEHOLDER.to_string())
    }

    pub fn basis(&self) -> FrequencyBasis {
        if self.use_window {
            FrequencyBasis::DateWindow
        } else {
            FrequencyBasis::YearRound
        }
    }

    pub fn run_params(&self) -> RunParams {
        RunParams {
            region: self.region.clone(),
            species_code: self.species.clone(),
            fetch: FetchParams {
                start_month: self.start_month,
                end_month: self.end_month,
                cutoff: self.provider_cutoff,
            },
            basis: self.basis(),
            rank_cutoff: self.rank_cutoff,
            delay: Duration::from_secs_f64(self.delay),
            max_hotspots: self.max_hotspots,
            output: self.output.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("region", &self.region)?;
        validate_non_empty_string("species", &self.species)?;
        // Months must be valid individually; a start after the end is a
        // window wrapping the year boundary and is left to the provider.
        validate_range("start_month", self.start_month, 1, 12)?;
        validate_range("end_month", self.end_month, 1, 12)?;
        validate_range("rank_cutoff", self.rank_cutoff, 0.0, 100.0)?;
        validate_non_negative("delay", self.delay)?;
        validate_url("hotspot_api_base", &self.hotspot_api_base)?;
        validate_url("targets_api_url", &self.targets_api_url)?;
        Ok(())
    }
}
