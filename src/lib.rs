pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::ebird::EbirdClient;
pub use core::engine::{HotspotRanker, RunOutcome, RunParams};
pub use domain::model::{
    FetchParams, FrequencyBasis, Hotspot, RankedHotspot, RunSummary, Target, TargetList,
};
pub use utils::error::{HotspotError, Result};
