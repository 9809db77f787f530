pub mod aggregate;
pub mod ebird;
pub mod engine;
pub mod rank;
pub mod report;

pub use crate::domain::model::{
    FetchParams, FrequencyBasis, Hotspot, RankedHotspot, RunSummary, Target, TargetList,
};
pub use crate::domain::ports::{HotspotSource, TargetSource};
pub use crate::utils::error::Result;
