use crate::domain::model::{FetchParams, Hotspot, TargetList};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves a region code into the hotspots it contains. A provider failure
/// here is fatal to the run.
#[async_trait]
pub trait HotspotSource: Send + Sync {
    async fn hotspots(&self, region: &str) -> Result<Vec<Hotspot>>;
}

/// Resolves one hotspot's target-species frequencies.
///
/// Returns `None` both for "provider has no data" and for any transport
/// failure; implementations log the failure and swallow it so one bad
/// location never aborts the batch.
#[async_trait]
pub trait TargetSource: Send + Sync {
    async fn targets(
        &self,
        hotspot_id: &str,
        hotspot_name: &str,
        params: FetchParams,
    ) -> Option<TargetList>;
}
