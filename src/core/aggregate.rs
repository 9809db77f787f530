use crate::domain::model::{FetchParams, Hotspot, TargetList};
use crate::domain::ports::TargetSource;
use std::time::Duration;

/// Downloads target lists for every hotspot, strictly in sequence, pausing
/// `delay` between consecutive calls (none after the last). Hotspots whose
/// fetch fails or comes back empty are elided; the survivors keep input
/// order.
pub async fn download_all_target_lists<S: TargetSource>(
    source: &S,
    hotspots: &[Hotspot],
    params: FetchParams,
    delay: Duration,
) -> Vec<TargetList> {
    let total = hotspots.len();
    let mut collected = Vec::new();

    for (i, hotspot) in hotspots.iter().enumerate() {
        tracing::info!("Fetching targets for {} ({}/{})", hotspot.name, i + 1, total);

        match source.targets(&hotspot.id, &hotspot.name, params).await {
            Some(list) if !list.items.is_empty() => collected.push(list),
            Some(_) => tracing::debug!("No target species for {}", hotspot.id),
            None => {}
        }

        if i + 1 < total {
            tokio::time::sleep(delay).await;
        }
    }

    collected
}
