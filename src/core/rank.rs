use crate::domain::model::{FrequencyBasis, RankedHotspot, TargetList};
use std::collections::HashMap;

/// Ranks hotspots for one species: keeps hotspots where the species appears
/// at or above `cutoff` on the selected basis, sorted descending by that
/// basis. The sort is stable, so ties keep aggregation order.
///
/// A hotspot whose list lacks the code contributes nothing — absence means
/// "no data", not a 0% observation.
pub fn best_hotspots_for_species(
    all_targets: &[TargetList],
    species_code: &str,
    basis: FrequencyBasis,
    cutoff: f64,
) -> Vec<RankedHotspot> {
    let mut results: Vec<RankedHotspot> = all_targets
        .iter()
        .filter_map(|list| {
            let target = list.items.iter().find(|t| t.code == species_code)?;
            if target.percent_for(basis) < cutoff {
                return None;
            }
            Some(RankedHotspot {
                hotspot_id: list.hotspot_id.clone(),
                hotspot_name: list.hotspot_name.clone(),
                percent: target.percent,
                percent_yr: target.percent_yr,
                checklists: list.checklists,
                checklists_yr: list.checklists_yr,
            })
        })
        .collect();

    results.sort_by(|a, b| b.percent_for(basis).total_cmp(&a.percent_for(basis)));
    results
}

/// Maps every species code seen across the target lists to its display
/// name. First occurrence wins; later lists never overwrite a name.
pub fn all_target_species(all_targets: &[TargetList]) -> HashMap<String, String> {
    let mut species = HashMap::new();
    for list in all_targets {
        for target in &list.items {
            species
                .entry(target.code.clone())
                .or_insert_with(|| target.name.clone());
        }
    }
    species
}
