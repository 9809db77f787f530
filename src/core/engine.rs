use crate::core::{aggregate, rank, report};
use crate::domain::model::{FetchParams, FrequencyBasis, RunSummary};
use crate::domain::ports::{HotspotSource, TargetSource};
use crate::utils::error::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Everything one ranking run needs, assembled by the caller.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub region: String,
    pub species_code: String,
    pub fetch: FetchParams,
    pub basis: FrequencyBasis,
    /// Minimum selected-basis percent for a hotspot to be ranked.
    pub rank_cutoff: f64,
    /// Pause between consecutive frequency requests.
    pub delay: Duration,
    /// When set, only the top N hotspots by lifetime species count are
    /// fetched.
    pub max_hotspots: Option<usize>,
    /// When `None`, the file name is derived from the species display name.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub enum RunOutcome {
    Exported {
        path: PathBuf,
        rows: usize,
        summary: RunSummary,
    },
    /// The target code never appeared in any hotspot's list. Non-fatal; the
    /// caller is expected to surface the suggested alternatives.
    SpeciesNotFound {
        code: String,
        suggestions: Vec<String>,
    },
}

const MAX_SUGGESTIONS: usize = 20;
const PREVIEW_ROWS: usize = 10;

/// Drives the whole pipeline: directory fetch, optional top-N trim,
/// sequential aggregation, catalog lookup, ranking, CSV export.
pub struct HotspotRanker<C> {
    client: C,
    params: RunParams,
}

impl<C: HotspotSource + TargetSource> HotspotRanker<C> {
    pub fn new(client: C, params: RunParams) -> Self {
        Self { client, params }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        let params = &self.params;

        tracing::info!("Fetching hotspots for region {}", params.region);
        let mut hotspots = self.client.hotspots(&params.region).await?;
        let hotspots_found = hotspots.len();
        tracing::info!("Found {} hotspots", hotspots_found);

        if let Some(max) = params.max_hotspots {
            hotspots.sort_by(|a, b| b.species_all_time.cmp(&a.species_all_time));
            hotspots.truncate(max);
            tracing::info!(
                "Processing top {} hotspots by lifetime species count",
                hotspots.len()
            );
        }

        tracing::info!(
            "Downloading target lists (months {}-{})",
            params.fetch.start_month,
            params.fetch.end_month
        );
        let all_targets = aggregate::download_all_target_lists(
            &self.client,
            &hotspots,
            params.fetch,
            params.delay,
        )
        .await;
        tracing::info!("Downloaded targets for {} hotspots", all_targets.len());

        let catalog = rank::all_target_species(&all_targets);
        tracing::info!("Found {} unique target species", catalog.len());

        let species_name = catalog.get(&params.species_code).cloned();
        let Some(species_name) = species_name else {
            let mut suggestions: Vec<String> = catalog.into_keys().collect();
            suggestions.sort();
            suggestions.truncate(MAX_SUGGESTIONS);
            return Ok(RunOutcome::SpeciesNotFound {
                code: params.species_code.clone(),
                suggestions,
            });
        };

        let ranked = rank::best_hotspots_for_species(
            &all_targets,
            &params.species_code,
            params.basis,
            params.rank_cutoff,
        );

        tracing::info!(
            "Best hotspots for {} ({}):",
            species_name,
            params.species_code
        );
        for (i, entry) in ranked.iter().take(PREVIEW_ROWS).enumerate() {
            tracing::info!(
                "  {}. {}: {:.1}% ({} checklists)",
                i + 1,
                entry.hotspot_name,
                entry.percent_for(params.basis),
                entry.checklists_for(params.basis)
            );
        }

        let path = params
            .output
            .clone()
            .unwrap_or_else(|| derived_output_path(&species_name));
        let rows = report::export_csv(&ranked, params.basis, &path)?;

        Ok(RunOutcome::Exported {
            path,
            rows,
            summary: RunSummary {
                hotspots_found,
                hotspots_processed: all_targets.len(),
                species_discovered: catalog.len(),
                ranked_count: ranked.len(),
            },
        })
    }
}

fn derived_output_path(species_name: &str) -> PathBuf {
    let slug = species_name.to_lowercase().replace(' ', "-");
    PathBuf::from(format!("best-hotspots-{}.csv", slug))
}
