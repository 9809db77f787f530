use clap::Parser;
use hotspot_targets::utils::{logger, validation::Validate};
use hotspot_targets::{CliConfig, EbirdClient, HotspotRanker, RunOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hotspot-targets");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = EbirdClient::new(
        config.hotspot_api_base.clone(),
        config.targets_api_url.clone(),
        config.api_key(),
    )?;
    let ranker = HotspotRanker::new(client, config.run_params());

    match ranker.run().await {
        Ok(RunOutcome::Exported {
            path,
            rows,
            summary,
        }) => {
            tracing::info!(
                "Run finished: {} hotspots found, {} processed, {} species discovered, {} ranked",
                summary.hotspots_found,
                summary.hotspots_processed,
                summary.species_discovered,
                summary.ranked_count
            );
            println!("✅ Exported {} hotspots to {}", rows, path.display());
        }
        Ok(RunOutcome::SpeciesNotFound { code, suggestions }) => {
            println!("Species {} not found in target lists", code);
            if !suggestions.is_empty() {
                println!("Try one of these codes: {}", suggestions.join(", "));
            }
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
