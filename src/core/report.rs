use crate::domain::model::{FrequencyBasis, RankedHotspot};
use crate::utils::error::Result;
use std::path::Path;

pub const REPORT_HEADER: [&str; 5] = [
    "Rank",
    "Hotspot Name",
    "Location ID",
    "Frequency (%)",
    "Checklists",
];

/// Formats a frequency for display: anything above 1% rounds to the nearest
/// whole percent, while sub-1% values stay raw so rare species remain
/// visible. Exactly 1.0 takes the raw branch.
pub fn display_percent(percent: f64) -> String {
    if percent > 1.0 {
        format!("{}", percent.round())
    } else {
        format!("{}", percent)
    }
}

/// Writes the ranked hotspots as a CSV report, overwriting `path`. Returns
/// the number of data rows written.
pub fn export_csv(
    ranked: &[RankedHotspot],
    basis: FrequencyBasis,
    path: &Path,
) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(REPORT_HEADER)?;

    for (i, entry) in ranked.iter().enumerate() {
        writer.write_record(&[
            (i + 1).to_string(),
            entry.hotspot_name.clone(),
            entry.hotspot_id.clone(),
            display_percent(entry.percent_for(basis)),
            entry.checklists_for(basis).to_string(),
        ])?;
    }

    writer.flush()?;
    tracing::info!("Exported {} hotspots to {}", ranked.len(), path.display());
    Ok(ranked.len())
}
