/// One named geographic point from the hotspot directory.
#[derive(Debug, Clone)]
pub struct Hotspot {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Lifetime species count for the location; 0 when the directory omits it.
    pub species_all_time: u32,
}

/// One species entry in a hotspot's target list.
#[derive(Debug, Clone)]
pub struct Target {
    pub code: String,
    pub name: String,
    /// Frequency percent over the requested date window.
    pub percent: f64,
    /// Frequency percent over the full year.
    pub percent_yr: f64,
}

impl Target {
    pub fn percent_for(&self, basis: FrequencyBasis) -> f64 {
        match basis {
            FrequencyBasis::YearRound => self.percent_yr,
            FrequencyBasis::DateWindow => self.percent,
        }
    }
}

/// Target-species data for one hotspot, plus the sample sizes backing the
/// frequencies.
#[derive(Debug, Clone)]
pub struct TargetList {
    pub hotspot_id: String,
    pub hotspot_name: String,
    pub items: Vec<Target>,
    /// Checklist count for the date window.
    pub checklists: u32,
    /// Checklist count for the full year.
    pub checklists_yr: u32,
}

/// A hotspot that survived ranking for one species. Carries both bases so
/// downstream consumers can pick either.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedHotspot {
    pub hotspot_id: String,
    pub hotspot_name: String,
    pub percent: f64,
    pub percent_yr: f64,
    pub checklists: u32,
    pub checklists_yr: u32,
}

impl RankedHotspot {
    pub fn percent_for(&self, basis: FrequencyBasis) -> f64 {
        match basis {
            FrequencyBasis::YearRound => self.percent_yr,
            FrequencyBasis::DateWindow => self.percent,
        }
    }

    pub fn checklists_for(&self, basis: FrequencyBasis) -> u32 {
        match basis {
            FrequencyBasis::YearRound => self.checklists_yr,
            FrequencyBasis::DateWindow => self.checklists,
        }
    }
}

/// Which frequency statistic ranking and reporting operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBasis {
    YearRound,
    DateWindow,
}

/// Shared parameters for every per-hotspot frequency request.
#[derive(Debug, Clone, Copy)]
pub struct FetchParams {
    /// Start month, 1-12. Validated by the caller, not the fetcher.
    pub start_month: u8,
    /// End month, 1-12.
    pub end_month: u8,
    /// Minimum frequency percent the provider should include.
    pub cutoff: u32,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub hotspots_found: usize,
    pub hotspots_processed: usize,
    pub species_discovered: usize,
    pub ranked_count: usize,
}
