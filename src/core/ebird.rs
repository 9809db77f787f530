use crate::domain::model::{FetchParams, Hotspot, Target, TargetList};
use crate::domain::ports::{HotspotSource, TargetSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Applies to both the directory call and every per-hotspot targets call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for both providers: the hotspot directory and the
/// target-frequency service.
pub struct EbirdClient {
    client: Client,
    hotspot_api_base: String,
    targets_api_url: String,
    api_key: String,
}

impl EbirdClient {
    pub fn new(hotspot_api_base: String, targets_api_url: String, api_key: String) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            hotspot_api_base,
            targets_api_url,
            api_key,
        })
    }

    async fn try_targets(
        &self,
        hotspot_id: &str,
        hotspot_name: &str,
        params: FetchParams,
    ) -> Result<Option<TargetList>> {
        let response = self
            .client
            .get(&self.targets_api_url)
            .query(&[
                ("region", hotspot_id.to_string()),
                ("startMonth", params.start_month.to_string()),
                ("endMonth", params.end_month.to_string()),
                ("cutoff", params.cutoff.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: TargetsResponse = response.json().await?;

        // No `items` key means the provider has no data for this hotspot.
        let Some(items) = body.items else {
            return Ok(None);
        };

        Ok(Some(TargetList {
            hotspot_id: hotspot_id.to_string(),
            hotspot_name: hotspot_name.to_string(),
            items: items.into_iter().map(Target::from).collect(),
            checklists: body.n,
            checklists_yr: body.yr_n,
        }))
    }
}

#[async_trait]
impl HotspotSource for EbirdClient {
    async fn hotspots(&self, region: &str) -> Result<Vec<Hotspot>> {
        let url = format!("{}/ref/hotspot/{}", self.hotspot_api_base, region);
        tracing::debug!("Fetching hotspot directory: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("fmt", "json"), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let rows: Vec<HotspotRow> = response.json().await?;
        Ok(rows.into_iter().map(Hotspot::from).collect())
    }
}

#[async_trait]
impl TargetSource for EbirdClient {
    async fn targets(
        &self,
        hotspot_id: &str,
        hotspot_name: &str,
        params: FetchParams,
    ) -> Option<TargetList> {
        // One bad hotspot must never abort the batch: log and move on.
        match self.try_targets(hotspot_id, hotspot_name, params).await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Failed to fetch targets for {}: {}", hotspot_id, e);
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct HotspotRow {
    #[serde(rename = "locId")]
    loc_id: String,
    #[serde(rename = "locName")]
    loc_name: String,
    lat: f64,
    lng: f64,
    #[serde(rename = "numSpeciesAllTime", default)]
    num_species_all_time: u32,
}

impl From<HotspotRow> for Hotspot {
    fn from(row: HotspotRow) -> Self {
        Hotspot {
            id: row.loc_id,
            name: row.loc_name,
            lat: row.lat,
            lng: row.lng,
            species_all_time: row.num_species_all_time,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TargetsResponse {
    items: Option<Vec<TargetRow>>,
    #[serde(rename = "N", default)]
    n: u32,
    #[serde(rename = "yrN", default)]
    yr_n: u32,
}

#[derive(Debug, Deserialize)]
struct TargetRow {
    code: String,
    name: String,
    #[serde(default)]
    percent: f64,
    #[serde(rename = "percentYr", default)]
    percent_yr: f64,
}

impl From<TargetRow> for Target {
    fn from(row: TargetRow) -> Self {
        Target {
            code: row.code,
            name: row.name,
            percent: row.percent,
            percent_yr: row.percent_yr,
        }
    }
}
