//! USNO moon-phase API client.
//!
//! Fetches the principal phase dates for a year from
//! `https://aa.usno.navy.mil/api/moon/phases/year` and stores them through
//! the repository.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use super::IngestError;
use crate::db::{FullRepository, NewMoonPhase};
use crate::models::{MoonPhase, MoonPhaseEvent};

const USNO_BASE_URL: &str = "https://aa.usno.navy.mil/api/moon/phases/year";

/// Root response of the USNO phase API.
#[derive(Debug, Deserialize)]
struct MoonApiResponse {
    #[serde(default)]
    phasedata: Vec<MoonPhaseRow>,
}

/// A single phase row from the API.
#[derive(Debug, Deserialize)]
struct MoonPhaseRow {
    year: i32,
    month: u32,
    day: u32,
    phase: String,
}

/// Client for the USNO moon-phase API.
#[derive(Debug, Clone)]
pub struct MoonDataClient {
    client: Client,
    base_url: String,
}

impl Default for MoonDataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MoonDataClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: USNO_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL. Test hook.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the phase events for `year` and persist them.
    ///
    /// Skips the fetch when the repository already holds phases for the
    /// year and returns the stored records instead.
    pub async fn fetch_and_store(
        &self,
        repo: &dyn FullRepository,
        year: i32,
    ) -> Result<Vec<MoonPhaseEvent>, IngestError> {
        if repo.has_moon_phases_for_year(year).await? {
            info!(year, "moon phases already stored, skipping fetch");
            return Ok(repo.moon_phases_for_year(year).await?);
        }

        let url = format!("{}?year={}", self.base_url, year);
        info!(url = %url, "fetching moon phases");

        let response: MoonApiResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let phases: Vec<NewMoonPhase> = response
            .phasedata
            .into_iter()
            .filter_map(|row| parse_phase_row(row, year))
            .collect();

        if phases.is_empty() {
            warn!(year, "no moon phase data returned from API");
            return Ok(Vec::new());
        }

        let stored = repo.store_moon_phases(phases).await?;
        info!(year, count = stored.len(), "moon phases stored");
        Ok(stored)
    }
}

/// Convert an API row into a storable phase event.
///
/// Unknown phase strings and invalid dates are skipped with a warning
/// rather than failing the whole ingest.
fn parse_phase_row(row: MoonPhaseRow, year: i32) -> Option<NewMoonPhase> {
    let phase = match map_phase(&row.phase) {
        Some(phase) => phase,
        None => {
            warn!(phase = %row.phase, "skipping unrecognized moon phase");
            return None;
        }
    };

    let date = match NaiveDate::from_ymd_opt(row.year, row.month, row.day) {
        Some(date) => date,
        None => {
            warn!(row.year, row.month, row.day, "skipping invalid phase date");
            return None;
        }
    };

    Some(NewMoonPhase { phase, date, year })
}

/// Map a USNO phase string to the enum, case-insensitively.
fn map_phase(phase: &str) -> Option<MoonPhase> {
    match phase.to_lowercase().as_str() {
        "new moon" => Some(MoonPhase::NewMoon),
        "first quarter" => Some(MoonPhase::FirstQuarter),
        "full moon" => Some(MoonPhase::FullMoon),
        "last quarter" => Some(MoonPhase::LastQuarter),
        _ => None,
    }
}
