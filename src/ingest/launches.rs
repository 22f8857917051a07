//! Launch Library 2 API client.
//!
//! Fetches orbital launches for a year from `ll.thespacedevs.com`,
//! following cursor pagination, and stores them through the repository.

use chrono::{DateTime, Datelike, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use super::IngestError;
use crate::db::{FullRepository, NewLaunch};
use crate::models::{LaunchRecord, LaunchStatus};

const LAUNCH_LIBRARY_BASE_URL: &str = "https://ll.thespacedevs.com/2.2.0/launch/";

/// Fallback start of the available-years range (Sputnik).
const FIRST_LAUNCH_YEAR: i32 = 1957;

/// Root response of the Launch Library 2 API.
#[derive(Debug, Deserialize)]
struct LaunchLibraryResponse {
    /// URL of the next page, if any.
    next: Option<String>,
    #[serde(default)]
    results: Vec<LaunchResult>,
}

/// A single launch from the API.
#[derive(Debug, Deserialize)]
struct LaunchResult {
    id: String,
    name: String,
    /// "No Earlier Than" launch timestamp.
    net: DateTime<Utc>,
    status: Option<StatusInfo>,
    launch_service_provider: Option<NamedEntity>,
    rocket: Option<RocketInfo>,
}

#[derive(Debug, Deserialize)]
struct StatusInfo {
    name: String,
}

#[derive(Debug, Deserialize)]
struct NamedEntity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RocketInfo {
    configuration: Option<NamedEntity>,
}

/// Client for the Launch Library 2 API.
#[derive(Debug, Clone)]
pub struct LaunchClient {
    client: Client,
    base_url: String,
}

impl Default for LaunchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: LAUNCH_LIBRARY_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL. Test hook.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the launches for `year` and persist them.
    ///
    /// Only orbital launches are requested. Pages of 100 are followed via
    /// the `next` cursor until exhausted. Skips the fetch when the
    /// repository already holds launches for the year.
    pub async fn fetch_and_store(
        &self,
        repo: &dyn FullRepository,
        year: i32,
    ) -> Result<Vec<LaunchRecord>, IngestError> {
        if repo.has_launches_for_year(year).await? {
            info!(year, "launches already stored, skipping fetch");
            return Ok(repo.launches_for_year(year).await?);
        }

        let mut url = Some(format!(
            "{}?net__gte={}-01-01&net__lte={}-12-31&include_suborbital=false&limit=100",
            self.base_url, year, year
        ));
        let mut launches: Vec<NewLaunch> = Vec::new();
        let mut page = 0usize;

        while let Some(current_url) = url.take() {
            page += 1;
            info!(page, url = %current_url, "fetching launch page");

            let response: LaunchLibraryResponse = self
                .client
                .get(&current_url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            if response.results.is_empty() {
                warn!(page, "no more launch data");
                break;
            }

            launches.extend(response.results.into_iter().map(into_new_launch));
            url = response.next;
        }

        if launches.is_empty() {
            warn!(year, "no launches returned from API");
            return Ok(Vec::new());
        }

        let stored = repo.store_launches(launches).await?;
        info!(year, count = stored.len(), pages = page, "launches stored");
        Ok(stored)
    }

    /// Determine the range of years with launch data, newest first.
    ///
    /// Queries the oldest launch; on upstream failure falls back to
    /// 1957..=current-year so the frontend always gets a usable list.
    pub async fn available_years(&self) -> Vec<i32> {
        let current_year = Utc::now().year();
        let oldest_year = match self.fetch_oldest_launch_year().await {
            Ok(Some(year)) => year,
            Ok(None) => FIRST_LAUNCH_YEAR,
            Err(e) => {
                warn!(error = %e, "failed to fetch oldest launch, using fallback range");
                FIRST_LAUNCH_YEAR
            }
        };

        (oldest_year..=current_year).rev().collect()
    }

    async fn fetch_oldest_launch_year(&self) -> Result<Option<i32>, IngestError> {
        let url = format!("{}?ordering=net&limit=1", self.base_url);
        let response: LaunchLibraryResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.results.first().map(|l| l.net.year()))
    }
}

fn into_new_launch(result: LaunchResult) -> NewLaunch {
    let status = result
        .status
        .map(|s| map_status(&s.name))
        .unwrap_or(LaunchStatus::Tbd);

    NewLaunch {
        external_id: Some(result.id),
        name: result.name,
        launched_at: result.net,
        status,
        agency: result
            .launch_service_provider
            .map(|p| p.name)
            .unwrap_or_else(|| "Unknown".to_string()),
        rocket_type: result
            .rocket
            .and_then(|r| r.configuration)
            .map(|c| c.name)
            .unwrap_or_else(|| "Unknown".to_string()),
    }
}

/// Map an upstream status name to the enum by substring.
///
/// Launch Library reports names like "Launch Successful", "Launch
/// Failure" or "Launch was a Partial Failure". Anything unrecognized
/// maps to TBD rather than failing.
fn map_status(name: &str) -> LaunchStatus {
    let lower = name.to_lowercase();
    if lower.contains("partial") {
        LaunchStatus::Partial
    } else if lower.contains("success") {
        LaunchStatus::Success
    } else if lower.contains("fail") {
        LaunchStatus::Failure
    } else {
        LaunchStatus::Tbd
    }
}
