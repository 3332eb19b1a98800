//! Habitat Builder depot API implementation

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::depot::error::DepotError;
use crate::depot::registry::Depot;
use crate::depot::types::{PackagePage, PackageRecord};

/// Default base URL for the public Builder depot
pub const DEFAULT_BASE_URL: &str = "https://bldr.habitat.sh/v1/depot";

/// Per-request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the depot's paged `pkgs` listing
pub struct DepotClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl DepotClient {
    /// Creates a new DepotClient with a custom base URL and the default timeout
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a new DepotClient whose requests each give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn page_url(&self, package_name: &str, from: u64) -> String {
        format!("{}/pkgs/{}?range={}", self.base_url, package_name, from)
    }

    /// Fetches the page of `package_name` starting at range index `from`
    pub async fn fetch_page(
        &self,
        package_name: &str,
        from: u64,
    ) -> Result<PackagePage, DepotError> {
        let url = self.page_url(package_name, from);
        debug!("Fetching depot page: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DepotError::NotFound(package_name.to_string()));
        }

        if status != reqwest::StatusCode::OK {
            warn!("depot returned status {}: {}", status, url);
            return Err(DepotError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;

        let page: PackagePage = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse depot response from {}: {}", url, e);
            DepotError::Decode(e)
        })?;

        debug!(
            "Received range {}..={} of {} for {} ({} packages)",
            page.range_start,
            page.range_end,
            page.total_count,
            package_name,
            page.packages.len()
        );

        Ok(page)
    }

    /// Walks every page of `package_name` and returns the listed versions in page order.
    ///
    /// Each page after the first is requested at the previous page's `range_end`,
    /// so boundary packages appear twice. Any failure aborts the walk and
    /// discards what was collected so far.
    pub async fn list_versions(&self, package_name: &str) -> Result<Vec<String>, DepotError> {
        let mut packages: Vec<PackageRecord> = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.fetch_page(package_name, offset).await?;
            let done = page.is_last();
            let next_offset = page.next_offset();

            packages.extend(page.packages);

            if done {
                break;
            }

            offset = next_offset;
        }

        let versions: Vec<String> = packages.into_iter().map(|p| p.version).collect();
        info!("Found {} versions of {}", versions.len(), package_name);

        Ok(versions)
    }
}

impl Default for DepotClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl Depot for DepotClient {
    async fn package_versions(&self, package_name: &str) -> Result<Vec<String>, DepotError> {
        self.list_versions(package_name).await
    }
}
