//! Depot trait for listing the versions published under a package name

#[cfg(test)]
use mockall::automock;

use crate::depot::error::DepotError;

/// Trait for looking up package versions in a depot
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Depot: Send + Sync {
    /// Fetches every version the depot lists for a package
    ///
    /// # Arguments
    /// * `package_name` - Origin-scoped package name (e.g., "core/nginx")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Versions in the order the depot pages them
    /// * `Err(DepotError)` - If any page fetch fails; no partial result is returned
    async fn package_versions(&self, package_name: &str) -> Result<Vec<String>, DepotError>;
}
