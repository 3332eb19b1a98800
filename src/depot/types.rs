//! Wire types for the depot `pkgs` listing

use serde::Deserialize;

/// One page of a package listing, as returned by `GET /pkgs/{name}?range={offset}`
///
/// Ranges are inclusive on both ends. Absent keys decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackagePage {
    /// Index of the first package on this page
    pub range_start: u64,
    /// Index of the last package on this page
    pub range_end: u64,
    /// Number of packages matching the query across all pages
    pub total_count: u64,
    /// Packages on this page, in server order
    #[serde(rename = "package_list")]
    pub packages: Vec<PackageRecord>,
}

impl PackagePage {
    /// Returns true if this page reaches the end of the result set
    pub fn is_last(&self) -> bool {
        self.range_end.saturating_add(1) >= self.total_count
    }

    /// Offset to request the page after this one.
    ///
    /// The depot is asked to resume at `range_end`, not `range_end + 1`, so the
    /// last package of this page is returned again at the head of the next one.
    pub fn next_offset(&self) -> u64 {
        self.range_end
    }
}

/// A single package identifier in a listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackageRecord {
    pub origin: String,
    pub name: String,
    pub version: String,
    pub release: String,
}
