//! Command-line interface for hab-depot

use std::io::Write;

use clap::Parser;

use crate::config::DepotSettings;
use crate::depot::registry::Depot;

#[derive(Debug, Parser)]
#[command(name = "hab-depot", version, about = "List the versions a Builder depot holds for a package")]
pub struct Cli {
    /// Origin-scoped package name (e.g., core/nginx)
    pub package: String,

    /// Depot API base URL [default: $HAB_BLDR_URL/v1/depot, or the public Builder]
    #[arg(long = "url", value_name = "URL")]
    pub depot_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print versions as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn settings(&self) -> DepotSettings {
        DepotSettings::resolve(self.depot_url.clone(), self.timeout)
    }
}

/// Looks up `package` in `depot` and writes its versions to `out`
pub async fn print_versions<D, W>(
    depot: &D,
    package: &str,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()>
where
    D: Depot + ?Sized,
    W: Write,
{
    let versions = depot.package_versions(package).await?;

    if json {
        serde_json::to_writer(&mut *out, &versions)?;
        writeln!(out)?;
    } else {
        for version in &versions {
            writeln!(out, "{}", version)?;
        }
    }

    Ok(())
}
