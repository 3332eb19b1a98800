use std::path::PathBuf;
use std::time::Duration;

use crate::depot::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Environment variable holding the Builder URL, shared with the `hab` tooling
pub const BLDR_URL_ENV: &str = "HAB_BLDR_URL";

/// Name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "hab-depot.log";

/// Path of the depot API below a Builder URL
const DEPOT_API_PATH: &str = "/v1/depot";

/// Settings used to build a DepotClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepotSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for DepotSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DepotSettings {
    /// Resolves settings from command-line overrides and the process environment.
    /// An explicit depot URL wins over $HAB_BLDR_URL, which wins over the public Builder.
    pub fn resolve(depot_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        resolve_with_env(depot_url, timeout_secs, std::env::var(BLDR_URL_ENV).ok())
    }
}

/// Returns the path to the data directory for hab-depot.
/// Uses $XDG_DATA_HOME/hab-depot if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/hab-depot,
/// or ./hab-depot if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("hab-depot")
}

fn resolve_with_env(
    depot_url: Option<String>,
    timeout_secs: Option<u64>,
    bldr_url: Option<String>,
) -> DepotSettings {
    let base_url = depot_url
        .or_else(|| {
            bldr_url
                .filter(|url| !url.trim().is_empty())
                .map(|url| format!("{}{}", url.trim().trim_end_matches('/'), DEPOT_API_PATH))
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    DepotSettings {
        base_url,
        timeout: timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/hab-depot"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/hab-depot"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./hab-depot"));
    }

    #[test]
    fn resolve_defaults_to_public_builder() {
        let settings = resolve_with_env(None, None, None);

        assert_eq!(settings, DepotSettings::default());
        assert_eq!(settings.timeout, Duration::from_secs(10));
    }

    #[test]
    fn resolve_appends_depot_path_to_bldr_url() {
        let settings = resolve_with_env(None, None, Some("https://bldr.example.com/".to_string()));

        assert_eq!(settings.base_url, "https://bldr.example.com/v1/depot");
    }

    #[test]
    fn resolve_ignores_blank_bldr_url() {
        let settings = resolve_with_env(None, None, Some("  ".to_string()));

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn resolve_prefers_explicit_url_and_timeout() {
        let settings = resolve_with_env(
            Some("http://localhost:9636/v1/depot".to_string()),
            Some(3),
            Some("https://bldr.example.com".to_string()),
        );

        assert_eq!(settings.base_url, "http://localhost:9636/v1/depot");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }
}
