use thiserror::Error;

#[derive(Debug, Error)]
pub enum DepotError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("Failed to decode depot response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl DepotError {
    /// Returns true if the depot has no package under the requested name
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_package_name_and_status() {
        assert_eq!(
            DepotError::NotFound("core/nginx".to_string()).to_string(),
            "Package not found: core/nginx"
        );
        assert_eq!(
            DepotError::UnexpectedStatus(503).to_string(),
            "Unexpected status code: 503"
        );
    }

    #[test]
    fn is_not_found_only_matches_not_found() {
        assert!(DepotError::NotFound("core/nginx".to_string()).is_not_found());
        assert!(!DepotError::UnexpectedStatus(404).is_not_found());
    }
}
